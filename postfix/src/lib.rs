pub use crate::expr::RpnExpr;

pub mod expr;

pub use crate::solver::RpnError;
pub use crate::solver::RpnSolver;

mod solver;
#[cfg(test)]
mod solver_test;
