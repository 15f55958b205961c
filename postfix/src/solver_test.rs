use crate::solver::{RpnError, RpnSolver};

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => {
        assert!(($lhs - $rhs).abs() < 1.0e-10)
    };
}

#[test]
fn test_addition() {
    fuzzy_eq!(RpnSolver::new().solve("420 1337 +").unwrap(), 1757.0);
}

#[test]
fn test_subtraction() {
    fuzzy_eq!(RpnSolver::new().solve("1337 420 -").unwrap(), 917.0);
}

#[test]
fn test_multiplication() {
    fuzzy_eq!(RpnSolver::new().solve("1337 420 *").unwrap(), 561540.0);
}

#[test]
fn test_division() {
    fuzzy_eq!(RpnSolver::new().solve("420 20 /").unwrap(), 21.0);
}

#[test]
fn test_power() {
    fuzzy_eq!(RpnSolver::new().solve("420 3 **").unwrap(), 74088000.0);
}

#[test]
fn test_negative_operands() {
    fuzzy_eq!(RpnSolver::new().solve("-3.5 2 *").unwrap(), -7.0);
    fuzzy_eq!(RpnSolver::new().solve("2 -3 **").unwrap(), 0.125);
}

#[test]
fn test_single_number() {
    fuzzy_eq!(RpnSolver::new().solve("420").unwrap(), 420.0);
}

#[test]
fn test_simple_subline() {
    fuzzy_eq!(RpnSolver::new().solve("420 ( 2 1 + ) **").unwrap(), 74088000.0);
}

#[test]
fn test_deep_sublines() {
    let solver = RpnSolver::new();
    let res = solver
        .solve("420 ( 1337 420 ( 63 6 + ) + - ) ( 2 10 ** ) ( 28 7 / ) - * -")
        .unwrap();
    fuzzy_eq!(res, -864540.0);
}

// a bracketed sub-expression behaves like its value spliced inline
#[test]
fn test_subline_substitution() {
    let solver = RpnSolver::new();
    assert_eq!(
        solver.solve("420 ( 2 1 + ) **"),
        solver.solve("420 3 **")
    );
    assert_eq!(
        solver.solve("( 8 2 / ) 5 +"),
        solver.solve("4 5 +")
    );
}

#[test]
fn test_invalid_token() {
    let solver = RpnSolver::new();
    assert_eq!(
        solver.solve("2344 455 & 12 (>-<) + + / **"),
        Err(RpnError::InvalidToken(format!("&")))
    );
}

#[test]
fn test_too_many_operands() {
    assert_eq!(
        RpnSolver::new().solve("2 2 * *"),
        Err(RpnError::TooManyOperands)
    );
}

#[test]
fn test_not_enough_operands() {
    assert_eq!(
        RpnSolver::new().solve("2 2 2 *"),
        Err(RpnError::NotEnoughOperands)
    );
}

#[test]
fn test_empty_input() {
    let solver = RpnSolver::new();
    assert_eq!(solver.solve(""), Err(RpnError::NotEnoughOperands));
    assert_eq!(solver.solve("   "), Err(RpnError::NotEnoughOperands));
    assert_eq!(solver.solve("1 ( ) +"), Err(RpnError::NotEnoughOperands));
}

#[test]
fn test_wrong_bracket_combination() {
    let solver = RpnSolver::new();
    assert_eq!(
        solver.solve("2 ( 2 3 + ) ) +"),
        Err(RpnError::WrongBracketCombination)
    );
    assert_eq!(
        solver.solve("2 ( 2 3 +"),
        Err(RpnError::WrongBracketCombination)
    );
    assert_eq!(solver.solve(") 2 2 +"), Err(RpnError::WrongBracketCombination));
}

#[test]
fn test_zero_division() {
    let solver = RpnSolver::new();
    assert_eq!(solver.solve("2 0 /"), Err(RpnError::DivisionByZero));
    assert_eq!(solver.solve("-17.5 0 /"), Err(RpnError::DivisionByZero));
}

// a failure inside a sub-expression fails the whole evaluation
#[test]
fn test_subline_failure_propagates() {
    let solver = RpnSolver::new();
    assert_eq!(
        solver.solve("1 ( 2 0 / ) +"),
        Err(RpnError::DivisionByZero)
    );
    assert_eq!(
        solver.solve("1 ( 2 2 * * ) +"),
        Err(RpnError::TooManyOperands)
    );
}
