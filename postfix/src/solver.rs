use crate::expr::RpnExpr;
use rpnlex::RpnToken;
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum RpnError {
    InvalidToken(String),
    TooManyOperands,
    NotEnoughOperands,
    WrongBracketCombination,
    DivisionByZero,
}

impl fmt::Display for RpnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RpnError::InvalidToken(lexeme) => {
                write!(f, "InvalidToken: cannot classify element '{}'", lexeme)
            }
            RpnError::TooManyOperands => {
                write!(f, "TooManyOperands: operator is missing its operands")
            }
            RpnError::NotEnoughOperands => {
                write!(f, "NotEnoughOperands: values left over on the stack")
            }
            RpnError::WrongBracketCombination => {
                write!(f, "WrongBracketCombination: unbalanced brackets")
            }
            RpnError::DivisionByZero => {
                write!(f, "DivisionByZero: division by zero")
            }
        }
    }
}

impl std::error::Error for RpnError {}

type BinOp = fn(f64, f64) -> Result<f64, RpnError>;

pub struct RpnSolver {
    ops: HashMap<&'static str, BinOp>,
}

impl RpnSolver {
    pub fn new() -> RpnSolver {
        let mut ops: HashMap<&'static str, BinOp> = HashMap::new();
        ops.insert("+", |a, b| Ok(a + b));
        ops.insert("-", |a, b| Ok(a - b));
        ops.insert("*", |a, b| Ok(a * b));
        ops.insert("/", |a, b| {
            if b == 0.0 {
                Err(RpnError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        });
        ops.insert("**", |a, b| Ok(a.powf(b)));
        RpnSolver { ops }
    }

    pub fn solve(&self, line: &str) -> Result<f64, RpnError> {
        self.eval(&RpnExpr::parse_str(line)?)
    }

    pub fn eval(&self, expr: &RpnExpr) -> Result<f64, RpnError> {
        self.eval_span(&expr.0)
    }

    // every span is reduced on its own fresh stack; a bracketed sub-span
    // recurses here and contributes a single value to the enclosing stack
    fn eval_span(&self, tokens: &[RpnToken]) -> Result<f64, RpnError> {
        let mut stack = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            match &tokens[i] {
                RpnToken::Number(num) => {
                    stack.push(*num);
                    i += 1;
                }
                RpnToken::Op(op) => {
                    let b = stack.pop().ok_or(RpnError::TooManyOperands)?;
                    let a = stack.pop().ok_or(RpnError::TooManyOperands)?;
                    let func = self
                        .ops
                        .get(&op[..])
                        .ok_or_else(|| RpnError::InvalidToken(op.clone()))?;
                    stack.push(func(a, b)?);
                    i += 1;
                }
                RpnToken::OParen => {
                    let close = Self::matching_bracket(tokens, i)?;
                    stack.push(self.eval_span(&tokens[i + 1..close])?);
                    i = close + 1;
                }
                // a closer reached here has no matching opener before it
                RpnToken::CParen => return Err(RpnError::WrongBracketCombination),
                RpnToken::Unknown(lexeme) => {
                    return Err(RpnError::InvalidToken(lexeme.clone()))
                }
            }
        }
        match stack.pop() {
            Some(result) if stack.is_empty() => Ok(result),
            _ => Err(RpnError::NotEnoughOperands),
        }
    }

    // index of the closer matching the opener at `open`
    fn matching_bracket(tokens: &[RpnToken], open: usize) -> Result<usize, RpnError> {
        let mut depth = 1;
        for (i, token) in tokens.iter().enumerate().skip(open + 1) {
            match token {
                RpnToken::OParen => depth += 1,
                RpnToken::CParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => (),
            }
        }
        Err(RpnError::WrongBracketCombination)
    }
}
