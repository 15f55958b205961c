use crate::solver::RpnError;
use rpnlex::{RpnToken, RpnTokenizer};
use std::fmt;

#[derive(PartialEq, Debug)]
pub struct RpnExpr(pub Vec<RpnToken>);

impl RpnExpr {
    pub fn parse_str(expr: &str) -> Result<RpnExpr, RpnError> {
        Self::parse(&mut RpnTokenizer::new(expr))
    }

    pub fn parse(lex: &mut impl Iterator<Item = RpnToken>) -> Result<RpnExpr, RpnError> {
        let mut out = Vec::new();
        for token in lex {
            match token {
                RpnToken::Unknown(lexeme) => return Err(RpnError::InvalidToken(lexeme)),
                token => out.push(token),
            }
        }
        Ok(RpnExpr(out))
    }
}

impl fmt::Display for RpnExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self
            .0
            .iter()
            .map(|token| match token {
                RpnToken::Number(x) => format!("{}", x),
                RpnToken::Op(op) => op.clone(),
                RpnToken::OParen => format!("("),
                RpnToken::CParen => format!(")"),
                RpnToken::Unknown(lexeme) => lexeme.clone(),
            })
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", text)
    }
}
