#![deny(warnings)]

use std::str::FromStr;

#[derive(Clone, PartialEq, Debug)]
pub enum RpnToken {
    Unknown(String),
    Number(f64),
    Op(String),
    OParen,
    CParen,
}

pub const OPERATORS: [&str; 5] = ["+", "-", "*", "/", "**"];

pub struct RpnTokenizer {
    elements: std::vec::IntoIter<String>,
}

impl RpnTokenizer {
    pub fn new(source: &str) -> Self {
        // empty bracket pairs are erased before splitting, they never
        // reach classification
        let clean = source.trim().replace("()", "");
        let elements = clean
            .split_whitespace()
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter();
        RpnTokenizer { elements }
    }

    // numbers are tried before operators so "-3.5" lexes as a number
    // while a lone "-" falls through to the operator check
    fn classify(el: &str) -> RpnToken {
        let starts_numeric = el.starts_with(|c: char| "+-0123456789".contains(c));
        let ends_in_digit = el.ends_with(|c: char| c.is_ascii_digit());
        if starts_numeric && ends_in_digit {
            return match f64::from_str(el) {
                Ok(num) => RpnToken::Number(num),
                Err(_) => RpnToken::Unknown(el.to_string()),
            };
        }
        if OPERATORS.contains(&el) {
            RpnToken::Op(el.to_string())
        } else if el == "(" {
            RpnToken::OParen
        } else if el == ")" {
            RpnToken::CParen
        } else {
            RpnToken::Unknown(el.to_string())
        }
    }
}

impl Iterator for RpnTokenizer {
    type Item = RpnToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next().map(|el| Self::classify(&el))
    }
}

///////////////////////////////////////////////////////////////////////////////
