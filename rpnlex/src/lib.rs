mod rpn_tokenizer;

pub use rpn_tokenizer::{RpnToken, RpnTokenizer, OPERATORS};
