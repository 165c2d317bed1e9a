//! rpncalc lexer: converts an input line into classified tokens.

pub mod lexer;
pub mod token;

pub use lexer::{classify, is_number, Lexer};
pub use token::{BinaryOp, Command, Token, TokenKind, UnaryFn, ALL_WORDS};
