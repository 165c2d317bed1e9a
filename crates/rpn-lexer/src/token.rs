//! Token types for the rpncalc lexer.
//!
//! Defines [`TokenKind`], the tagged classification of a single
//! whitespace-delimited word, and [`Token`], which pairs a kind with the
//! source text and its position in the line.

use std::fmt;

/// Every operator and command word the calculator recognises.
pub const ALL_WORDS: &[&str] = &[
    // Binary operators (5)
    "+", "-", "*", "/", "pow",
    // Unary functions (5)
    "sqrt", "sin", "cos", "tan", "fib",
    // Stack commands (5)
    "clear", "show", "pop", "dup", "swap",
];

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Classification of the lexeme.
    pub kind: TokenKind,
    /// The text exactly as it appeared in the line.
    pub lexeme: String,
    /// 1-based index of the token within its line.
    pub position: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Classification of a token. Exactly one applies to any string.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Numeric literal: `42`, `-3.5`, `.25`
    Number(f64),
    /// Two-operand operator.
    Binary(BinaryOp),
    /// One-operand math function.
    Unary(UnaryFn),
    /// Stack-manipulation command.
    Command(Command),
    /// Anything else.
    Unknown,
}

/// Two-operand operators. `a` is second-from-top, `b` is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `pow`
    Pow,
}

impl BinaryOp {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "pow" => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "pow",
        }
    }
}

/// One-operand functions. Trig functions take degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Fib,
}

impl UnaryFn {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "sqrt" => Some(Self::Sqrt),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "fib" => Some(Self::Fib),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Fib => "fib",
        }
    }
}

/// Stack-manipulation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Clear,
    Show,
    Pop,
    Dup,
    Swap,
}

impl Command {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "clear" => Some(Self::Clear),
            "show" => Some(Self::Show),
            "pop" => Some(Self::Pop),
            "dup" => Some(Self::Dup),
            "swap" => Some(Self::Swap),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Show => "show",
            Self::Pop => "pop",
            Self::Dup => "dup",
            Self::Swap => "swap",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_word_maps_to_exactly_one_category() {
        for word in ALL_WORDS {
            let hits = [
                BinaryOp::from_word(word).is_some(),
                UnaryFn::from_word(word).is_some(),
                Command::from_word(word).is_some(),
            ]
            .iter()
            .filter(|hit| **hit)
            .count();
            assert_eq!(hits, 1, "word {word:?}");
        }
    }

    #[test]
    fn names_round_trip_through_from_word() {
        for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Pow] {
            assert_eq!(BinaryOp::from_word(op.symbol()), Some(op));
        }
        for func in [UnaryFn::Sqrt, UnaryFn::Sin, UnaryFn::Cos, UnaryFn::Tan, UnaryFn::Fib] {
            assert_eq!(UnaryFn::from_word(func.name()), Some(func));
        }
        for cmd in [Command::Clear, Command::Show, Command::Pop, Command::Dup, Command::Swap] {
            assert_eq!(Command::from_word(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn words_are_case_sensitive() {
        assert_eq!(UnaryFn::from_word("SQRT"), None);
        assert_eq!(Command::from_word("Clear"), None);
    }
}
