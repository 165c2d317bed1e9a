//! Line splitting and stateless token classification.
//!
//! A line is split on ASCII whitespace; each word is classified on its own with
//! no lookahead and no memory of earlier words.

use crate::token::{BinaryOp, Command, Token, TokenKind, UnaryFn};

/// Syntactic numeric check.
///
/// Non-empty, an optional leading `-` that is not the whole string, then
/// only ASCII digits with at most one `.`. This says nothing about whether
/// the text parses to a finite value.
pub fn is_number(word: &str) -> bool {
    let digits = match word.strip_prefix('-') {
        Some("") => return false,
        Some(rest) => rest,
        None => word,
    };
    if digits.is_empty() {
        return false;
    }

    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '.' if seen_dot => return false,
            '.' => seen_dot = true,
            c if c.is_ascii_digit() => {}
            _ => return false,
        }
    }
    true
}

/// Classify a single word.
///
/// Numbers win over operator words, so `-5` is a literal while `-` is
/// subtraction. Words that pass [`is_number`] without carrying a digit
/// (`.`, `-.`) have no value and come back as [`TokenKind::Unknown`].
pub fn classify(word: &str) -> TokenKind {
    if is_number(word) {
        return match word.parse::<f64>() {
            Ok(value) => TokenKind::Number(value),
            Err(_) => TokenKind::Unknown,
        };
    }
    if let Some(op) = BinaryOp::from_word(word) {
        TokenKind::Binary(op)
    } else if let Some(func) = UnaryFn::from_word(word) {
        TokenKind::Unary(func)
    } else if let Some(cmd) = Command::from_word(word) {
        TokenKind::Command(cmd)
    } else {
        TokenKind::Unknown
    }
}

/// Splits one input line into classified tokens.
pub struct Lexer<'src> {
    source: &'src str,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Raw words in order. Empty or whitespace-only input yields nothing.
    ///
    /// Only ASCII whitespace separates words; a non-breaking space stays
    /// inside the word it appears in.
    pub fn words(&self) -> impl Iterator<Item = &'src str> {
        self.source.split_ascii_whitespace()
    }

    /// Lex the whole line.
    pub fn tokens(self) -> Vec<Token> {
        self.words()
            .enumerate()
            .map(|(i, word)| Token::new(classify(word), word, i + 1))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_grammar() {
        for ok in ["0", "42", "-7", "3.14", "-0.5", ".5", "5.", "007"] {
            assert!(is_number(ok), "{ok:?} should be numeric");
        }
        for bad in ["", "-", "--1", "1.2.3", "+5", "1e5", "abc", "1-", " 1", "٣"] {
            assert!(!is_number(bad), "{bad:?} should not be numeric");
        }
    }

    #[test]
    fn dot_alone_is_numeric_but_unknown() {
        assert!(is_number("."));
        assert_eq!(classify("."), TokenKind::Unknown);
        assert_eq!(classify("-."), TokenKind::Unknown);
    }

    #[test]
    fn minus_sign_is_operator_alone_and_sign_when_prefixed() {
        assert_eq!(classify("-"), TokenKind::Binary(BinaryOp::Sub));
        assert_eq!(classify("-3"), TokenKind::Number(-3.0));
    }
}
