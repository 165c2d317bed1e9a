//! Evaluation error types for the stack machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Evaluation error: a rejected token or an expression with no result.
///
/// Every variant is recoverable. The engine stays in a well-defined state
/// after returning one of these and the caller decides how to report it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator needed more operands than the stack holds.
    #[error("stack underflow: need at least {required} operand(s), have {available}")]
    StackUnderflow { required: usize, available: usize },

    /// `pop`, `dup` or a result lookup on an empty stack.
    #[error("stack is empty")]
    EmptyStack,

    /// `/` with a divisor of exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Argument outside a function's domain (negative `sqrt`, negative `fib`).
    #[error("domain error: {function} is undefined for {value}")]
    Domain { function: &'static str, value: f64 },

    /// Token that is neither a number, an operator nor a command.
    #[error("unknown operator or command '{token}' at position {position}")]
    UnknownToken { token: String, position: usize },

    /// The line contained no tokens at all.
    #[error("empty expression")]
    EmptyExpression,

    /// Every token succeeded but the stack was left empty.
    #[error("expression left no result on the stack")]
    NoResult,
}

impl EvalError {
    /// The category of this error, stable across message wording.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StackUnderflow { .. } => ErrorKind::StackUnderflow,
            Self::EmptyStack => ErrorKind::EmptyStack,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::Domain { .. } => ErrorKind::DomainError,
            Self::UnknownToken { .. } => ErrorKind::UnknownToken,
            Self::EmptyExpression => ErrorKind::EmptyExpression,
            Self::NoResult => ErrorKind::NoResult,
        }
    }
}

/// Serialisable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    StackUnderflow,
    EmptyStack,
    DivisionByZero,
    DomainError,
    UnknownToken,
    EmptyExpression,
    NoResult,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "stack_underflow"),
            Self::EmptyStack => write!(f, "empty_stack"),
            Self::DivisionByZero => write!(f, "division_by_zero"),
            Self::DomainError => write!(f, "domain_error"),
            Self::UnknownToken => write!(f, "unknown_token"),
            Self::EmptyExpression => write!(f, "empty_expression"),
            Self::NoResult => write!(f, "no_result"),
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
