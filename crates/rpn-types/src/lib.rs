//! Shared types for rpncalc.
//!
//! This crate defines the evaluation error type and the history entry
//! record used by the engine and by the shell.

mod error;
mod history;

pub use error::{ErrorKind, EvalError, EvalResult};
pub use history::HistoryEntry;
