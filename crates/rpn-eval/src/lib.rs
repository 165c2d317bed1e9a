//! rpncalc stack machine.
//!
//! Evaluates whitespace-separated RPN tokens against an owned operand
//! stack. Failures come back as [`EvalError`] values; the engine never
//! prints. Non-error events (`show`, `clear`) are queued as [`Notice`]s
//! for the caller to render.

pub mod batch;
pub mod display;
pub mod evaluator;
pub mod history;
pub mod stack;

pub use batch::{BatchOutcome, BatchReport, Outcome};
pub use display::{Notice, StackDisplay};
pub use evaluator::{fibonacci, Calculator, MAX_PENDING_NOTICES};
pub use history::{History, HistoryDisplay};
pub use rpn_types::{ErrorKind, EvalError, EvalResult, HistoryEntry};
pub use stack::OperandStack;
