//! Read-only renderings of engine state and queued notices.

use crate::stack::OperandStack;
use std::fmt;

/// A non-error event raised while processing tokens.
///
/// The engine queues these instead of printing; the caller drains them
/// with [`Calculator::take_notices`](crate::Calculator::take_notices).
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// `clear` emptied the stack.
    StackCleared,
    /// `show` captured the stack, top first.
    StackShown(Vec<f64>),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackCleared => write!(f, "stack cleared"),
            Self::StackShown(values) => write_top_down(f, values.iter().copied()),
        }
    }
}

/// Displays a stack top to bottom: `stack (top to bottom): 3 2 1`.
pub struct StackDisplay<'a> {
    stack: &'a OperandStack,
}

impl<'a> StackDisplay<'a> {
    pub(crate) fn new(stack: &'a OperandStack) -> Self {
        Self { stack }
    }
}

impl fmt::Display for StackDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_top_down(f, self.stack.iter_top_down())
    }
}

fn write_top_down(f: &mut fmt::Formatter<'_>, values: impl Iterator<Item = f64>) -> fmt::Result {
    let mut values = values.peekable();
    if values.peek().is_none() {
        return write!(f, "stack is empty");
    }
    write!(f, "stack (top to bottom):")?;
    for value in values {
        write!(f, " {value}")?;
    }
    Ok(())
}
