use serde::{Deserialize, Serialize};
use std::fmt;

/// One successfully evaluated expression and the value it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression text as entered.
    pub expression: String,
    /// Top of the stack after evaluation.
    pub result: f64,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }
}

/// `expression = result`, with the result in shortest `f64` form (`21`,
/// `0.25`) rather than fixed six-decimal notation.
impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}
