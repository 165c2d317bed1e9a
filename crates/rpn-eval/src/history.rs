//! Append-only log of evaluated expressions.

use rpn_types::HistoryEntry;
use std::fmt;

/// Chronological record of successful single-expression evaluations.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append unconditionally. Deciding what deserves an entry is up to the caller.
    pub fn record(&mut self, expression: impl Into<String>, result: f64) {
        self.entries.push(HistoryEntry::new(expression, result));
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn display(&self) -> HistoryDisplay<'_> {
        HistoryDisplay {
            entries: &self.entries,
        }
    }
}

/// Numbered listing of history entries, oldest first.
pub struct HistoryDisplay<'a> {
    entries: &'a [HistoryEntry],
}

impl fmt::Display for HistoryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "no history");
        }
        write!(f, "history:")?;
        for (i, entry) in self.entries.iter().enumerate() {
            write!(f, "\n{}: {entry}", i + 1)?;
        }
        Ok(())
    }
}
