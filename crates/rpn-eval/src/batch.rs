//! Batch evaluation with per-expression stack isolation.
//!
//! Every expression in a batch runs against the stack as it stood before
//! the batch began. The stack is snapshotted before each expression and
//! restored afterwards whatever the outcome, so a batch answers "what would
//! each of these produce from here" rather than running them in sequence.

use crate::evaluator::Calculator;
use rpn_types::{ErrorKind, EvalResult};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// What a single batch expression produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Evaluation succeeded with this value on top of the stack.
    Ok { value: f64 },
    /// Evaluation failed.
    Failed { kind: ErrorKind, message: String },
}

impl From<EvalResult<f64>> for Outcome {
    fn from(result: EvalResult<f64>) -> Self {
        match result {
            Ok(value) => Self::Ok { value },
            Err(err) => Self::Failed {
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// One expression of a batch and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchOutcome {
    /// 1-based position in the batch.
    pub index: usize,
    pub expression: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl BatchOutcome {
    pub fn value(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Ok { value } => Some(value),
            Outcome::Failed { .. } => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.value().is_some()
    }
}

impl fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "expression {}: {}", self.index, self.expression)?;
        match &self.outcome {
            Outcome::Ok { value } => write!(f, "result: {value}"),
            Outcome::Failed { message, .. } => write!(f, "error: {message}\nevaluation failed"),
        }
    }
}

/// Outcomes of a whole batch, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    fn new(outcomes: Vec<BatchOutcome>) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.is_ok()).count();
        Self {
            total: outcomes.len(),
            failed: outcomes.len() - succeeded,
            succeeded,
            outcomes,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluating {} expression(s)", self.total)?;
        for outcome in &self.outcomes {
            write!(f, "\n\n{outcome}")?;
        }
        Ok(())
    }
}

impl Calculator {
    /// Evaluate each expression independently from the current stack.
    ///
    /// The stack after the call equals the stack before it, and so do the
    /// pending notices: anything `show` or `clear` raises inside a batch
    /// expression is dropped. Batch results are not recorded to history.
    pub fn batch_calculate<S: AsRef<str>>(&mut self, expressions: &[S]) -> BatchReport {
        let mut outcomes = Vec::with_capacity(expressions.len());
        let pending = self.replace_notices(Vec::new());

        for (i, expression) in expressions.iter().enumerate() {
            let expression = expression.as_ref();
            let snapshot = self.stack_mut().snapshot();

            let result = self.evaluate_expression(expression);

            self.stack_mut().restore(snapshot);
            debug!(index = i + 1, ok = result.is_ok(), "restored stack after batch expression");

            outcomes.push(BatchOutcome {
                index: i + 1,
                expression: expression.to_string(),
                outcome: result.into(),
            });
        }

        self.replace_notices(pending);
        BatchReport::new(outcomes)
    }
}
