//! Operand stack for the rpncalc evaluator.

use rpn_types::{EvalError, EvalResult};

/// Ordered stack of operands; the last element is the top.
///
/// Pops are depth-checked before anything is removed, so a failed
/// operation never leaves the stack half-consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values bottom to top.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Values top to bottom.
    pub fn iter_top_down(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().rev().copied()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Fail with `StackUnderflow` unless at least `required` values are present.
    pub fn require(&self, required: usize) -> EvalResult<()> {
        if self.values.len() < required {
            return Err(EvalError::StackUnderflow {
                required,
                available: self.values.len(),
            });
        }
        Ok(())
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> EvalResult<f64> {
        self.values.pop().ok_or(EvalError::EmptyStack)
    }

    /// Remove the top two values, returning `(a, b)` where `b` was the top.
    pub fn pop2(&mut self) -> EvalResult<(f64, f64)> {
        self.require(2)?;
        let b = self.pop()?;
        let a = self.pop()?;
        Ok((a, b))
    }

    /// The top value, without removing it.
    pub fn peek(&self) -> EvalResult<f64> {
        self.values.last().copied().ok_or(EvalError::EmptyStack)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Full copy of the current contents.
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Replace the contents wholesale (batch rollback).
    pub fn restore(&mut self, values: Vec<f64>) {
        self.values = values;
    }
}

impl From<Vec<f64>> for OperandStack {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}
