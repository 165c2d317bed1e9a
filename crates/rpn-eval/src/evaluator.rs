//! The stack machine: token dispatch and expression evaluation.

use crate::display::{Notice, StackDisplay};
use crate::history::{History, HistoryDisplay};
use crate::stack::OperandStack;
use rpn_lexer::{classify, BinaryOp, Command, Lexer, TokenKind, UnaryFn};
use rpn_types::{EvalError, EvalResult, HistoryEntry};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Largest `n` whose Fibonacci number is finite in an `f64`.
const FIB_MAX_FINITE: u64 = 1476;

/// Most notices held between drains; older ones are dropped first.
pub const MAX_PENDING_NOTICES: usize = 64;

/// RPN calculator engine.
///
/// Owns the operand stack, the history log, and the queue of pending
/// notices. All state is exclusive to one instance.
#[derive(Debug, Default)]
pub struct Calculator {
    stack: OperandStack,
    history: History,
    notices: Vec<Notice>,
}

impl Calculator {
    /// Create an engine with an empty stack and no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine whose stack starts with `values` (bottom first).
    pub fn with_stack(values: Vec<f64>) -> Self {
        Self {
            stack: OperandStack::from(values),
            ..Self::default()
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Token processing
    // ══════════════════════════════════════════════════════════════════════

    /// Process one token.
    ///
    /// On success the stack reflects the token's effect. On failure the
    /// stack is unchanged, except for division by zero, where the divisor
    /// has already been consumed.
    ///
    /// `show` and `clear` queue a [`Notice`] for the caller to drain with
    /// [`Calculator::take_notices`]. Only the newest
    /// [`MAX_PENDING_NOTICES`] are kept until then.
    pub fn process_token(&mut self, token: &str) -> EvalResult<()> {
        self.process(&classify(token), token, 1)
    }

    fn process(&mut self, kind: &TokenKind, token: &str, position: usize) -> EvalResult<()> {
        match self.apply(kind, token, position) {
            Ok(()) => {
                trace!(token, depth = self.stack.len(), "processed token");
                Ok(())
            }
            Err(err) => {
                debug!(token, %err, "rejected token");
                Err(err)
            }
        }
    }

    fn apply(&mut self, kind: &TokenKind, token: &str, position: usize) -> EvalResult<()> {
        match *kind {
            TokenKind::Number(value) => {
                self.stack.push(value);
                Ok(())
            }
            TokenKind::Binary(op) => self.apply_binary(op),
            TokenKind::Unary(func) => self.apply_unary(func),
            TokenKind::Command(cmd) => self.apply_command(cmd),
            TokenKind::Unknown => Err(EvalError::UnknownToken {
                token: token.to_string(),
                position,
            }),
        }
    }

    fn apply_binary(&mut self, op: BinaryOp) -> EvalResult<()> {
        self.stack.require(2)?;
        let b = self.stack.pop()?;
        if op == BinaryOp::Div && b == 0.0 {
            return Err(EvalError::DivisionByZero);
        }
        let a = self.stack.pop()?;
        let value = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Pow => a.powf(b),
        };
        self.stack.push(value);
        Ok(())
    }

    fn apply_unary(&mut self, func: UnaryFn) -> EvalResult<()> {
        self.stack.require(1)?;
        let a = self.stack.peek()?;
        let value = match func {
            UnaryFn::Sqrt if a < 0.0 => return Err(domain(func, a)),
            UnaryFn::Sqrt => a.sqrt(),
            UnaryFn::Sin => to_radians(a).sin(),
            UnaryFn::Cos => to_radians(a).cos(),
            UnaryFn::Tan => to_radians(a).tan(),
            UnaryFn::Fib if a < 0.0 || a.is_nan() => return Err(domain(func, a)),
            UnaryFn::Fib => fibonacci(fib_index(a)),
        };
        self.stack.pop()?;
        self.stack.push(value);
        Ok(())
    }

    fn apply_command(&mut self, cmd: Command) -> EvalResult<()> {
        match cmd {
            Command::Clear => {
                self.stack.clear();
                self.notify(Notice::StackCleared);
            }
            Command::Show => {
                let values = self.stack.iter_top_down().collect();
                self.notify(Notice::StackShown(values));
            }
            Command::Pop => {
                self.stack.pop()?;
            }
            Command::Dup => {
                let top = self.stack.peek()?;
                self.stack.push(top);
            }
            Command::Swap => {
                let (a, b) = self.stack.pop2()?;
                self.stack.push(b);
                self.stack.push(a);
            }
        }
        Ok(())
    }

    fn notify(&mut self, notice: Notice) {
        if self.notices.len() == MAX_PENDING_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(notice);
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expressions
    // ══════════════════════════════════════════════════════════════════════

    /// Evaluate a whole line, token by token.
    ///
    /// Stops at the first failing token without undoing what earlier tokens
    /// did. Succeeds with the top of the stack only if every token succeeded
    /// and the stack is non-empty afterwards. A line with no tokens fails
    /// with [`EvalError::EmptyExpression`] and touches nothing; one that
    /// leaves the stack empty fails with [`EvalError::NoResult`].
    pub fn evaluate_expression(&mut self, line: &str) -> EvalResult<f64> {
        let tokens = Lexer::new(line).tokens();
        if tokens.is_empty() {
            return Err(EvalError::EmptyExpression);
        }
        for token in tokens {
            self.process(&token.kind, &token.lexeme, token.position)?;
        }
        self.stack.peek().map_err(|_| EvalError::NoResult)
    }

    // ══════════════════════════════════════════════════════════════════════
    // State access
    // ══════════════════════════════════════════════════════════════════════

    /// Top of the stack.
    pub fn result(&self) -> EvalResult<f64> {
        self.stack.peek()
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[f64] {
        self.stack.as_slice()
    }

    pub fn display_stack(&self) -> StackDisplay<'_> {
        StackDisplay::new(&self.stack)
    }

    /// Empty the stack. Never fails.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Drain notices raised since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub(crate) fn stack_mut(&mut self) -> &mut OperandStack {
        &mut self.stack
    }

    /// Swap the pending notices for `notices`, returning the old queue.
    pub(crate) fn replace_notices(&mut self, notices: Vec<Notice>) -> Vec<Notice> {
        std::mem::replace(&mut self.notices, notices)
    }

    // ══════════════════════════════════════════════════════════════════════
    // History
    // ══════════════════════════════════════════════════════════════════════

    pub fn add_to_history(&mut self, expression: impl Into<String>, result: f64) {
        self.history.record(expression, result);
    }

    pub fn show_history(&self) -> HistoryDisplay<'_> {
        self.history.display()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }
}

/// Fibonacci number `n` as an `f64`: fib(0) = 0, fib(1) = 1.
///
/// Iterative with two running values. Exact up to 2^53, infinite past
/// `n = 1476`.
pub fn fibonacci(n: u64) -> f64 {
    if n > FIB_MAX_FINITE {
        return f64::INFINITY;
    }
    let (mut a, mut b) = (0.0_f64, 1.0_f64);
    if n == 0 {
        return a;
    }
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

fn fib_index(a: f64) -> u64 {
    // Saturating float-to-int cast; anything huge lands past FIB_MAX_FINITE.
    a.floor() as u64
}

fn to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn domain(func: UnaryFn, value: f64) -> EvalError {
    EvalError::Domain {
        function: func.name(),
        value,
    }
}
