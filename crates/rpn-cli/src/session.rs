//! Line-oriented session around one [`Calculator`].
//!
//! The REPL and the scripted modes share this type so that a line typed at
//! the prompt and a line passed with `--eval` behave identically. Output
//! goes to any `Write`, which is how the tests capture it.

use crate::config::ReplConfig;
use crate::error::CliResult;
use crate::help;
use rpn_eval::{BatchReport, Calculator};
use std::io::Write;
use tracing::info;

/// What the caller should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Collect batch expressions, then call [`Session::run_batch`].
    Batch,
    Quit,
}

pub struct Session {
    calc: Calculator,
    config: ReplConfig,
}

impl Session {
    pub fn new(config: ReplConfig) -> Self {
        Self {
            calc: Calculator::new(),
            config,
        }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Handle one line typed at the main prompt.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> CliResult<Flow> {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "batch" => {
                writeln!(out, "batch mode: enter expressions, empty line to finish")?;
                return Ok(Flow::Batch);
            }
            "help" => write!(out, "{}", help::reference())?,
            "history" => writeln!(out, "{}", self.calc.show_history())?,
            "show" => writeln!(out, "{}", self.calc.display_stack())?,
            "clear" => {
                self.calc.clear();
                writeln!(out, "stack cleared")?;
            }
            expr => {
                self.evaluate(expr, out)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Evaluate one expression against the persistent stack.
    ///
    /// Returns whether it produced a result. Successful results go to
    /// history when the configuration allows it.
    pub fn evaluate(&mut self, expr: &str, out: &mut impl Write) -> CliResult<bool> {
        let result = self.calc.evaluate_expression(expr);
        self.flush_notices(out)?;

        match result {
            Ok(value) => {
                writeln!(out, "result: {value}")?;
                if self.config.record_history {
                    self.calc.add_to_history(expr, value);
                }
                Ok(true)
            }
            Err(err) => {
                writeln!(out, "error: {err}")?;
                writeln!(out, "evaluation failed")?;
                Ok(false)
            }
        }
    }

    /// Evaluate expressions independently from the current stack.
    pub fn run_batch<S: AsRef<str>>(&mut self, expressions: &[S]) -> BatchReport {
        let report = self.calc.batch_calculate(expressions);
        info!(
            total = report.total,
            failed = report.failed,
            "batch finished"
        );
        report
    }

    /// Render a batch report as text or JSON.
    pub fn write_report(report: &BatchReport, json: bool, out: &mut impl Write) -> CliResult<()> {
        if json {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{report}")?;
        }
        Ok(())
    }

    fn flush_notices(&mut self, out: &mut impl Write) -> CliResult<()> {
        for notice in self.calc.take_notices() {
            writeln!(out, "{notice}")?;
        }
        Ok(())
    }
}

/// Non-blank, trimmed lines of a batch input.
pub fn batch_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
