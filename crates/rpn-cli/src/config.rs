//! Command-line options and session configuration.
//!
//! Configuration is layered: built-in defaults, then environment
//! variables, then command-line flags. There is no configuration file.

use crate::error::{CliError, CliResult};

/// Environment variable holding the `tracing` filter directive.
pub const LOG_ENV: &str = "RPNCALC_LOG";
/// Environment variable overriding the main prompt.
pub const PROMPT_ENV: &str = "RPNCALC_PROMPT";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

/// Settings for an interactive or scripted session.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplConfig {
    /// Prompt for ordinary lines.
    pub prompt: String,
    /// Prompt while collecting batch expressions.
    pub batch_prompt: String,
    /// Record successful evaluations to history.
    pub record_history: bool,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            batch_prompt: "expr> ".to_string(),
            record_history: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ReplConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prompt) = lookup(PROMPT_ENV) {
            config.prompt = prompt;
        }
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }
        config
    }

    /// Apply command-line flags on top.
    pub fn apply(mut self, options: &Options) -> Self {
        if let Some(prompt) = &options.prompt {
            self.prompt = prompt.clone();
        }
        if options.no_history {
            self.record_history = false;
        }
        if options.verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        self
    }
}

/// What the process should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Interactive line editor.
    Repl,
    /// Evaluate each expression in turn against one stack.
    Eval(Vec<String>),
    /// Run a file (or `-` for stdin) through batch evaluation.
    Batch(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub mode: Mode,
    /// Print batch reports as JSON.
    pub json: bool,
    pub verbose: bool,
    pub no_history: bool,
    pub prompt: Option<String>,
}

/// Result of argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedArgs {
    Run(Options),
    Help,
    Version,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> CliResult<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::<String>::into);

    let mut expressions = Vec::new();
    let mut batch = None;
    let mut json = false;
    let mut verbose = false;
    let mut no_history = false;
    let mut prompt = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-V" | "--version" => return Ok(ParsedArgs::Version),
            "-e" | "--eval" => {
                let expr = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("missing expression after {arg}")))?;
                expressions.push(expr);
            }
            "-b" | "--batch" => {
                let path = args
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("missing file after {arg}")))?;
                if batch.replace(path).is_some() {
                    return Err(CliError::Usage("--batch given more than once".into()));
                }
            }
            "--prompt" => {
                prompt = Some(
                    args.next()
                        .ok_or_else(|| CliError::Usage("missing text after --prompt".into()))?,
                );
            }
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "--no-history" => no_history = true,
            other => return Err(CliError::Usage(format!("unknown option: {other}"))),
        }
    }

    let mode = match (batch, expressions.is_empty()) {
        (Some(_), false) => {
            return Err(CliError::Usage(
                "--batch and --eval cannot be combined".into(),
            ))
        }
        (Some(path), true) => Mode::Batch(path),
        (None, false) => Mode::Eval(expressions),
        (None, true) => Mode::Repl,
    };

    if json && !matches!(mode, Mode::Batch(_)) {
        return Err(CliError::Usage("--json requires --batch".into()));
    }

    Ok(ParsedArgs::Run(Options {
        mode,
        json,
        verbose,
        no_history,
        prompt,
    }))
}
