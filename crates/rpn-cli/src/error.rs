//! Shell error types.

use thiserror::Error;

/// Errors from the shell itself. Evaluation errors never reach this type;
/// they are reported inline and the session carries on.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// A batch input file could not be read.
    #[error("failed to read '{path}': {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the terminal failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The line editor failed for a reason other than Ctrl-C / Ctrl-D.
    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// A batch report could not be encoded.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shell result type alias.
pub type CliResult<T> = Result<T, CliError>;
