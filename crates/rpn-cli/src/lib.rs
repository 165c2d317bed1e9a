//! rpncalc shell.
//!
//! Everything around the engine: argument parsing, configuration, logging
//! setup, help text, and the line-oriented session used by the REPL and
//! the non-interactive modes.

pub mod config;
pub mod error;
pub mod help;
pub mod logging;
pub mod repl;
pub mod session;

pub use config::{parse_args, Mode, Options, ParsedArgs, ReplConfig};
pub use error::{CliError, CliResult};
pub use session::{Flow, Session};
