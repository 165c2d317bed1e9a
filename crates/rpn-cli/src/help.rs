//! Usage and in-session help text.

use rpn_lexer::ALL_WORDS;

/// Command-line usage.
pub fn usage() -> String {
    format!(
        "rpncalc v{version}

USAGE:
    rpncalc [OPTIONS]

OPTIONS:
    -h, --help             Print this help message
    -V, --version          Print version information
    -e, --eval <EXPR>      Evaluate EXPR (repeatable; one shared stack)
    -b, --batch <FILE>     Evaluate each line of FILE independently ('-' for stdin)
        --json             Print the batch report as JSON (with --batch)
        --prompt <TEXT>    Prompt for the interactive shell
        --no-history       Do not record results to history
    -v, --verbose          Debug logging to stderr (overrides {log_env})

With no options an interactive shell starts.

EXAMPLES:
    rpncalc -e \"5 2 + 3 *\"
    rpncalc --batch exprs.txt --json
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = crate::config::LOG_ENV,
    )
}

/// Reference shown by the `help` command inside the shell.
pub fn reference() -> String {
    format!(
        "
=== rpncalc ===
Enter numbers and operators separated by spaces.
Example: 5 2 + 3 *  => (5+2)*3 = 21

Operators:
  +, -, *, /     arithmetic
  sqrt           square root
  pow            power (second-from-top ^ top)
  sin, cos, tan  trigonometry, in degrees
  fib            Fibonacci number

Stack commands:
  show           display the stack, top first
  clear          empty the stack
  pop            discard the top value
  dup            duplicate the top value
  swap           exchange the top two values

Shell commands:
  history        list evaluated expressions
  batch          enter batch mode (empty line to finish)
  help           show this help
  quit, exit     leave

Known words: {words}
===============
",
        words = ALL_WORDS.join(" "),
    )
}
