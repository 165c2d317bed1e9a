//! Interactive shell on top of `rustyline`.
//!
//! Line history lives in memory only and is dropped on exit.

use crate::error::CliResult;
use crate::session::{Flow, Session};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing::debug;

pub fn run(session: &mut Session) -> CliResult<()> {
    let mut rl = DefaultEditor::new()?;
    let mut stdout = io::stdout();

    writeln!(stdout, "rpncalc: type 'help' for usage")?;

    loop {
        let prompt = session.config().prompt.clone();
        let line = match rl.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        if !line.trim().is_empty() {
            rl.add_history_entry(line.as_str())?;
        }

        match session.handle_line(&line, &mut stdout)? {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Batch => {
                let expressions = read_batch(&mut rl, &session.config().batch_prompt)?;
                let report = session.run_batch(&expressions);
                Session::write_report(&report, false, &mut stdout)?;
            }
        }
        stdout.flush()?;
    }

    writeln!(stdout, "bye")?;
    Ok(())
}

/// Read expressions until an empty line, Ctrl-C or Ctrl-D.
fn read_batch(rl: &mut DefaultEditor, prompt: &str) -> CliResult<Vec<String>> {
    let mut expressions = Vec::new();
    loop {
        match rl.readline(prompt) {
            Ok(line) if line.trim().is_empty() => break,
            Ok(line) => expressions.push(line.trim().to_string()),
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    debug!(count = expressions.len(), "collected batch expressions");
    Ok(expressions)
}
