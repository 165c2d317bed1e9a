//! Session tests: the line handling shared by the REPL and `--eval`, and
//! batch input handling for `--batch`.

use rpn_cli::session::batch_lines;
use rpn_cli::{Flow, ReplConfig, Session};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Feed lines to a fresh session; return the final flow and everything printed.
fn feed(session: &mut Session, lines: &[&str]) -> (Flow, String) {
    let mut out = Vec::new();
    let mut flow = Flow::Continue;
    for line in lines {
        flow = session.handle_line(line, &mut out).unwrap();
        if flow != Flow::Continue {
            break;
        }
    }
    (flow, String::from_utf8(out).unwrap())
}

fn session() -> Session {
    Session::new(ReplConfig::default())
}

// ─────────────────────────────────────────────────────────────────────
// Evaluation lines
// ─────────────────────────────────────────────────────────────────────

#[test]
fn successful_line_prints_result_and_records_history() {
    let mut s = session();
    let (flow, out) = feed(&mut s, &["5 2 + 3 *"]);
    assert_eq!(flow, Flow::Continue);
    assert_eq!(out, "result: 21\n");
    assert_eq!(s.calculator().history().len(), 1);
    assert_eq!(s.calculator().history()[0].to_string(), "5 2 + 3 * = 21");
}

#[test]
fn failed_line_prints_error_and_skips_history() {
    let mut s = session();
    let (_, out) = feed(&mut s, &["1 0 /"]);
    assert_eq!(out, "error: division by zero\nevaluation failed\n");
    assert!(s.calculator().history().is_empty());
    assert_eq!(s.calculator().stack(), &[1.0]);
}

#[test]
fn stack_carries_over_between_lines() {
    let mut s = session();
    let (_, out) = feed(&mut s, &["10", "5 +", "history"]);
    assert_eq!(
        out,
        "result: 10\nresult: 15\nhistory:\n1: 10 = 10\n2: 5 + = 15\n"
    );
}

#[test]
fn history_can_be_disabled() {
    let config = ReplConfig {
        record_history: false,
        ..ReplConfig::default()
    };
    let mut s = Session::new(config);
    feed(&mut s, &["1 1 +"]);
    assert!(s.calculator().history().is_empty());
}

#[test]
fn notices_print_before_result() {
    let mut s = session();
    let (_, out) = feed(&mut s, &["1 2 show +"]);
    assert_eq!(out, "stack (top to bottom): 2 1\nresult: 3\n");
}

#[test]
fn clear_token_inside_expression() {
    let mut s = session();
    let (_, out) = feed(&mut s, &["1 2 clear"]);
    assert_eq!(
        out,
        "stack cleared\nerror: expression left no result on the stack\nevaluation failed\n"
    );
}

// ─────────────────────────────────────────────────────────────────────
// Shell commands
// ─────────────────────────────────────────────────────────────────────

#[test]
fn shell_commands() {
    let mut s = session();
    let (_, out) = feed(&mut s, &["1 2", "show", "clear", "show", "history"]);
    assert_eq!(
        out,
        "result: 2\n\
         stack (top to bottom): 2 1\n\
         stack cleared\n\
         stack is empty\n\
         history:\n1: 1 2 = 2\n"
    );
}

#[test]
fn blank_line_does_nothing() {
    let mut s = session();
    let (flow, out) = feed(&mut s, &["", "   "]);
    assert_eq!(flow, Flow::Continue);
    assert!(out.is_empty());
}

#[test]
fn quit_and_exit_stop_the_session() {
    for word in ["quit", "exit", "  quit  "] {
        let (flow, _) = feed(&mut session(), &[word, "1 2 +"]);
        assert_eq!(flow, Flow::Quit, "word {word:?}");
    }
}

#[test]
fn help_lists_operators() {
    let (_, out) = feed(&mut session(), &["help"]);
    for word in ["sqrt", "pow", "swap", "history", "batch"] {
        assert!(out.contains(word), "help should mention {word}");
    }
}

// ─────────────────────────────────────────────────────────────────────
// Batch
// ─────────────────────────────────────────────────────────────────────

#[test]
fn batch_command_asks_for_expressions() {
    let (flow, out) = feed(&mut session(), &["batch"]);
    assert_eq!(flow, Flow::Batch);
    assert!(out.starts_with("batch mode"));
}

#[test]
fn batch_runs_against_current_stack_and_restores_it() {
    let mut s = session();
    feed(&mut s, &["10"]);
    let report = s.run_batch(&["5 +", "2 *", "show 1 +"]);
    let values: Vec<Option<f64>> = report.outcomes.iter().map(|o| o.value()).collect();
    assert_eq!(values, vec![Some(15.0), Some(20.0), Some(11.0)]);
    assert_eq!(s.calculator().stack(), &[10.0]);
    assert_eq!(s.calculator().history().len(), 1);

    // Batch-time notices are not carried into the next line.
    let (_, out) = feed(&mut s, &["1 +"]);
    assert_eq!(out, "result: 11\n");
}

#[test]
fn batch_report_rendering() {
    let mut s = session();
    let report = s.run_batch(&["2 2 +"]);

    let mut text = Vec::new();
    Session::write_report(&report, false, &mut text).unwrap();
    assert_eq!(
        String::from_utf8(text).unwrap(),
        "evaluating 1 expression(s)\n\nexpression 1: 2 2 +\nresult: 4\n"
    );

    let mut json = Vec::new();
    Session::write_report(&report, true, &mut json).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(parsed["succeeded"], 1);
    assert_eq!(parsed["outcomes"][0]["value"], 4.0);
}

#[test]
fn batch_input_skips_blank_lines() {
    let input = "1 2 +\n\n   \n  3 sqrt  \r\n";
    assert_eq!(batch_lines(input), vec!["1 2 +", "3 sqrt"]);
}
