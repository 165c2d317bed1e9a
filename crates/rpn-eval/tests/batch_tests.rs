//! Batch evaluation: isolation between expressions, report contents, and
//! the JSON shape consumed by tooling.

use rpn_eval::{BatchReport, Calculator, ErrorKind, Notice, Outcome};

fn values(report: &BatchReport) -> Vec<Option<f64>> {
    report.outcomes.iter().map(|o| o.value()).collect()
}

#[test_log::test]
fn each_expression_starts_from_the_same_stack() {
    let mut calc = Calculator::with_stack(vec![10.0]);
    let report = calc.batch_calculate(&["5 +", "2 *"]);
    assert_eq!(values(&report), vec![Some(15.0), Some(20.0)]);
    assert_eq!(calc.stack(), &[10.0]);
}

#[test]
fn failures_are_rolled_back_too() {
    let mut calc = Calculator::with_stack(vec![1.0, 2.0]);
    let report = calc.batch_calculate(&["clear", "5 5 + frob", "0 /", "+"]);
    assert_eq!(values(&report), vec![None, None, None, Some(3.0)]);

    let kinds: Vec<Option<ErrorKind>> = report
        .outcomes
        .iter()
        .map(|o| match &o.outcome {
            Outcome::Ok { .. } => None,
            Outcome::Failed { kind, .. } => Some(*kind),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(ErrorKind::NoResult),
            Some(ErrorKind::UnknownToken),
            Some(ErrorKind::DivisionByZero),
            None,
        ]
    );
    assert_eq!(calc.stack(), &[1.0, 2.0]);
}

#[test]
fn notices_raised_inside_a_batch_are_dropped() {
    let mut calc = Calculator::with_stack(vec![10.0]);
    let report = calc.batch_calculate(&["clear 1", "show 2"]);
    assert!(report.all_succeeded());

    calc.evaluate_expression("5 +").unwrap();
    assert!(calc.take_notices().is_empty());
}

#[test]
fn notices_pending_before_a_batch_survive_it() {
    let mut calc = Calculator::with_stack(vec![1.0]);
    calc.process_token("show").unwrap();
    calc.batch_calculate(&["clear 2"]);
    assert_eq!(calc.take_notices(), vec![Notice::StackShown(vec![1.0])]);
}

#[test]
fn batch_does_not_touch_history() {
    let mut calc = Calculator::new();
    calc.add_to_history("1 1 +", 2.0);
    let report = calc.batch_calculate(&["3 4 +", "6 sqrt"]);
    assert!(report.all_succeeded());
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn empty_batch() {
    let mut calc = Calculator::with_stack(vec![3.0]);
    let report = calc.batch_calculate::<&str>(&[]);
    assert_eq!(report.total, 0);
    assert!(report.all_succeeded());
    assert_eq!(report.to_string(), "evaluating 0 expression(s)");
    assert_eq!(calc.stack(), &[3.0]);
}

#[test]
fn accepts_owned_strings() {
    let lines: Vec<String> = vec!["2 3 pow".into(), "10 fib".into()];
    let mut calc = Calculator::new();
    let report = calc.batch_calculate(&lines);
    assert_eq!(values(&report), vec![Some(8.0), Some(55.0)]);
    assert_eq!(report.outcomes[1].index, 2);
    assert_eq!(report.outcomes[1].expression, "10 fib");
}

#[test]
fn report_text() {
    let mut calc = Calculator::new();
    let report = calc.batch_calculate(&["1 2 +", "-4 sqrt"]);
    assert_eq!(
        report.to_string(),
        "evaluating 2 expression(s)\n\n\
         expression 1: 1 2 +\nresult: 3\n\n\
         expression 2: -4 sqrt\nerror: domain error: sqrt is undefined for -4\nevaluation failed"
    );
}

#[test]
fn report_json_shape() {
    let mut calc = Calculator::new();
    let report = calc.batch_calculate(&["2 2 *", "pop"]);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "outcomes": [
                { "index": 1, "expression": "2 2 *", "status": "ok", "value": 4.0 },
                {
                    "index": 2,
                    "expression": "pop",
                    "status": "failed",
                    "kind": "empty_stack",
                    "message": "stack is empty"
                }
            ],
            "total": 2,
            "succeeded": 1,
            "failed": 1
        })
    );
}
