use spelunk::{dive, dive_or, surface, Op, Outcome, StepKind, TraverseError};

use crate::support::{sample, Record};

const DEFAULT: Record = Record::Text("DEF");

#[test]
fn attr_success_records_one_step() {
    let probe = dive_or(sample(), DEFAULT).attr("attr");
    assert_eq!(surface(&probe), Record::Text("value"));

    let history = probe.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind(), StepKind::Attribute);
    assert_eq!(history[0].op, Op::Attr("attr".into()));
    assert_eq!(history[0].outcome.value(), Some(&Record::Text("value")));
    assert_eq!(history, probe.history_until_first_error());
}

#[test]
fn attr_failure_resolves_default() {
    let probe = dive_or(sample(), DEFAULT).attr("missing");
    assert!(probe.is_failed());
    assert_eq!(surface(&probe), DEFAULT);

    let history = probe.history();
    assert_eq!(history.len(), 1);
    assert!(history[0].failed());
    assert_eq!(history[0].outcome.error(), Some(&TraverseError::missing_attribute("missing")));
    assert_eq!(history, probe.history_until_first_error());
}

#[test]
fn item_success_by_name() {
    let probe = dive_or(sample(), DEFAULT).attr("data").item("a");
    assert_eq!(surface(&probe), Record::Text("A"));

    let history = probe.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].kind(), StepKind::Item);
    assert!(history[1].succeeded());
}

#[test]
fn item_missing_key_fails() {
    let probe = dive_or(sample(), DEFAULT).attr("data").item("b");
    assert_eq!(surface(&probe), DEFAULT);
    assert_eq!(probe.error(), Some(&TraverseError::missing_key("b")));
}

#[test]
fn item_index_out_of_range_fails() {
    let probe = dive_or(sample(), DEFAULT).attr("numbers").item(10);
    assert_eq!(surface(&probe), DEFAULT);
    assert_eq!(probe.error(), Some(&TraverseError::out_of_bounds(10, 3)));
}

#[test]
fn call_success_records_arguments() {
    let probe = dive_or(sample(), DEFAULT).attr("multiply").call([Record::Int(3)]);
    assert_eq!(surface(&probe), Record::Int(6));

    let history = probe.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind(), StepKind::Attribute);
    assert_eq!(history[1].op, Op::Call(vec![Record::Int(3)]));
    assert_eq!(history[1].outcome.value(), Some(&Record::Int(6)));
    assert_eq!(history, probe.history_until_first_error());
}

#[test]
fn call_internal_failure_is_contained() {
    let probe = dive_or(sample(), DEFAULT).attr("explode").call([]);
    assert_eq!(surface(&probe), DEFAULT);

    let history = probe.history();
    assert_eq!(history.len(), 2);
    assert!(history[0].succeeded());
    assert_eq!(history[1].outcome.error(), Some(&TraverseError::message("internal failure")));
}

#[test]
fn call_with_wrong_arguments_fails() {
    let probe = dive_or(sample(), DEFAULT).attr("multiply").call([Record::Text("x")]);
    assert_eq!(surface(&probe), DEFAULT);
    assert_eq!(probe.error(), Some(&TraverseError::message("doubler expects one integer")));
}

#[test]
fn call_on_non_callable_fails() {
    let probe = dive(Record::Int(5)).call([]);
    assert_eq!(surface(&probe), Record::Absent);

    let history = probe.history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].kind(), StepKind::Call);
    assert!(history[0].failed());
}

#[test]
fn chain_success_then_failure() {
    let probe = dive_or(sample(), DEFAULT)
        .attr("multiply")
        .call([Record::Int(2)])
        .attr("missing");
    assert_eq!(surface(&probe), DEFAULT);

    let history = probe.history();
    assert_eq!(history.len(), 3);
    assert!(history[0].succeeded());
    assert!(history[1].succeeded());
    assert!(history[2].failed());
    assert_eq!(probe.history_until_first_error().len(), 3);
}

#[test]
fn chain_failure_then_more_ops_appends_skipped() {
    let probe = dive_or(sample(), DEFAULT).attr("explode").call([]).attr("attr");
    assert_eq!(surface(&probe), DEFAULT);

    let history = probe.history();
    assert_eq!(history.len(), 3);
    assert!(history[1].failed());
    assert!(history[2].outcome.is_skipped());
    assert_eq!(probe.history_until_first_error().len(), 2);
}

// The decisive sticky-failure check: the operation after a failure is never
// attempted. If it were, this callable would panic.
#[test]
fn failed_chain_never_attempts_later_ops() {
    let probe = dive_or(sample(), DEFAULT).attr("nope").attr("detonate").call([]);
    assert!(probe.is_failed());
    assert_eq!(surface(&probe), DEFAULT);

    let history = probe.history();
    assert_eq!(history.len(), 3);
    assert!(history[0].failed());
    assert!(history[1].outcome.is_skipped());
    assert!(history[2].outcome.is_skipped());
    assert_eq!(probe.error(), Some(&TraverseError::missing_attribute("nope")));
}

#[cfg(feature = "std")]
#[test]
fn call_panic_is_contained() {
    let probe = dive_or(sample(), DEFAULT).attr("detonate").call([]);
    assert!(probe.is_failed());
    assert_eq!(surface(&probe), DEFAULT);

    match probe.error() {
        Some(TraverseError::Panicked(message)) => assert!(message.contains("detonated")),
        other => panic!("expected contained panic, got {other:?}"),
    }
}

#[test]
fn resolve_is_idempotent_and_leaves_history_alone() {
    let probe = dive_or(sample(), DEFAULT).attr("missing");

    let before = probe.history().len();
    let first = probe.resolve();
    let second = probe.resolve();

    assert_eq!(first, second);
    assert_eq!(probe.history().len(), before);
}

#[test]
fn default_is_fixed_for_the_whole_chain() {
    let probe = dive_or(sample(), DEFAULT).attr("data").item("a").attr("missing").item(0);
    assert_eq!(probe.default_value(), &DEFAULT);
    assert_eq!(surface(&probe), DEFAULT);
}

#[test]
fn into_value_consumes_the_probe() {
    let hit = dive_or(sample(), DEFAULT).attr("attr");
    assert_eq!(hit.into_value(), Record::Text("value"));

    let miss = dive_or(sample(), DEFAULT).attr("missing");
    assert_eq!(miss.into_value(), DEFAULT);
}

#[test]
fn report_bundles_value_error_and_both_views() {
    let probe = dive_or(sample(), DEFAULT).attr("numbers").item(10).item(0);
    let report = probe.report();

    assert_eq!(report.final_value, DEFAULT);
    assert_eq!(report.error, Some(TraverseError::out_of_bounds(10, 3)));
    assert_eq!(report.history.len(), 3);
    assert_eq!(report.history_until_first_error.len(), 2);
    assert_eq!(report.history, probe.history());
}

#[test]
fn successful_report_has_no_error() {
    let report = dive_or(sample(), DEFAULT).attr("attr").report();
    assert_eq!(report.final_value, Record::Text("value"));
    assert_eq!(report.error, None);
    assert_eq!(report.history, report.history_until_first_error);
}

#[test]
fn wrapped_traversal_matches_direct_access() {
    let direct = match sample() {
        Record::Map(entries) => entries
            .iter()
            .find(|(k, _)| *k == "numbers")
            .map(|(_, v)| v.clone())
            .unwrap(),
        _ => unreachable!(),
    };
    let direct = match direct {
        Record::List(items) => items[2].clone(),
        _ => unreachable!(),
    };

    let wrapped = dive(sample()).attr("numbers").item(2);
    assert_eq!(surface(&wrapped), direct);

    let outcomes: Vec<_> = wrapped.history().iter().map(|step| step.succeeded()).collect();
    assert_eq!(outcomes, vec![true, true]);
}

#[test]
fn empty_chain_resolves_to_the_wrapped_value() {
    let probe = dive(sample());
    assert!(!probe.is_failed());
    assert!(probe.history().is_empty());
    assert_eq!(surface(&probe), sample());
}

#[test]
fn outcome_accessors() {
    let probe = dive_or(sample(), DEFAULT).attr("attr").attr("missing").attr("ignored");
    let history = probe.history();

    assert!(matches!(history[0].outcome, Outcome::Success(_)));
    assert!(history[1].outcome.error().is_some());
    assert!(history[1].outcome.value().is_none());
    assert!(history[2].outcome.is_skipped());
    assert!(history[2].outcome.error().is_none());
}
