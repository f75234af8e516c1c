use spelunk::chain;

use crate::support::{sample, Record};

const DEFAULT: Record = Record::Text("DEF");

#[test]
fn bare_value_starts_an_empty_chain() {
    let probe = chain!(sample());
    assert!(probe.history().is_empty());
    assert_eq!(probe.resolve(), sample());
}

#[test]
fn dot_syntax_expands_to_attr() {
    let probe = chain!(sample() => .attr);
    assert_eq!(probe.resolve(), Record::Text("value"));
}

#[test]
fn subscript_syntax_expands_to_item() {
    let probe = chain!(sample() => .data["a"]);
    assert_eq!(probe.resolve(), Record::Text("A"));

    let by_index = chain!(sample() => .numbers[2]);
    assert_eq!(by_index.resolve(), Record::Int(3));
}

#[test]
fn call_syntax_expands_to_call() {
    let probe = chain!(sample() => .multiply(Record::Int(5)));
    assert_eq!(probe.resolve(), Record::Int(10));
}

#[test]
fn mixed_chain_matches_explicit_methods() {
    let via_macro = chain!(sample() => .data["a"]);
    let explicit = spelunk::dive(sample()).attr("data").item("a");

    assert_eq!(via_macro.resolve(), explicit.resolve());
    assert_eq!(via_macro.history(), explicit.history());
}

#[test]
fn explicit_default_is_used_on_failure() {
    let probe = chain!(sample(), DEFAULT => .numbers[10].missing);
    assert!(probe.is_failed());
    assert_eq!(probe.resolve(), DEFAULT);
    assert_eq!(probe.history().len(), 3);
    assert_eq!(probe.history_until_first_error().len(), 2);
}

#[test]
fn failure_without_explicit_default_resolves_to_absent() {
    let probe = chain!(sample() => .explode());
    assert_eq!(probe.resolve(), Record::Absent);
}
