use spelunk::{dive, Key, StepKind, Traverse, TraverseError};

// A type that opts into nothing: every operation falls through to the
// default trait bodies.
#[derive(Debug, Clone, PartialEq)]
struct Opaque;

impl Traverse for Opaque {
    fn absent() -> Self {
        Opaque
    }
}

#[test]
fn default_bodies_reject_every_operation() {
    assert_eq!(
        Opaque.attr("x"),
        Err(TraverseError::unsupported(StepKind::Attribute, "value"))
    );
    assert_eq!(
        Opaque.item(&Key::Index(0)),
        Err(TraverseError::unsupported(StepKind::Item, "value"))
    );
    assert_eq!(
        Opaque.invoke(&[]),
        Err(TraverseError::unsupported(StepKind::Call, "value"))
    );
}

#[test]
fn default_type_name_is_generic() {
    assert_eq!(Opaque.type_name(), "value");
}

#[test]
fn probe_over_a_minimal_impl_contains_everything() {
    let probe = dive(Opaque).attr("x").item(0).call([]);
    assert!(probe.is_failed());
    assert_eq!(probe.resolve(), Opaque);
    assert_eq!(probe.history().len(), 3);
}

// Overriding a single operation is enough for a working chain.
#[derive(Debug, Clone, PartialEq)]
enum Counter {
    Nothing,
    Value(u32),
}

impl Traverse for Counter {
    fn absent() -> Self {
        Counter::Nothing
    }

    fn type_name(&self) -> &'static str {
        "counter"
    }

    fn invoke(&self, args: &[Self]) -> Result<Self, TraverseError> {
        match (self, args) {
            (Counter::Value(n), []) => Ok(Counter::Value(n + 1)),
            (Counter::Value(_), _) => Err(TraverseError::message("no arguments expected")),
            (Counter::Nothing, _) => Err(TraverseError::unsupported(StepKind::Call, "counter")),
        }
    }
}

#[test]
fn partial_impl_supports_its_one_operation() {
    let probe = dive(Counter::Value(1)).call([]).call([]).call([]);
    assert_eq!(probe.resolve(), Counter::Value(4));

    let rejected = dive(Counter::Value(1)).call([Counter::Value(9)]);
    assert_eq!(rejected.resolve(), Counter::Nothing);
    assert_eq!(rejected.error(), Some(&TraverseError::message("no arguments expected")));

    let unsupported = dive(Counter::Value(1)).attr("x");
    assert_eq!(
        unsupported.error(),
        Some(&TraverseError::unsupported(StepKind::Attribute, "counter"))
    );
}
