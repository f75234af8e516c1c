//! Trait implemented by values a probe can traverse.

use crate::types::error::TraverseError;
use crate::types::key::Key;
use crate::types::step::StepKind;

/// The three underlying chain operations, plus the absent sentinel.
///
/// A [`Probe`](crate::Probe) never touches a wrapped value directly; every
/// attribute lookup, item lookup, and invocation goes through this trait.
/// Default method bodies reject each operation as unsupported, so an
/// implementation only overrides what its type actually provides. Whatever
/// an implementation returns (or panics, with the `std` feature), the probe
/// contains it; implementations never need their own catch-all handling.
///
/// With the `json` feature the crate ships an implementation for
/// `serde_json::Value`.
///
/// # Examples
///
/// A minimal pair type that only supports indexing:
///
/// ```
/// use spelunk::{dive, Key, StepKind, Traverse, TraverseError};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Node {
///     Missing,
///     Num(i64),
///     Pair(i64, i64),
/// }
///
/// impl Traverse for Node {
///     fn absent() -> Self {
///         Node::Missing
///     }
///
///     fn item(&self, key: &Key) -> Result<Self, TraverseError> {
///         match (self, key) {
///             (Node::Pair(a, _), Key::Index(0)) => Ok(Node::Num(*a)),
///             (Node::Pair(_, b), Key::Index(1)) => Ok(Node::Num(*b)),
///             (Node::Pair(..), Key::Index(i)) => Err(TraverseError::out_of_bounds(*i, 2)),
///             _ => Err(TraverseError::unsupported(StepKind::Item, self.type_name())),
///         }
///     }
/// }
///
/// assert_eq!(dive(Node::Pair(3, 4)).item(1).resolve(), Node::Num(4));
/// assert_eq!(dive(Node::Pair(3, 4)).item(9).resolve(), Node::Missing);
/// // Attribute access was not overridden, so it fails and the chain
/// // resolves to the absent sentinel.
/// assert_eq!(dive(Node::Num(7)).attr("x").resolve(), Node::Missing);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be traversed by a probe",
    label = "this type does not implement `Traverse`",
    note = "implement `Traverse` for `{Self}`, or wrap the data in a type that has an implementation"
)]
pub trait Traverse: Clone {
    /// The type's "no value" sentinel, used as the implicit chain default.
    fn absent() -> Self;

    /// Short label for the value's type, used in failure descriptions.
    fn type_name(&self) -> &'static str {
        "value"
    }

    /// Reads the named attribute of the value.
    fn attr(&self, name: &str) -> Result<Self, TraverseError> {
        let _ = name;
        Err(TraverseError::unsupported(StepKind::Attribute, self.type_name()))
    }

    /// Looks up an item of the value by index or key.
    fn item(&self, key: &Key) -> Result<Self, TraverseError> {
        let _ = key;
        Err(TraverseError::unsupported(StepKind::Item, self.type_name()))
    }

    /// Invokes the value with the given arguments.
    fn invoke(&self, args: &[Self]) -> Result<Self, TraverseError> {
        let _ = args;
        Err(TraverseError::unsupported(StepKind::Call, self.type_name()))
    }
}
