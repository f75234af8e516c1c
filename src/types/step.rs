//! Recorded chain operations.
//!
//! Every operation a chain attempts, or skips because the chain already
//! failed, is captured as a [`Step`]: the operation descriptor ([`Op`]) plus
//! what came of it ([`Outcome`]).
//!
//! # Examples
//!
//! ```
//! use spelunk::{dive, StepKind};
//! use serde_json::json;
//!
//! let probe = dive(json!({"a": 1})).item("a");
//! let history = probe.history();
//!
//! assert_eq!(history.len(), 1);
//! assert_eq!(history[0].kind(), StepKind::Item);
//! assert!(history[0].outcome.is_success());
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::types::error::TraverseError;
use crate::types::key::Key;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three operation kinds a chain can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepKind {
    /// Named attribute lookup.
    Attribute,
    /// Subscript lookup by index or key.
    Item,
    /// Invocation of the value with arguments.
    Call,
}

impl Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute => write!(f, "attribute access"),
            Self::Item => write!(f, "item access"),
            Self::Call => write!(f, "call"),
        }
    }
}

/// A chain operation together with its descriptor: the attribute name, the
/// key, or the call arguments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Op<T> {
    /// Attribute lookup by name.
    Attr(String),
    /// Item lookup by key.
    Item(Key),
    /// Invocation with the recorded arguments.
    Call(Vec<T>),
}

impl<T> Op<T> {
    /// The kind of this operation, without its descriptor.
    #[inline]
    pub fn kind(&self) -> StepKind {
        match self {
            Self::Attr(_) => StepKind::Attribute,
            Self::Item(_) => StepKind::Item,
            Self::Call(_) => StepKind::Call,
        }
    }
}

impl<T: Display> Display for Op<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attr(name) => write!(f, ".{name}"),
            Self::Item(key) => write!(f, "[{key}]"),
            Self::Call(args) => {
                write!(f, "(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// What happened when a step ran.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome<T> {
    /// The operation produced this value.
    Success(T),
    /// The operation failed with the recorded description.
    Failure(TraverseError),
    /// The chain had already failed; the operation was never attempted.
    Skipped,
}

impl<T> Outcome<T> {
    /// Whether the step produced a value.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether the step failed. `Skipped` entries are not failures; the
    /// chain's single failure is the entry that flipped it.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Whether the step was skipped because the chain had already failed.
    #[inline]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// The produced value, if the step succeeded.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// The failure description, if the step failed.
    #[inline]
    pub fn error(&self) -> Option<&TraverseError> {
        match self {
            Self::Failure(error) => Some(error),
            _ => None,
        }
    }
}

/// One entry in a chain's history log.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step<T> {
    /// The attempted (or skipped) operation.
    pub op: Op<T>,
    /// Its result.
    pub outcome: Outcome<T>,
}

impl<T> Step<T> {
    pub(crate) fn success(op: Op<T>, value: T) -> Self {
        Self { op, outcome: Outcome::Success(value) }
    }

    pub(crate) fn failure(op: Op<T>, error: TraverseError) -> Self {
        Self { op, outcome: Outcome::Failure(error) }
    }

    pub(crate) fn skipped(op: Op<T>) -> Self {
        Self { op, outcome: Outcome::Skipped }
    }

    /// The kind of the recorded operation.
    #[inline]
    pub fn kind(&self) -> StepKind {
        self.op.kind()
    }

    /// Whether this entry records a success.
    #[inline]
    pub fn succeeded(&self) -> bool {
        self.outcome.is_success()
    }

    /// Whether this entry records the chain's failure.
    #[inline]
    pub fn failed(&self) -> bool {
        self.outcome.is_failure()
    }
}

impl<T: Display> Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Success(value) => write!(f, "{} -> {value}", self.op),
            Outcome::Failure(error) => write!(f, "{} failed: {error}", self.op),
            Outcome::Skipped => write!(f, "{} skipped", self.op),
        }
    }
}
