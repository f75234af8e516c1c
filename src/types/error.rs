//! Step-level failure descriptions.
//!
//! A chain exposes exactly one failure state, but each history entry keeps
//! the description of what actually went wrong. [`TraverseError`] is that
//! description: it never escapes a probe operation as a raised error and is
//! only observable through the history log and [`Probe::error`].
//!
//! [`Probe::error`]: crate::Probe::error

use alloc::string::String;
use core::fmt::{self, Display};

use crate::types::key::Key;
use crate::types::step::StepKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a single chain step failed.
///
/// The variants preserve diagnostic fidelity inside the history log; at the
/// chain's public surface they all collapse into the same sticky failed
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TraverseError {
    /// The value has no attribute with this name.
    MissingAttribute {
        /// The requested attribute name.
        name: String,
    },
    /// The value has no entry for this key.
    MissingKey {
        /// The requested key.
        key: Key,
    },
    /// Index past the end of a sequence.
    OutOfBounds {
        /// The requested index.
        index: usize,
        /// The sequence length at the time of access.
        len: usize,
    },
    /// The value's type does not support the attempted operation at all.
    Unsupported {
        /// Which of the three operations was attempted.
        operation: StepKind,
        /// Short label for the value's type.
        type_name: String,
    },
    /// Free-form failure reported by the underlying operation.
    Message(String),
    /// The underlying operation panicked and the panic was contained.
    Panicked(String),
}

impl TraverseError {
    /// Missing attribute failure.
    #[inline]
    pub fn missing_attribute<S: Into<String>>(name: S) -> Self {
        Self::MissingAttribute { name: name.into() }
    }

    /// Missing key failure.
    #[inline]
    pub fn missing_key<K: Into<Key>>(key: K) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Out-of-bounds index failure.
    #[inline]
    pub fn out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds { index, len }
    }

    /// The operation is not supported for the value's type.
    #[inline]
    pub fn unsupported<S: Into<String>>(operation: StepKind, type_name: S) -> Self {
        Self::Unsupported { operation, type_name: type_name.into() }
    }

    /// Free-form failure message.
    #[inline]
    pub fn message<S: Into<String>>(message: S) -> Self {
        Self::Message(message.into())
    }

    /// Contained panic with the captured payload text.
    #[inline]
    pub fn panicked<S: Into<String>>(message: S) -> Self {
        Self::Panicked(message.into())
    }
}

impl Display for TraverseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAttribute { name } => write!(f, "no attribute `{name}`"),
            Self::MissingKey { key } => write!(f, "key {key} not found"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            },
            Self::Unsupported { operation, type_name } => {
                write!(f, "{operation} is not supported for {type_name}")
            },
            Self::Message(message) => write!(f, "{message}"),
            Self::Panicked(message) => write!(f, "operation panicked: {message}"),
        }
    }
}

impl core::error::Error for TraverseError {}
