//! Subscripts for item access.

use alloc::string::String;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A subscript used for item access: a positional index or a named key.
///
/// Conversions exist for the common inputs, so chain call sites can pass
/// `usize`, `&str`, or `String` directly.
///
/// # Examples
///
/// ```
/// use spelunk::Key;
///
/// let by_index: Key = 2.into();
/// let by_name: Key = "servers".into();
///
/// assert_eq!(by_index, Key::Index(2));
/// assert_eq!(by_name, Key::Name("servers".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    /// Positional index into a sequence.
    Index(usize),
    /// Named key into a map-like value.
    Name(String),
}

impl Key {
    /// Creates a positional index key.
    #[inline]
    pub fn index(index: usize) -> Self {
        Self::Index(index)
    }

    /// Creates a named key.
    #[inline]
    pub fn name<S: Into<String>>(name: S) -> Self {
        Self::Name(name.into())
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    #[inline]
    fn from(name: &str) -> Self {
        Self::Name(String::from(name))
    }
}

impl From<String> for Key {
    #[inline]
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}
