//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use spelunk::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Entry points**: [`dive`], [`dive_or`], [`surface`], [`chain!`]
//! - **Types**: [`Probe`], [`Step`], [`Op`], [`Outcome`], [`Key`],
//!   [`TraverseError`], [`ProbeReport`]
//! - **Traits**: [`Traverse`]
//!
//! # Examples
//!
//! ```
//! use spelunk::prelude::*;
//! use serde_json::json;
//!
//! let data = json!({"a": [1, 2, 3]});
//! let probe = dive(data).item("a").item(1);
//!
//! assert_eq!(surface(&probe), json!(2));
//! ```

// Macros
pub use crate::chain;

// Core types
pub use crate::types::{Key, Op, Outcome, Probe, ProbeReport, Step, StepKind, TraverseError};

// Traits
pub use crate::traits::Traverse;

// Entry points
pub use crate::types::{dive, dive_or, surface};
