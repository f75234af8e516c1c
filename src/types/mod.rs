//! Chain data types: the probe, its recorded steps, keys, and failure
//! descriptions.
//!
//! # Examples
//!
//! ```
//! use spelunk::{dive, Outcome, StepKind};
//! use serde_json::json;
//!
//! let probe = dive(json!({"a": [1, 2]})).item("a").item(5);
//! let history = probe.history();
//!
//! assert_eq!(history[0].kind(), StepKind::Item);
//! assert!(history[0].succeeded());
//! assert!(matches!(history[1].outcome, Outcome::Failure(_)));
//! ```
use smallvec::SmallVec;

pub mod error;
pub(crate) mod history;
pub mod key;
pub mod probe;
pub mod step;

pub use error::TraverseError;
pub use key::Key;
pub use probe::{dive, dive_or, surface, Probe, ProbeReport};
pub use step::{Op, Outcome, Step, StepKind};

/// SmallVec-backed storage for a chain's step log.
///
/// Inline capacity for 4 entries keeps short chains, the common case, off
/// the heap.
pub type StepVec<T> = SmallVec<[Step<T>; 4]>;
