//! Safe, chainable traversal of uncertain nested data.
//!
//! Wrap a value with [`dive`], chain attribute lookups, item lookups, and
//! calls, and read the result back with [`surface`]. Any failure along the
//! chain is contained rather than propagated: the chain flips into a sticky
//! failed state, later operations are recorded but never attempted, and
//! resolution returns the chain's default. Every operation lands in an
//! append-only history log for diagnostics.
//!
//! # Examples
//!
//! ## Traversing JSON
//!
//! ```
//! use spelunk::{dive, surface};
//! use serde_json::json;
//!
//! let data = json!({"a": {"b": [1, 2, 3]}});
//!
//! let hit = dive(data.clone()).item("a").item("b").item(1);
//! assert_eq!(surface(&hit), json!(2));
//!
//! let miss = dive(data).item("a").item("missing").item(0);
//! assert_eq!(surface(&miss), json!(null));
//! ```
//!
//! ## Root-cause triage from the history log
//!
//! ```
//! use spelunk::dive_or;
//! use serde_json::json;
//!
//! let probe = dive_or(json!([1, 2, 3]), json!(0)).item(10).item("x");
//!
//! assert_eq!(probe.resolve(), json!(0));
//!
//! let prefix = probe.history_until_first_error();
//! assert_eq!(prefix.len(), 1);
//! assert!(prefix[0].failed());
//! assert_eq!(probe.history().len(), 2);
//! ```
//!
//! ## Natural syntax with `chain!`
//!
//! ```
//! use spelunk::chain;
//! use serde_json::json;
//!
//! let data = json!({"config": {"servers": [{"port": 8080}]}});
//! let port = chain!(data => .config["servers"][0].port);
//!
//! assert_eq!(port.resolve(), json!(8080));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

/// Natural-syntax chain construction
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The traversal seam implemented by wrapped value types
pub mod traits;
/// The probe, recorded steps, keys, and failure descriptions
pub mod types;

/// Built-in traversal for JSON values (requires `json` feature)
#[cfg(feature = "json")]
pub mod json;

pub use traits::Traverse;
pub use types::{
    dive, dive_or, surface, Key, Op, Outcome, Probe, ProbeReport, Step, StepKind, TraverseError,
};
