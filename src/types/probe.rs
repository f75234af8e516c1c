//! The chain wrapper and its resolution functions.
//!
//! A [`Probe`] is one position in a traversal chain: the value produced so
//! far (or the failure that ended the chain), the default fixed when the
//! chain was created, and a handle to the log shared by the whole chain.
//! The three operations consume the probe and return the next one, so a
//! chain of any length and any mixture of operations composes uniformly.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display};

use crate::traits::Traverse;
use crate::types::error::TraverseError;
use crate::types::history::History;
use crate::types::key::Key;
use crate::types::step::{Op, Step};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chain state: a live value, or the retained first failure.
///
/// There is no transition out of `Failed`; failure is sticky for the rest
/// of the chain.
#[derive(Debug, Clone)]
enum State<T> {
    Alive(T),
    Failed(TraverseError),
}

/// A position in a traversal chain over a [`Traverse`] value.
///
/// Probes contain every failure: an operation on a failed chain is never
/// attempted, an operation that fails flips the chain into the sticky
/// failed state, and nothing ever escapes as a raised error. The final
/// value is read back with [`resolve`](Probe::resolve) (or the free
/// function [`surface`]), which substitutes the chain default after a
/// failure.
///
/// Cloning a probe clones its position; both clones keep appending to the
/// same chain log.
///
/// # Examples
///
/// ```
/// use spelunk::dive;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": [1, 2, 3]}});
/// let probe = dive(data).item("a").item("b").item(1);
///
/// assert_eq!(probe.resolve(), json!(2));
/// ```
///
/// A failure anywhere in the chain yields the default at the end, and the
/// operations after the failure are recorded but never attempted:
///
/// ```
/// use spelunk::dive_or;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": [1, 2, 3]}});
/// let probe = dive_or(data, json!("fallback")).item("a").item("missing").item(0);
///
/// assert!(probe.is_failed());
/// assert_eq!(probe.resolve(), json!("fallback"));
/// assert_eq!(probe.history().len(), 3);
/// assert_eq!(probe.history_until_first_error().len(), 2);
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct Probe<T> {
    state: State<T>,
    default: T,
    history: History<T>,
}

impl<T: Traverse> Probe<T> {
    /// Starts a chain with the type's absent sentinel as the default.
    #[inline]
    pub fn new(value: T) -> Self {
        Self::with_default(value, T::absent())
    }

    /// Starts a chain with an explicit default.
    ///
    /// The default is fixed for the life of the chain and propagated
    /// unchanged to every probe produced from this one.
    #[inline]
    pub fn with_default(value: T, default: T) -> Self {
        Self { state: State::Alive(value), default, history: History::new() }
    }

    /// Reads the named attribute of the current value.
    ///
    /// # Examples
    ///
    /// ```
    /// use spelunk::dive;
    /// use serde_json::json;
    ///
    /// let config = json!({"server": {"port": 8080}});
    /// let port = dive(config).attr("server").attr("port").resolve();
    ///
    /// assert_eq!(port, json!(8080));
    /// ```
    #[inline]
    pub fn attr<S: Into<String>>(self, name: S) -> Self {
        self.advance(Op::Attr(name.into()))
    }

    /// Looks up an item of the current value by index or key.
    ///
    /// # Examples
    ///
    /// ```
    /// use spelunk::dive;
    /// use serde_json::json;
    ///
    /// let data = json!({"servers": [{"port": 8080}]});
    /// let port = dive(data).item("servers").item(0).item("port").resolve();
    ///
    /// assert_eq!(port, json!(8080));
    /// ```
    #[inline]
    pub fn item<K: Into<Key>>(self, key: K) -> Self {
        self.advance(Op::Item(key.into()))
    }

    /// Invokes the current value with the given arguments.
    ///
    /// # Examples
    ///
    /// JSON values are never callable; the failure is contained like any
    /// other:
    ///
    /// ```
    /// use spelunk::dive_or;
    /// use serde_json::json;
    ///
    /// let probe = dive_or(json!(5), json!(-1)).call([]);
    ///
    /// assert!(probe.is_failed());
    /// assert_eq!(probe.resolve(), json!(-1));
    /// ```
    #[inline]
    pub fn call<I>(self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.advance(Op::Call(args.into_iter().collect()))
    }

    /// The shared attempt, record, advance routine behind all three
    /// operations.
    fn advance(self, op: Op<T>) -> Self {
        let Self { state, default, history } = self;
        let state = match state {
            State::Failed(error) => {
                history.record(Step::skipped(op));
                State::Failed(error)
            },
            State::Alive(value) => match contain(|| apply(&value, &op)) {
                Ok(next) => {
                    history.record(Step::success(op, next.clone()));
                    State::Alive(next)
                },
                Err(error) => {
                    history.record(Step::failure(op, error.clone()));
                    State::Failed(error)
                },
            },
        };
        Self { state, default, history }
    }

    /// Terminates the chain: the live value, or the chain default if any
    /// step failed.
    ///
    /// This is a pure read. It never fails, does not touch the history,
    /// and calling it twice returns the same value both times.
    #[inline]
    pub fn resolve(&self) -> T {
        match &self.state {
            State::Alive(value) => value.clone(),
            State::Failed(_) => self.default.clone(),
        }
    }

    /// Consuming form of [`resolve`](Probe::resolve) for callers done with
    /// the chain.
    #[inline]
    pub fn into_value(self) -> T {
        match self.state {
            State::Alive(value) => value,
            State::Failed(_) => self.default,
        }
    }

    /// Whether the chain has failed.
    #[inline]
    pub fn is_failed(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// The failure that ended the chain, if any.
    #[inline]
    pub fn error(&self) -> Option<&TraverseError> {
        match &self.state {
            State::Alive(_) => None,
            State::Failed(error) => Some(error),
        }
    }

    /// The default fixed at chain creation.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Owned copy of the complete ordered log of every operation recorded
    /// for this chain, successes, failures, and skipped entries alike.
    ///
    /// The log belongs to the chain, not to one probe: extending any probe
    /// of the chain appends to the log every other probe of the chain sees.
    pub fn history(&self) -> Vec<Step<T>> {
        self.history.snapshot()
    }

    /// Owned copy of the ordered log prefix ending at (and including) the
    /// first failure entry, or the full log if no failure occurred.
    ///
    /// Useful for root-cause triage without scanning entries recorded after
    /// the chain had already given up.
    pub fn history_until_first_error(&self) -> Vec<Step<T>> {
        self.history.snapshot_until_first_failure()
    }

    /// Bundles the final value, the first error, and both history views
    /// into one diagnostic snapshot.
    ///
    /// # Examples
    ///
    /// ```
    /// use spelunk::dive;
    /// use serde_json::json;
    ///
    /// let report = dive(json!([1, 2, 3])).item(10).report();
    ///
    /// assert_eq!(report.final_value, json!(null));
    /// assert!(report.error.is_some());
    /// assert_eq!(report.history.len(), 1);
    /// ```
    pub fn report(&self) -> ProbeReport<T> {
        ProbeReport {
            final_value: self.resolve(),
            error: self.error().cloned(),
            history: self.history(),
            history_until_first_error: self.history_until_first_error(),
        }
    }
}

impl<T: Display> Display for Probe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Alive(value) => write!(f, "<probe {value}>"),
            State::Failed(error) => write!(f, "<probe failed: {error}>"),
        }
    }
}

/// Diagnostic snapshot of a chain, as produced by [`Probe::report`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProbeReport<T> {
    /// What [`Probe::resolve`] returns: the live value or the default.
    pub final_value: T,
    /// The failure that ended the chain, if any.
    pub error: Option<TraverseError>,
    /// The complete ordered log.
    pub history: Vec<Step<T>>,
    /// The log prefix ending at the first failure.
    pub history_until_first_error: Vec<Step<T>>,
}

/// Runs one operation against the current value.
fn apply<T: Traverse>(value: &T, op: &Op<T>) -> Result<T, TraverseError> {
    match op {
        Op::Attr(name) => value.attr(name),
        Op::Item(key) => value.item(key),
        Op::Call(args) => value.invoke(args),
    }
}

/// Error-handling boundary for a single operation: every failure signal
/// from the underlying value is converted into a [`TraverseError`]. With
/// the `std` feature, panics are contained at the same boundary.
#[cfg(feature = "std")]
fn contain<T>(f: impl FnOnce() -> Result<T, TraverseError>) -> Result<T, TraverseError> {
    match std::panic::catch_unwind(core::panic::AssertUnwindSafe(f)) {
        Ok(outcome) => outcome,
        Err(payload) => Err(TraverseError::panicked(panic_text(payload.as_ref()))),
    }
}

#[cfg(not(feature = "std"))]
fn contain<T>(f: impl FnOnce() -> Result<T, TraverseError>) -> Result<T, TraverseError> {
    f()
}

#[cfg(feature = "std")]
fn panic_text(payload: &(dyn core::any::Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        String::from(*text)
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("non-string panic payload")
    }
}

/// Starts a chain over `value` with the type's absent sentinel as the
/// default.
///
/// # Examples
///
/// ```
/// use spelunk::{dive, surface};
/// use serde_json::json;
///
/// let probe = dive(json!({"a": 1})).item("a");
/// assert_eq!(surface(&probe), json!(1));
/// ```
#[inline]
pub fn dive<T: Traverse>(value: T) -> Probe<T> {
    Probe::new(value)
}

/// Starts a chain over `value` with an explicit default.
///
/// # Examples
///
/// ```
/// use spelunk::{dive_or, surface};
/// use serde_json::json;
///
/// let probe = dive_or(json!({"a": 1}), json!(0)).item("b");
/// assert_eq!(surface(&probe), json!(0));
/// ```
#[inline]
pub fn dive_or<T: Traverse>(value: T, default: T) -> Probe<T> {
    Probe::with_default(value, default)
}

/// Terminates a chain: returns the final value, or the chain default if
/// any step failed.
///
/// Equivalent to [`Probe::resolve`]; reading is idempotent and leaves the
/// probe and its history untouched.
#[inline]
pub fn surface<T: Traverse>(probe: &Probe<T>) -> T {
    probe.resolve()
}
