//! Natural-syntax chain construction.
//!
//! Rust has no overloadable dot-access or call syntax for arbitrary names,
//! so probes expose explicit methods. [`chain!`](crate::chain) restores the
//! host-language-natural surface on top of them: dots, subscripts, and call
//! parentheses in one expression, expanded to the corresponding
//! [`Probe`](crate::Probe) method calls. Pure sugar, no added semantics.

/// Builds a chain with dot, subscript, and call syntax.
///
/// `chain!(value => .field["key"][0](arg))` expands to
/// `dive(value).attr("field").item("key").item(0).call([arg])`. Passing a
/// second expression before `=>` sets the chain default, as
/// [`dive_or`](crate::dive_or) does.
///
/// The result is an ordinary [`Probe`](crate::Probe); read it back with
/// [`resolve`](crate::Probe::resolve) or [`surface`](crate::surface).
///
/// # Examples
///
/// ```
/// use spelunk::chain;
/// use serde_json::json;
///
/// let data = json!({"config": {"servers": [{"port": 8080}]}});
/// let port = chain!(data => .config["servers"][0].port);
///
/// assert_eq!(port.resolve(), json!(8080));
/// ```
///
/// With an explicit default:
///
/// ```
/// use spelunk::chain;
/// use serde_json::json;
///
/// let data = json!({"a": {"b": [1, 2, 3]}});
/// let missing = chain!(data, json!(-1) => ["a"]["missing"][0]);
///
/// assert_eq!(missing.resolve(), json!(-1));
/// ```
#[macro_export]
macro_rules! chain {
    ($value:expr => $($ops:tt)*) => {
        $crate::__chain_ops!($crate::dive($value), $($ops)*)
    };
    ($value:expr, $default:expr => $($ops:tt)*) => {
        $crate::__chain_ops!($crate::dive_or($value, $default), $($ops)*)
    };
    ($value:expr $(,)?) => {
        $crate::dive($value)
    };
}

/// Internal muncher for `chain!` operation sequences.
#[macro_export]
#[doc(hidden)]
macro_rules! __chain_ops {
    ($probe:expr,) => {
        $probe
    };
    ($probe:expr, . $attr:ident $($rest:tt)*) => {
        $crate::__chain_ops!($probe.attr(stringify!($attr)), $($rest)*)
    };
    ($probe:expr, [$key:expr] $($rest:tt)*) => {
        $crate::__chain_ops!($probe.item($key), $($rest)*)
    };
    ($probe:expr, ($($arg:expr),* $(,)?) $($rest:tt)*) => {
        $crate::__chain_ops!($probe.call([$($arg),*]), $($rest)*)
    };
}
