//! Built-in traversal for `serde_json::Value`.
//!
//! JSON has no attribute namespace distinct from object fields, so both
//! attribute access and name-keyed item access read object fields; index
//! item access reads array elements. JSON values are never callable.
//!
//! # Examples
//!
//! ```
//! use spelunk::dive;
//! use serde_json::json;
//!
//! let data = json!({"config": {"servers": [{"port": 8080}]}});
//! let port = dive(data).attr("config").item("servers").item(0).attr("port");
//!
//! assert_eq!(port.resolve(), json!(8080));
//! ```

use alloc::format;

use serde_json::Value;

use crate::traits::Traverse;
use crate::types::{Key, StepKind, TraverseError};

fn type_name_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Traverse for Value {
    /// JSON's absent sentinel is `null`.
    fn absent() -> Self {
        Value::Null
    }

    fn type_name(&self) -> &'static str {
        type_name_of(self)
    }

    fn attr(&self, name: &str) -> Result<Self, TraverseError> {
        match self {
            Value::Object(fields) => fields
                .get(name)
                .cloned()
                .ok_or_else(|| TraverseError::missing_attribute(name)),
            other => Err(TraverseError::unsupported(StepKind::Attribute, type_name_of(other))),
        }
    }

    fn item(&self, key: &Key) -> Result<Self, TraverseError> {
        match (self, key) {
            (Value::Object(fields), Key::Name(name)) => fields
                .get(name)
                .cloned()
                .ok_or_else(|| TraverseError::missing_key(key.clone())),
            (Value::Object(_), Key::Index(_)) => Err(TraverseError::missing_key(key.clone())),
            (Value::Array(items), Key::Index(index)) => items
                .get(*index)
                .cloned()
                .ok_or_else(|| TraverseError::out_of_bounds(*index, items.len())),
            (Value::Array(_), Key::Name(name)) => {
                Err(TraverseError::message(format!("cannot index array with key \"{name}\"")))
            },
            (other, _) => Err(TraverseError::unsupported(StepKind::Item, type_name_of(other))),
        }
    }

    /// JSON values are never callable.
    fn invoke(&self, _args: &[Self]) -> Result<Self, TraverseError> {
        Err(TraverseError::unsupported(StepKind::Call, type_name_of(self)))
    }
}
