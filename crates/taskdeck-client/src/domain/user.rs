//! User Reference
//!
//! Opaque identity handed out by the backend.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identity of the signed-in user as returned by the backend.
///
/// The backend may send an email string or a whole user object; the client
/// only ever checks whether one is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(Value);

impl UserRef {
    /// Wrap a backend value, treating `null`, `false`, `0` and `""` as "no user".
    pub fn from_value(value: Value) -> Option<Self> {
        let present = match &value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        };
        present.then_some(Self(value))
    }
}

impl From<&str> for UserRef {
    fn from(identity: &str) -> Self {
        Self(Value::String(identity.to_string()))
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
