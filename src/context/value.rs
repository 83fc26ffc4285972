use std::collections::BTreeMap;

use serde::Serialize;

/// The render context handed to the template engine: a map of variable
/// names to [`Value`]s, including one nested table per namespace.
pub type Context = BTreeMap<String, Value>;

/// A context value.
///
/// Environment variables enter as strings; boolean-looking values routed
/// into a namespace are coerced to `Bool`; each namespace is a `Table`.
/// Serializes untagged, so the context hands off to a template engine as a
/// plain JSON/YAML structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Bool(bool),
    Table(Context),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Context> {
        match self {
            Value::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Context> for Value {
    fn from(table: Context) -> Self {
        Value::Table(table)
    }
}

/// Converts a finished context into the JSON value the template engine
/// renders against.
pub fn to_engine_value(context: &Context) -> Result<serde_json::Value, crate::Error> {
    serde_json::to_value(context).map_err(crate::Error::EngineValue)
}
