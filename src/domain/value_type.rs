use std::fmt;

use serde::Serialize;

use crate::domain::value::Value;

/// Closed set of value kinds a constraint can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    None,
    Number,
    String,
    Boolean,
    Object,
    Array,
    Regex,
}

impl ValueType {
    /// Classifies a runtime value by its kind.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Regex(_) => Self::Regex,
        }
    }

    /// Classifies a declared type name.
    ///
    /// Matching is case-insensitive. Unknown names are treated as class names and
    /// resolve to `Object`, or to `Array` when they carry an array marker
    /// (`Point[]`, `Array<Point>`).
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "none" | "null" | "undefined" => Self::None,
            "number" => Self::Number,
            "string" => Self::String,
            "boolean" | "bool" => Self::Boolean,
            "object" => Self::Object,
            "array" => Self::Array,
            "regex" | "regexp" => Self::Regex,
            other if other.contains("[]") || other.contains("array") => Self::Array,
            _ => Self::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Regex => "regex",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
