use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kind tag for a JSON value position.
///
/// These are the JSON Schema primitive type names, minus `integer`:
/// the classifier deliberately never distinguishes integers from other
/// numbers, so every numeric value is tagged [`Kind::Number`].
///
/// [`Kind::Absent`] is an internal sentinel for a missing value (an
/// object key that does not exist, or a hole in a sparse sequence). It
/// is never inserted into a schema's tag set and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Absent,
    Array,
    Boolean,
    Number,
    Null,
    Object,
    String,
}

impl Kind {
    /// Classify a value, with `None` standing in for an absent value.
    ///
    /// Total and pure: every `Option<&Value>` maps to exactly one tag.
    pub fn of(value: Option<&Value>) -> Kind {
        match value {
            None => Kind::Absent,
            Some(Value::Null) => Kind::Null,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Bool(_)) => Kind::Boolean,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::String(_)) => Kind::String,
            Some(Value::Object(_)) => Kind::Object,
        }
    }

    /// The JSON Schema spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Absent => "absent",
            Kind::Array => "array",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::Null => "null",
            Kind::Object => "object",
            Kind::String => "string",
        }
    }
}
