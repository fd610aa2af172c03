//! Externally owned form data.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{FormError, json_kind};
use crate::state::State;

/// Form data keyed by field name.
///
/// The owner of a form keeps a clone of its `FormValue` and writes to it as
/// the user edits fields; the form and its validators only read from it.
/// Clones share the same underlying object.
#[derive(Debug, Clone, Default)]
pub struct FormValue {
    fields: State<Map<String, Value>>,
}

impl FormValue {
    /// Create an empty form value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value, which must be an object.
    pub fn from_json(value: Value) -> Result<Self, FormError> {
        match value {
            Value::Object(map) => Ok(Self::from(map)),
            other => Err(FormError::InvalidValue(json_kind(&other))),
        }
    }

    /// Build from any serializable struct or map.
    pub fn from_serialize<T: Serialize>(data: &T) -> Result<Self, FormError> {
        Self::from_json(serde_json::to_value(data)?)
    }

    /// Current value of `field`, or `Value::Null` when the field is absent.
    pub fn get(&self, field: &str) -> Value {
        self.fields
            .with(|map| map.get(field).cloned().unwrap_or(Value::Null))
    }

    /// Whether `field` is present at all.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.with(|map| map.contains_key(field))
    }

    /// Set `field` to `value`.
    pub fn set(&self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        self.fields.update(|map| {
            map.insert(field, value);
        });
    }

    /// Remove `field`, returning its previous value.
    pub fn remove(&self, field: &str) -> Option<Value> {
        self.fields.update(|map| map.remove(field))
    }

    /// Snapshot of the whole object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.get())
    }

    /// Deserialize the current data into a typed struct, e.g. on submit.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        Ok(serde_json::from_value(self.to_json())?)
    }

    /// Write counter, bumped on every change.
    pub fn revision(&self) -> u64 {
        self.fields.revision()
    }
}

impl From<Map<String, Value>> for FormValue {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            fields: State::new(map),
        }
    }
}

/// Render a value the way a text control would display it.
pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
