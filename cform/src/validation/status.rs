use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Validation outcome of one field.
///
/// Serializes as `false` when valid and as the message string when invalid,
/// which is the shape front ends conventionally expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid(String),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Error message, if invalid.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(msg) => Some(msg),
        }
    }
}

impl Serialize for FieldStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => serializer.serialize_bool(false),
            Self::Invalid(msg) => serializer.serialize_str(msg),
        }
    }
}

impl<'de> Deserialize<'de> for FieldStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Message(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(Self::Valid),
            Repr::Flag(true) => Err(D::Error::custom("a valid field is encoded as `false`")),
            Repr::Message(msg) => Ok(Self::Invalid(msg)),
        }
    }
}

/// Error state of a form, keyed by field name.
///
/// A field missing from the map has not been validated (or was cleared
/// wholesale); it shows no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Errors {
    fields: BTreeMap<String, FieldStatus>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status of `field`, if it has one.
    pub fn get(&self, field: &str) -> Option<&FieldStatus> {
        self.fields.get(field)
    }

    /// Error message of `field`, if it is invalid.
    pub fn message(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldStatus::message)
    }

    pub fn set(&mut self, field: impl Into<String>, status: FieldStatus) {
        self.fields.insert(field.into(), status);
    }

    /// Whether any field is invalid.
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|s| !s.is_valid())
    }

    /// Invalid fields with their messages, in field-name order.
    pub fn invalid(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|(field, status)| status.message().map(|msg| (field.as_str(), msg)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldStatus)> {
        self.fields.iter().map(|(field, status)| (field.as_str(), status))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldStatus)> for Errors {
    fn from_iter<I: IntoIterator<Item = (String, FieldStatus)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
