// DoctorDirectory - core/store.rs
//
// Immutable snapshot of the fetched practitioner records.
// Built once from the outcome of the data load; every failure mode
// collapses into an empty store so nothing propagates outward.

use crate::core::model::Record;
use serde_json::Value;

/// Ordered, read-only sequence of practitioner records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// An empty directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from a decoded payload.
    ///
    /// Only a JSON array is accepted; any other shape yields an empty store.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.as_array() {
            Some(items) => Self {
                records: items.iter().map(Record::from_value).collect(),
            },
            None => {
                tracing::warn!(
                    kind = json_kind(payload),
                    "Directory payload is not a list; starting with an empty directory"
                );
                Self::empty()
            }
        }
    }

    /// Build a store from the terminal outcome of a load attempt.
    pub fn from_outcome<E: std::fmt::Display>(outcome: Result<Value, E>) -> Self {
        match outcome {
            Ok(payload) => Self::from_payload(&payload),
            Err(e) => {
                tracing::warn!(error = %e, "Directory load failed; starting with an empty directory");
                Self::empty()
            }
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
