// DoctorDirectory - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

// =============================================================================
// Specialty catalog
// =============================================================================

/// The fixed catalog of specialty labels offered for selection.
///
/// Selection is not validated against this list; a label outside it is
/// accepted and simply never matches a record.
pub const SPECIALTY_CATALOG: [&str; 18] = [
    "Gynaecologist",
    "ENT",
    "Diabetologist",
    "Cardiologist",
    "Physiotherapist",
    "Endocrinologist",
    "Orthopaedic",
    "Ophthalmologist",
    "Gastroenterologist",
    "Pulmonologist",
    "Psychiatrist",
    "Urologist",
    "Dietitian/Nutritionist",
    "Psychologist",
    "Sexologist",
    "Nephrologist",
    "Neurologist",
    "Oncologist",
];

// =============================================================================
// Consultation type
// =============================================================================

/// Consultation types a user can filter on.
///
/// Records carry the type as free text; only these two labels are ever
/// matched, exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsultationType {
    VideoConsult,
    InClinic,
}

impl ConsultationType {
    /// Returns all variants in display order.
    pub fn all() -> &'static [ConsultationType] {
        &[ConsultationType::VideoConsult, ConsultationType::InClinic]
    }

    /// The exact text a record must carry to match this type.
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationType::VideoConsult => "Video Consult",
            ConsultationType::InClinic => "In Clinic",
        }
    }

    /// Look up a variant by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.label() == label)
    }
}

impl fmt::Display for ConsultationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Record
// =============================================================================

/// Opaque record identifier as it appeared in the source payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A single practitioner, immutable once loaded.
///
/// Every field is optional because the source data is not schema-checked.
/// Malformed fields decode to `None` rather than rejecting the record; the
/// filter rules decide what a missing field means.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `None` when the field is missing or not a list. Non-text members
    /// are dropped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,

    /// Free text; unrecognised values are kept as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consultation_type: Option<String>,

    /// Years of experience. Display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,

    /// Consultation fee. Display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<f64>,
}

impl Record {
    /// Decode one element of the source list.
    ///
    /// Never fails. A non-object element yields a record with every field
    /// missing.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let id = match obj.get("id") {
            Some(Value::Number(n)) => Some(RecordId::Number(n.clone())),
            Some(Value::String(s)) => Some(RecordId::Text(s.clone())),
            _ => None,
        };

        let specialties = obj.get("specialties").and_then(Value::as_array).map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        });

        Self {
            id,
            name: text_field(obj.get("name")),
            specialties,
            consultation_type: text_field(obj.get("consultationType")),
            experience: number_field(obj.get("experience")),
            fees: number_field(obj.get("fees")),
        }
    }

    /// Specialties joined for display, or `None` when there are none.
    pub fn specialties_display(&self) -> Option<String> {
        self.specialties
            .as_ref()
            .filter(|s| !s.is_empty())
            .map(|s| s.join(", "))
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// Accept a JSON number or a string holding one.
fn number_field(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_has_eighteen_unique_labels() {
        let mut labels = SPECIALTY_CATALOG.to_vec();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 18);
    }

    #[test]
    fn test_consultation_label_lookup_is_exact() {
        assert_eq!(
            ConsultationType::from_label("In Clinic"),
            Some(ConsultationType::InClinic)
        );
        assert_eq!(ConsultationType::from_label("in clinic"), None);
    }

    #[test]
    fn test_decode_full_record() {
        let record = Record::from_value(&json!({
            "id": "d-7",
            "name": "Dr. Ayesha Khan",
            "specialties": ["ENT", "Cardiologist"],
            "consultationType": "Video Consult",
            "experience": 12,
            "fees": "500"
        }));
        assert_eq!(record.id, Some(RecordId::Text("d-7".to_string())));
        assert_eq!(record.name.as_deref(), Some("Dr. Ayesha Khan"));
        assert_eq!(
            record.specialties_display().as_deref(),
            Some("ENT, Cardiologist")
        );
        assert_eq!(record.experience, Some(12.0));
        assert_eq!(record.fees, Some(500.0));
    }

    #[test]
    fn test_decode_malformed_fields_become_missing() {
        let record = Record::from_value(&json!({
            "id": 3,
            "name": 42,
            "specialties": "ENT",
            "consultationType": null,
            "experience": "a lot"
        }));
        assert_eq!(record.id.map(|id| id.to_string()), Some("3".to_string()));
        assert!(record.name.is_none());
        assert!(record.specialties.is_none());
        assert!(record.consultation_type.is_none());
        assert!(record.experience.is_none());
        assert!(record.fees.is_none());
    }

    #[test]
    fn test_decode_drops_non_text_specialties() {
        let record = Record::from_value(&json!({"specialties": ["ENT", 5, null]}));
        assert_eq!(record.specialties, Some(vec!["ENT".to_string()]));
    }

    #[test]
    fn test_decode_non_object_element() {
        assert_eq!(Record::from_value(&json!(17)), Record::default());
    }

    #[test]
    fn test_serialises_with_source_field_names() {
        let record = Record {
            name: Some("A".to_string()),
            consultation_type: Some("In Clinic".to_string()),
            ..Default::default()
        };
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"name":"A","consultationType":"In Clinic"}"#);
    }
}
