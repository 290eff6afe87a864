// DoctorDirectory - core/filter.rs
//
// Composable filter engine for practitioner records.
// All active filters are AND-combined; a filter at its default is skipped.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{ConsultationType, Record};
use std::collections::BTreeSet;

/// Current filter selection. All fields are AND-combined when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Substring name search (case-insensitive). Empty = no filter.
    name_query: String,

    /// Required consultation type. None = no filter.
    consultation_type: Option<ConsultationType>,

    /// Specialties a record must list, every one of them. Empty = no filter.
    selected_specialties: BTreeSet<String>,
}

impl FilterCriteria {
    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.name_query.is_empty()
            && self.consultation_type.is_none()
            && self.selected_specialties.is_empty()
    }

    pub fn name_query(&self) -> &str {
        &self.name_query
    }

    pub fn consultation_type(&self) -> Option<ConsultationType> {
        self.consultation_type
    }

    pub fn selected_specialties(&self) -> &BTreeSet<String> {
        &self.selected_specialties
    }

    pub fn is_specialty_selected(&self, label: &str) -> bool {
        self.selected_specialties.contains(label)
    }

    /// Replace the name query as typed. No trimming.
    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.name_query = query.into();
    }

    /// Replace the consultation type; `None` clears it.
    pub fn set_consultation_type(&mut self, consultation_type: Option<ConsultationType>) {
        self.consultation_type = consultation_type;
    }

    pub fn clear_consultation_type(&mut self) {
        self.consultation_type = None;
    }

    /// Add `label` if absent, remove it if present.
    ///
    /// Labels are not checked against the catalog.
    pub fn toggle_specialty(&mut self, label: &str) {
        if !self.selected_specialties.remove(label) {
            self.selected_specialties.insert(label.to_string());
        }
    }

    pub fn clear_specialties(&mut self) {
        self.selected_specialties.clear();
    }
}

/// Apply filters to a slice of records, returning indices of matching records.
///
/// Indices are ascending, so the result preserves source order.
pub fn apply_filters(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..records.len()).collect();
    }

    let query_lower = criteria.name_query.to_lowercase();

    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_all(record, criteria, &query_lower))
        .map(|(idx, _)| idx)
        .collect();

    tracing::trace!(
        total = records.len(),
        matched = indices.len(),
        "Filters applied"
    );

    indices
}

/// The records that pass every active filter, in source order.
pub fn visible<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    apply_filters(records, criteria)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Check if a single record matches all active filters.
fn matches_all(record: &Record, criteria: &FilterCriteria, query_lower: &str) -> bool {
    // Name search; records without a name never match a non-empty query
    if !query_lower.is_empty() {
        match record.name.as_deref() {
            Some(name) if !name.is_empty() && name.to_lowercase().contains(query_lower) => {}
            _ => return false,
        }
    }

    // Consultation type, exact
    if let Some(wanted) = criteria.consultation_type {
        if record.consultation_type.as_deref() != Some(wanted.label()) {
            return false;
        }
    }

    // Specialties: every selected label must be listed
    if !criteria.selected_specialties.is_empty() {
        let Some(listed) = record.specialties.as_ref() else {
            return false;
        };
        if !criteria
            .selected_specialties
            .iter()
            .all(|label| listed.iter().any(|s| s == label))
        {
            return false;
        }
    }

    true
}
