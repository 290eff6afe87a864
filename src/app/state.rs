// DoctorDirectory - app/state.rs
//
// Directory state management. Holds the record store, the filter
// criteria, and the loading flag, and exposes the contract the
// presentation layer talks to.
//
// The visible subset is never stored; every read recomputes it from the
// current store and criteria.

use crate::app::load::LoadProgress;
use crate::core::filter::{self, FilterCriteria};
use crate::core::model::{ConsultationType, Record, SPECIALTY_CATALOG};
use crate::core::store::RecordStore;

/// What the presentation layer should show instead of, or as, the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    /// The one fetch has not resolved yet.
    Loading,
    /// Loading is done and nothing passes the filters.
    NoResults,
    /// Loading is done and this many records are visible.
    Results(usize),
}

/// Top-level directory state, owned by a single controlling context.
#[derive(Debug)]
pub struct DirectoryState {
    store: RecordStore,
    criteria: FilterCriteria,
    loading: bool,
}

impl DirectoryState {
    /// Initial state: empty store, default criteria, loading.
    pub fn new() -> Self {
        Self {
            store: RecordStore::empty(),
            criteria: FilterCriteria::default(),
            loading: true,
        }
    }

    /// Install the store. Only the first call has any effect.
    pub fn complete_load(&mut self, store: RecordStore) {
        if !self.loading {
            tracing::warn!("Directory already loaded; ignoring repeated load result");
            return;
        }
        tracing::info!(records = store.len(), "Directory ready");
        self.store = store;
        self.loading = false;
    }

    /// Apply one message from the load worker.
    pub fn apply_load_progress(&mut self, progress: LoadProgress) {
        match progress {
            LoadProgress::Started { source } => {
                tracing::debug!(source = %source, "Loading directory");
            }
            LoadProgress::Finished { store } => self.complete_load(store),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The fixed specialty catalog, for building selection controls.
    pub fn specialty_catalog(&self) -> &'static [&'static str] {
        &SPECIALTY_CATALOG
    }

    /// Records passing the current criteria, in source order.
    pub fn visible(&self) -> Vec<&Record> {
        filter::visible(self.store.records(), &self.criteria)
    }

    pub fn view_status(&self) -> ViewStatus {
        if self.loading {
            return ViewStatus::Loading;
        }
        match filter::apply_filters(self.store.records(), &self.criteria).len() {
            0 => ViewStatus::NoResults,
            n => ViewStatus::Results(n),
        }
    }

    // -------------------------------------------------------------------------
    // Criteria mutations
    // -------------------------------------------------------------------------

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.criteria.set_name_query(query);
        tracing::debug!(len = self.criteria.name_query().len(), "Name query set");
    }

    pub fn set_consultation_type(&mut self, consultation_type: Option<ConsultationType>) {
        self.criteria.set_consultation_type(consultation_type);
        tracing::debug!(consultation = ?consultation_type, "Consultation type set");
    }

    pub fn clear_consultation_type(&mut self) {
        self.criteria.clear_consultation_type();
        tracing::debug!("Consultation type cleared");
    }

    pub fn toggle_specialty(&mut self, label: &str) {
        self.criteria.toggle_specialty(label);
        tracing::debug!(
            specialty = label,
            selected = self.criteria.is_specialty_selected(label),
            "Specialty toggled"
        );
    }

    pub fn clear_specialties(&mut self) {
        self.criteria.clear_specialties();
        tracing::debug!("Specialties cleared");
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn loaded_state() -> DirectoryState {
        let mut state = DirectoryState::new();
        state.complete_load(RecordStore::from_payload(&json!([
            {"id": 1, "name": "A", "consultationType": "In Clinic", "specialties": ["ENT"]},
            {"id": 2, "name": "B", "consultationType": "Video Consult", "specialties": ["ENT", "Cardiologist"]}
        ])));
        state
    }

    #[test]
    fn test_starts_loading() {
        let state = DirectoryState::new();
        assert!(state.is_loading());
        assert_eq!(state.view_status(), ViewStatus::Loading);
        assert!(state.visible().is_empty());
        assert_eq!(state.specialty_catalog().len(), 18);
    }

    #[test]
    fn test_mutations_recompute_visible() {
        let mut state = loaded_state();
        assert_eq!(state.view_status(), ViewStatus::Results(2));

        state.set_consultation_type(Some(ConsultationType::VideoConsult));
        state.toggle_specialty("ENT");
        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name.as_deref(), Some("B"));

        state.toggle_specialty("Urologist");
        assert_eq!(state.view_status(), ViewStatus::NoResults);

        state.clear_specialties();
        state.clear_consultation_type();
        state.set_name_query("a");
        assert_eq!(state.view_status(), ViewStatus::Results(1));
    }

    #[test]
    fn test_store_is_set_once() {
        let mut state = loaded_state();
        state.apply_load_progress(LoadProgress::Finished {
            store: RecordStore::empty(),
        });
        assert_eq!(state.store().len(), 2);
    }

    #[test]
    fn test_malformed_payload_finishes_empty() {
        let mut state = DirectoryState::new();
        state.apply_load_progress(LoadProgress::Started {
            source: "test".to_string(),
        });
        assert!(state.is_loading());

        state.apply_load_progress(LoadProgress::Finished {
            store: RecordStore::from_payload(&json!({"error": "nope"})),
        });
        assert!(!state.is_loading());
        assert_eq!(state.view_status(), ViewStatus::NoResults);

        state.set_name_query("a");
        assert!(state.visible().is_empty());
    }
}
