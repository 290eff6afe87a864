// DoctorDirectory - ui/cards.rs
//
// Text rendering of practitioner cards, the list status, and the
// specialty checklist.

use crate::app::state::{DirectoryState, ViewStatus};
use crate::core::filter::FilterCriteria;
use crate::core::model::{Record, SPECIALTY_CATALOG};
use crate::util::constants;

/// Render one practitioner card.
///
/// ```text
/// Dr. Ayesha Khan
///   ENT, Cardiologist
///   Experience: 12 yrs | Fee: ₹500
///   Video Consult
/// ```
pub fn render_card(record: &Record) -> String {
    let name = record
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(constants::UNNAMED_LABEL);
    let specialties = record
        .specialties_display()
        .unwrap_or_else(|| constants::NO_SPECIALTIES_LABEL.to_string());

    let mut out = format!(
        "{name}\n  {specialties}\n  Experience: {} yrs | Fee: {}{}\n",
        display_number(record.experience),
        constants::FEE_CURRENCY_SYMBOL,
        display_number(record.fees)
    );
    if let Some(consultation) = record.consultation_type.as_deref() {
        out.push_str(&format!("  {consultation}\n"));
    }
    out
}

/// Render the whole result area: loading text, empty text, or the cards.
pub fn render_view(state: &DirectoryState) -> String {
    match state.view_status() {
        ViewStatus::Loading => format!("{}\n", constants::LOADING_MESSAGE),
        ViewStatus::NoResults => format!("{}\n", constants::NO_RESULTS_MESSAGE),
        ViewStatus::Results(_) => state
            .visible()
            .into_iter()
            .map(render_card)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Render the specialty checklist with the current selection marked.
pub fn render_catalog(criteria: &FilterCriteria) -> String {
    SPECIALTY_CATALOG
        .iter()
        .map(|label| {
            let mark = if criteria.is_specialty_selected(label) {
                'x'
            } else {
                ' '
            };
            format!("[{mark}] {label}\n")
        })
        .collect()
}

fn display_number(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| constants::MISSING_VALUE_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::RecordStore;
    use serde_json::json;

    #[test]
    fn test_card_lists_fields() {
        let record = Record::from_value(&json!({
            "name": "Dr. Ayesha Khan",
            "specialties": ["ENT", "Cardiologist"],
            "consultationType": "Video Consult",
            "experience": 12,
            "fees": 500
        }));
        let card = render_card(&record);
        assert_eq!(
            card,
            "Dr. Ayesha Khan\n  ENT, Cardiologist\n  Experience: 12 yrs | Fee: \u{20b9}500\n  Video Consult\n"
        );
    }

    #[test]
    fn test_card_placeholders() {
        let card = render_card(&Record::default());
        assert!(card.starts_with("(no name)\n"));
        assert!(card.contains("No specialties"));
        assert!(card.contains("Experience: n/a yrs"));
    }

    #[test]
    fn test_card_without_consultation_type() {
        let record = Record::from_value(&json!({
            "name": "Dr. Rao",
            "specialties": ["ENT"],
            "fees": 300
        }));
        assert_eq!(
            render_card(&record),
            "Dr. Rao\n  ENT\n  Experience: n/a yrs | Fee: \u{20b9}300\n"
        );
    }

    #[test]
    fn test_view_states() {
        let mut state = DirectoryState::new();
        assert_eq!(render_view(&state), "Loading doctors...\n");

        state.complete_load(RecordStore::from_payload(&json!([{"name": "A"}, {"name": "B"}])));
        let view = render_view(&state);
        assert!(view.starts_with("A\n"));
        assert!(view.contains("\nB\n"));

        state.set_name_query("zzz");
        assert_eq!(render_view(&state), "No doctors found.\n");
    }

    #[test]
    fn test_catalog_marks_selection() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_specialty("ENT");
        let catalog = render_catalog(&criteria);
        assert_eq!(catalog.lines().count(), 18);
        assert!(catalog.contains("[x] ENT\n"));
        assert!(catalog.contains("[ ] Oncologist\n"));
    }
}
