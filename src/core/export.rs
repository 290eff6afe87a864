// DoctorDirectory - core/export.rs
//
// CSV and JSON export of the visible records.
// Core layer: writes to any Write trait object.

use crate::core::model::Record;
use crate::util::error::ExportError;
use std::io::Write;

/// Export records to CSV format.
///
/// Writes: id, name, specialties, consultation_type, experience, fees.
/// Specialties are joined with "; " so the column stays a single field.
pub fn export_csv<W: Write>(records: &[&Record], writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "name",
            "specialties",
            "consultation_type",
            "experience",
            "fees",
        ])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        let id = record.id.as_ref().map(|id| id.to_string()).unwrap_or_default();
        let specialties = record
            .specialties
            .as_ref()
            .map(|s| s.join("; "))
            .unwrap_or_default();
        let experience = record.experience.map(|v| v.to_string()).unwrap_or_default();
        let fees = record.fees.map(|v| v.to_string()).unwrap_or_default();

        csv_writer
            .write_record([
                id.as_str(),
                record.name.as_deref().unwrap_or(""),
                specialties.as_str(),
                record.consultation_type.as_deref().unwrap_or(""),
                experience.as_str(),
                fees.as_str(),
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}

/// Export records to JSON format (array of objects, source field names).
pub fn export_json<W: Write>(records: &[&Record], writer: W) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, records).map_err(|e| ExportError::Json { source: e })?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::RecordId;

    fn make_record(id: &str, name: &str) -> Record {
        Record {
            id: Some(RecordId::Text(id.to_string())),
            name: Some(name.to_string()),
            specialties: Some(vec!["ENT".to_string(), "Cardiologist".to_string()]),
            consultation_type: Some("In Clinic".to_string()),
            experience: Some(9.0),
            fees: Some(450.5),
        }
    }

    #[test]
    fn test_csv_export() {
        let a = make_record("a", "Dr. One");
        let b = make_record("b", "Dr. Two");
        let mut buf = Vec::new();
        let count = export_csv(&[&a, &b], &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("id,name,specialties,consultation_type,experience,fees")
        );
        assert_eq!(lines.next(), Some("a,Dr. One,ENT; Cardiologist,In Clinic,9,450.5"));
        assert!(output.contains("Dr. Two"));
    }

    #[test]
    fn test_csv_export_missing_fields_are_blank() {
        let record = Record::default();
        let mut buf = Vec::new();
        export_csv(&[&record], &mut buf).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert_eq!(output.lines().nth(1), Some(",,,,,"));
    }

    #[test]
    fn test_json_export() {
        let record = make_record("a", "Test Doctor");
        let mut buf = Vec::new();
        let count = export_json(&[&record], &mut buf).unwrap();
        assert_eq!(count, 1);

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "Test Doctor");
        assert_eq!(parsed[0]["consultationType"], "In Clinic");
    }
}
