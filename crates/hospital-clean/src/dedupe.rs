//! First-wins deduplication of cleaned records.

use std::collections::BTreeSet;

use hospital_model::HospitalRecord;
use tracing::debug;

/// Records that survived deduplication plus how many were dropped.
#[derive(Debug, Clone, Default)]
pub struct DedupeOutcome {
    pub records: Vec<HospitalRecord>,
    pub dropped: usize,
}

/// Keeps the first record for each (lowercased name, contact) key.
///
/// Later records with the same key are dropped even when their city,
/// email, or specialties differ; nothing is merged.
pub fn dedupe_records(records: Vec<HospitalRecord>) -> DedupeOutcome {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(records.len());
    let mut dropped = 0usize;
    for record in records {
        if seen.insert(record.dedup_key()) {
            kept.push(record);
        } else {
            dropped += 1;
        }
    }
    debug!(kept = kept.len(), dropped, "deduplicated records");
    DedupeOutcome {
        records: kept,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, contact: &str, city: &str) -> HospitalRecord {
        HospitalRecord {
            hospital_name: name.to_string(),
            city: city.to_string(),
            district: "Y".to_string(),
            state: "Z".to_string(),
            contact: contact.to_string(),
            email: "a@b.com".to_string(),
            specialties: "Cardio".to_string(),
        }
    }

    #[test]
    fn test_first_record_wins() {
        let outcome = dedupe_records(vec![
            record("ABC Hospital", "9876543210", "X"),
            record("abc hospital", "9876543210", "W"),
        ]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].city, "X");
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn test_different_contacts_are_distinct() {
        let outcome = dedupe_records(vec![
            record("ABC Hospital", "9876543210", "X"),
            record("ABC Hospital", "9123456780", "X"),
        ]);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.dropped, 0);
    }

    #[test]
    fn test_placeholder_contacts_share_a_key() {
        let outcome = dedupe_records(vec![
            record("Abc Hospital", "Not Available", "X"),
            record("Abc Hospital", "Not Available", "W"),
        ]);
        assert_eq!(outcome.records.len(), 1);
    }
}
