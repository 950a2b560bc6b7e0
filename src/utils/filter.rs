//! Search filtering for the records table.
//!
//! Matching is a plain substring test: the code is compared as-is, while
//! name and description are compared case-insensitively.

use crate::api::Record;

/// Return whether the record matches the search term. An empty term matches
/// everything.
///
pub fn matches_search(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let lowered = term.to_lowercase();
    record.code.contains(term)
        || record.name.to_lowercase().contains(&lowered)
        || record.description.to_lowercase().contains(&lowered)
}

/// Return the records matching the term, keeping their relative order.
///
pub fn filter_records(records: &[Record], term: &str) -> Vec<Record> {
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches_search(record, term))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RecordId;
    use fake::{Fake, Faker};

    fn record(id: i64, code: &str, name: &str, description: &str) -> Record {
        Record {
            id: RecordId::Number(id),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(1, "101", "Widget", "Small blue part"),
            record(2, "202", "Gadget", "Large RED part"),
            record(3, "AB3", "Gizmo", "Widget holder"),
        ]
    }

    #[test]
    fn empty_term_returns_everything() {
        let records: Vec<Record> = (0..8).map(|_| Faker.fake()).collect();
        assert_eq!(filter_records(&records, ""), records);
    }

    #[test]
    fn name_match_is_case_insensitive() {
        let filtered = filter_records(&sample(), "gadget");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Number(2));
    }

    #[test]
    fn description_match_is_case_insensitive() {
        let filtered = filter_records(&sample(), "red");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, RecordId::Number(2));
    }

    #[test]
    fn code_match_is_case_sensitive() {
        assert_eq!(filter_records(&sample(), "AB").len(), 1);
        assert!(filter_records(&sample(), "ab3").is_empty());
    }

    #[test]
    fn code_substring_match() {
        let filtered = filter_records(&sample(), "0");
        let ids: Vec<RecordId> = filtered.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId::Number(1), RecordId::Number(2)]);
    }

    #[test]
    fn matches_keep_relative_order() {
        let filtered = filter_records(&sample(), "widget");
        let ids: Vec<RecordId> = filtered.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RecordId::Number(1), RecordId::Number(3)]);
    }

    #[test]
    fn filtered_is_subset_matching_term() {
        let records: Vec<Record> = (0..32).map(|_| Faker.fake()).collect();
        for term in ["a", "E", "1", "zz", "ip"] {
            let filtered = filter_records(&records, term);
            let expected: Vec<Record> = records
                .iter()
                .filter(|r| matches_search(r, term))
                .cloned()
                .collect();
            assert_eq!(filtered, expected);
            assert!(filtered.iter().all(|r| records.contains(r)));
        }
    }

    #[test]
    fn no_match_returns_empty() {
        assert!(filter_records(&sample(), "nothing like this").is_empty());
    }
}
