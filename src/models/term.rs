use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Shortest term the store accepts, in weeks
pub const MIN_TERM_LENGTH: u32 = 1;
/// Longest term the store accepts, in weeks
pub const MAX_TERM_LENGTH: u32 = 52;

/// 学期
///
/// Week 1 starts on `start_date`. Only `term_length` may change after
/// creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Length in weeks, 1..=52
    pub term_length: u32,
    pub start_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Term {
    pub fn new(name: &str, term_length: u32, start_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            term_length,
            start_date,
            created_at: Utc::now(),
        }
    }

    /// Every week number of the term
    pub fn weeks(&self) -> RangeInclusive<u32> {
        1..=self.term_length
    }

    pub fn contains_week(&self, week: u32) -> bool {
        self.weeks().contains(&week)
    }
}

/// Whether a length is storable
pub fn is_valid_term_length(term_length: u32) -> bool {
    (MIN_TERM_LENGTH..=MAX_TERM_LENGTH).contains(&term_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_serializes_with_document_id() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let term = Term::new("Spring 2025", 15, start);
        let json = serde_json::to_value(&term).unwrap();

        assert_eq!(json["_id"], term.id.as_str());
        assert_eq!(json["termLength"], 15);
        assert_eq!(json["startDate"], "2025-01-06");
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_weeks() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let term = Term::new("Short", 3, start);
        assert_eq!(term.weeks().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(term.contains_week(3));
        assert!(!term.contains_week(0));
        assert!(!term.contains_week(4));
    }

    #[test]
    fn test_term_length_bounds() {
        assert!(!is_valid_term_length(0));
        assert!(is_valid_term_length(1));
        assert!(is_valid_term_length(52));
        assert!(!is_valid_term_length(53));
    }
}
