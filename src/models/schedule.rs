use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One occurrence of a recurring course on a specific date
///
/// `days` always holds exactly one weekday name for entries created by the
/// planner; it stays a list for compatibility with stored documents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub instructor: String,
    /// Zero-padded `HH:MM`
    pub start_time: String,
    /// Zero-padded `HH:MM`
    pub end_time: String,
    pub days: Vec<String>,
    pub date: NaiveDate,
    pub week: u32,
    #[serde(default)]
    pub notice: String,
    pub term_id: String,
}

impl ScheduleEntry {
    /// The weekday this entry falls on, as stored
    pub fn day(&self) -> Option<&str> {
        self.days.first().map(String::as_str)
    }
}

/// A schedule entry that has not been stored yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduleEntry {
    pub name: String,
    pub instructor: String,
    pub start_time: String,
    pub end_time: String,
    pub days: Vec<String>,
    pub date: NaiveDate,
    pub week: u32,
    #[serde(default)]
    pub notice: String,
    pub term_id: String,
}

impl NewScheduleEntry {
    /// Assign a fresh document id
    pub fn into_entry(self) -> ScheduleEntry {
        ScheduleEntry {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            instructor: self.instructor,
            start_time: self.start_time,
            end_time: self.end_time,
            days: self.days,
            date: self.date,
            week: self.week,
            notice: self.notice,
            term_id: self.term_id,
        }
    }
}
