//! Week views and display ordering

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::dates::{parse_weekday, weekday_index};
use super::error::PlannerError;
use crate::models::schedule::ScheduleEntry;

/// Entries of one term grouped by week, in load order within a week
pub type CoursesByWeek = BTreeMap<u32, Vec<ScheduleEntry>>;

/// Shown when the selected week no longer exists
pub const WEEK_RESET_WARNING: &str =
    "Previously selected week is no longer available. Reset to default.";

/// Group loaded entries by their week number
pub fn group_by_week(entries: impl IntoIterator<Item = ScheduleEntry>) -> CoursesByWeek {
    let mut grouped = CoursesByWeek::new();
    for entry in entries {
        grouped.entry(entry.week).or_default().push(entry);
    }
    grouped
}

/// What the schedule table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekView {
    /// Every week, aggregated
    #[default]
    Default,
    Week(u32),
}

impl WeekView {
    pub fn week(&self) -> Option<u32> {
        match self {
            WeekView::Default => None,
            WeekView::Week(week) => Some(*week),
        }
    }
}

impl fmt::Display for WeekView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekView::Default => f.write_str("default"),
            WeekView::Week(week) => write!(f, "{}", week),
        }
    }
}

impl FromStr for WeekView {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("default") {
            return Ok(WeekView::Default);
        }
        match s.parse::<u32>() {
            Ok(week) if week > 0 => Ok(WeekView::Week(week)),
            _ => Err(PlannerError::validation(format!("Invalid week: {}", s))),
        }
    }
}

/// Sort rank of an entry's weekday; unknown names sort last
fn day_rank(entry: &ScheduleEntry) -> u32 {
    entry
        .day()
        .and_then(parse_weekday)
        .map(weekday_index)
        .unwrap_or(99)
}

fn by_day_then_time(a: &ScheduleEntry, b: &ScheduleEntry) -> Ordering {
    day_rank(a)
        .cmp(&day_rank(b))
        .then_with(|| a.start_time.cmp(&b.start_time))
}

/// Entries to render for `view`, in display order
pub fn ordered_entries(courses: &CoursesByWeek, view: WeekView) -> Vec<&ScheduleEntry> {
    let mut entries: Vec<&ScheduleEntry> = match view {
        WeekView::Week(week) => courses
            .get(&week)
            .map(|entries| entries.iter().collect())
            .unwrap_or_default(),
        WeekView::Default => courses.values().flatten().collect(),
    };

    // sort_by is stable: ties keep load order
    match view {
        WeekView::Week(_) => entries.sort_by(|a, b| by_day_then_time(a, b)),
        WeekView::Default => {
            entries.sort_by(|a, b| a.week.cmp(&b.week).then_with(|| by_day_then_time(a, b)))
        }
    }
    entries
}

/// Check the view against the term length, falling back to `Default`
pub fn validate_view(view: WeekView, term_length: u32) -> (WeekView, Option<&'static str>) {
    match view {
        WeekView::Week(week) if week == 0 || week > term_length => {
            (WeekView::Default, Some(WEEK_RESET_WARNING))
        }
        other => (other, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn entry(id: &str, week: u32, day: &str, start_time: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: id.into(),
            name: "Course".into(),
            instructor: "Staff".into(),
            start_time: start_time.into(),
            end_time: "23:59".into(),
            days: vec![day.into()],
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            week,
            notice: String::new(),
            term_id: "t1".into(),
        }
    }

    fn ids(entries: &[&ScheduleEntry]) -> Vec<String> {
        entries.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_single_week_orders_sunday_first_then_time() {
        let courses = group_by_week(vec![
            entry("fri", 1, "Friday", "08:00"),
            entry("mon-late", 1, "Monday", "14:00"),
            entry("sun", 1, "Sunday", "18:00"),
            entry("mon-early", 1, "Monday", "09:00"),
            entry("other-week", 2, "Monday", "07:00"),
        ]);

        let ordered = ordered_entries(&courses, WeekView::Week(1));
        assert_eq!(ids(&ordered), vec!["sun", "mon-early", "mon-late", "fri"]);
    }

    #[test]
    fn test_unknown_day_sorts_last_and_ties_keep_order() {
        let courses = group_by_week(vec![
            entry("odd", 1, "Someday", "07:00"),
            entry("a", 1, "Tuesday", "09:00"),
            entry("b", 1, "Tuesday", "09:00"),
        ]);

        let ordered = ordered_entries(&courses, WeekView::Week(1));
        assert_eq!(ids(&ordered), vec!["a", "b", "odd"]);
    }

    #[test]
    fn test_aggregate_orders_by_week_first() {
        let courses = group_by_week(vec![
            entry("w2-mon", 2, "Monday", "09:00"),
            entry("w10-sun", 10, "Sunday", "09:00"),
            entry("w1-sat", 1, "Saturday", "09:00"),
            entry("w2-sun", 2, "Sunday", "10:00"),
        ]);

        let ordered = ordered_entries(&courses, WeekView::Default);
        assert_eq!(ids(&ordered), vec!["w1-sat", "w2-sun", "w2-mon", "w10-sun"]);
    }

    #[test]
    fn test_missing_week_is_empty() {
        let courses = group_by_week(vec![entry("a", 1, "Monday", "09:00")]);
        assert!(ordered_entries(&courses, WeekView::Week(4)).is_empty());
    }

    #[rstest]
    #[case(WeekView::Week(7), 3, WeekView::Default, true)]
    #[case(WeekView::Week(3), 3, WeekView::Week(3), false)]
    #[case(WeekView::Default, 3, WeekView::Default, false)]
    #[case(WeekView::Week(0), 3, WeekView::Default, true)]
    fn test_validate_view(
        #[case] view: WeekView,
        #[case] term_length: u32,
        #[case] expected: WeekView,
        #[case] warned: bool,
    ) {
        let (result, warning) = validate_view(view, term_length);
        assert_eq!(result, expected);
        assert_eq!(warning.is_some(), warned);
    }

    #[test]
    fn test_view_parse_and_display() {
        assert_eq!("default".parse::<WeekView>().unwrap(), WeekView::Default);
        assert_eq!("7".parse::<WeekView>().unwrap(), WeekView::Week(7));
        assert!("0".parse::<WeekView>().is_err());
        assert!("week".parse::<WeekView>().is_err());
        assert_eq!(WeekView::Week(12).to_string(), "12");
        assert_eq!(WeekView::Default.to_string(), "default");
    }
}
