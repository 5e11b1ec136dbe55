//! Course expansion
//!
//! Turns one course definition into a schedule entry per (week, weekday)
//! pair, skipping pairs already present in the loaded schedule.

use chrono::Weekday;

use super::dates::{date_for_weekday, parse_weekday, weekday_name};
use super::error::{PlannerError, Result};
use super::view::CoursesByWeek;
use crate::models::schedule::NewScheduleEntry;
use crate::models::term::Term;

/// Weeks a course is added to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekSelection {
    /// Every week of the term
    All,
    Week(u32),
}

/// Course form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraft {
    pub name: String,
    pub instructor: String,
    pub start_time: String,
    pub end_time: String,
    /// Weekday names in the order they were ticked
    pub days: Vec<String>,
}

struct ValidCourse<'a> {
    name: &'a str,
    instructor: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    days: Vec<Weekday>,
}

fn validate(draft: &CourseDraft) -> Result<ValidCourse<'_>> {
    let name = draft.name.trim();
    let instructor = draft.instructor.trim();
    let start_time = draft.start_time.trim();
    let end_time = draft.end_time.trim();
    if [name, instructor, start_time, end_time]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(PlannerError::validation("Please fill in all fields."));
    }
    if draft.days.is_empty() {
        return Err(PlannerError::validation("Please select at least one day."));
    }

    let mut days = Vec::with_capacity(draft.days.len());
    for raw in &draft.days {
        let day = parse_weekday(raw)
            .ok_or_else(|| PlannerError::validation(format!("Unknown day: {}", raw)))?;
        if !days.contains(&day) {
            days.push(day);
        }
    }

    Ok(ValidCourse {
        name,
        instructor,
        start_time,
        end_time,
        days,
    })
}

fn already_scheduled(existing: &CoursesByWeek, course: &ValidCourse<'_>, week: u32, day: &str) -> bool {
    existing.get(&week).is_some_and(|entries| {
        entries.iter().any(|entry| {
            entry.name == course.name
                && entry.instructor == course.instructor
                && entry.start_time == course.start_time
                && entry.end_time == course.end_time
                && entry.week == week
                && entry.day() == Some(day)
        })
    })
}

/// New entries for `draft` in the selected weeks of `term`
///
/// Weeks are the outer loop and weekdays the inner one. Pairs matching an
/// entry in `existing` on (name, instructor, times, week, weekday) are
/// skipped, so repeating an expansion yields nothing.
pub fn expand_course(
    draft: &CourseDraft,
    term: Option<&Term>,
    selection: WeekSelection,
    existing: &CoursesByWeek,
) -> Result<Vec<NewScheduleEntry>> {
    let course = validate(draft)?;
    let term = term.ok_or_else(|| PlannerError::validation("Please select a term first."))?;

    let weeks: Vec<u32> = match selection {
        WeekSelection::All => term.weeks().collect(),
        WeekSelection::Week(week) if term.contains_week(week) => vec![week],
        WeekSelection::Week(week) => {
            return Err(PlannerError::validation(format!(
                "Week {} is outside this term (1-{})",
                week, term.term_length
            )));
        }
    };

    let mut entries = Vec::new();
    for week in weeks {
        for &day in &course.days {
            let day_name = weekday_name(day);
            if already_scheduled(existing, &course, week, day_name) {
                continue;
            }
            entries.push(NewScheduleEntry {
                name: course.name.to_string(),
                instructor: course.instructor.to_string(),
                start_time: course.start_time.to_string(),
                end_time: course.end_time.to_string(),
                days: vec![day_name.to_string()],
                date: date_for_weekday(term.start_date, week, day)?,
                week,
                notice: String::new(),
                term_id: term.id.clone(),
            });
        }
    }
    Ok(entries)
}
