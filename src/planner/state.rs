//! Planner page state
//!
//! A plain value threaded through pure transitions: every method consumes
//! the state and returns the next one, so UI flows are testable without a
//! server or a DOM.

use super::error::{PlannerError, Result};
use super::navigation;
use super::view::{CoursesByWeek, WeekView, group_by_week, ordered_entries, validate_view};
use crate::models::schedule::ScheduleEntry;
use crate::models::term::{MAX_TERM_LENGTH, MIN_TERM_LENGTH, Term, is_valid_term_length};

/// Week count used while no term is selected, and the new-term form default
pub const DEFAULT_TERM_LENGTH: u32 = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct PlannerState {
    pub terms: Vec<Term>,
    pub current_term_id: Option<String>,
    pub term_length: u32,
    pub view: WeekView,
    pub courses_by_week: CoursesByWeek,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self {
            terms: Vec::new(),
            current_term_id: None,
            term_length: DEFAULT_TERM_LENGTH,
            view: WeekView::Default,
            courses_by_week: CoursesByWeek::new(),
        }
    }
}

/// Rejection for lengths outside what a term can store
pub fn term_length_error() -> PlannerError {
    PlannerError::validation(format!(
        "Please enter a term length between {} and {} weeks.",
        MIN_TERM_LENGTH, MAX_TERM_LENGTH
    ))
}

impl PlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected term, if it is still in the term list
    pub fn current_term(&self) -> Option<&Term> {
        let id = self.current_term_id.as_deref()?;
        self.terms.iter().find(|t| t.id == id)
    }

    /// Length used for dropdowns and navigation bounds
    fn effective_length(&self) -> u32 {
        self.current_term()
            .map(|t| t.term_length)
            .unwrap_or(self.term_length)
    }

    /// Replace the term list, keeping the selection's length in sync
    ///
    /// A selected week beyond the refreshed length falls back to `Default`;
    /// use `replace_terms` to get the warning as well.
    pub fn set_terms(self, terms: Vec<Term>) -> Self {
        self.replace_terms(terms).0
    }

    /// Replace the term list and re-check the selected week against the
    /// selection's length
    pub fn replace_terms(mut self, terms: Vec<Term>) -> (Self, Option<&'static str>) {
        self.terms = terms;
        let Some(length) = self.current_term().map(|t| t.term_length) else {
            return (self, None);
        };
        self.term_length = length;
        let (view, warning) = validate_view(self.view, length);
        self.view = view;
        (self, warning)
    }

    /// Select a term, or clear the selection with `None`
    ///
    /// The view always resets to `Default` and the schedule cache is
    /// dropped until the term's entries are loaded. Unknown ids leave the
    /// state untouched.
    pub fn switch_term(mut self, term_id: Option<&str>) -> Self {
        match term_id {
            None => Self {
                terms: self.terms,
                ..Self::default()
            },
            Some(id) => {
                let Some(length) = self
                    .terms
                    .iter()
                    .find(|t| t.id == id)
                    .map(|t| t.term_length)
                else {
                    return self;
                };
                self.current_term_id = Some(id.to_string());
                self.term_length = length;
                self.view = WeekView::Default;
                self.courses_by_week.clear();
                self
            }
        }
    }

    /// Rebuild the week cache from freshly loaded entries
    pub fn load_schedules(mut self, entries: Vec<ScheduleEntry>) -> Self {
        self.courses_by_week = group_by_week(entries);
        self
    }

    /// Apply an edited term length, returning the reset warning if the
    /// selected week fell off the end
    pub fn apply_term_length(mut self, term_length: u32) -> Result<(Self, Option<&'static str>)> {
        let Some(current) = self.current_term_id.clone() else {
            return Err(PlannerError::validation("Please select a term first."));
        };
        if !is_valid_term_length(term_length) {
            return Err(term_length_error());
        }

        self.term_length = term_length;
        if let Some(term) = self.terms.iter_mut().find(|t| t.id == current) {
            term.term_length = term_length;
        }
        let (view, warning) = validate_view(self.view, term_length);
        self.view = view;
        Ok((self, warning))
    }

    /// Select a view from the week dropdown
    pub fn select_view(mut self, view: WeekView) -> (Self, Option<&'static str>) {
        let (view, warning) = validate_view(view, self.effective_length());
        self.view = view;
        (self, warning)
    }

    pub fn next_week(mut self) -> Self {
        self.view = navigation::next(self.view, self.effective_length());
        self
    }

    pub fn prev_week(mut self) -> Self {
        self.view = navigation::prev(self.view, self.effective_length());
        self
    }

    pub fn can_go_prev(&self) -> bool {
        navigation::can_go_prev(self.view)
    }

    pub fn can_go_next(&self) -> bool {
        navigation::can_go_next(self.view, self.effective_length())
    }

    /// Entries shown for the current view, in display order
    pub fn visible_entries(&self) -> Vec<&ScheduleEntry> {
        ordered_entries(&self.courses_by_week, self.view)
    }

    /// Row `index` of the visible table
    pub fn entry_at(&self, index: usize) -> Option<&ScheduleEntry> {
        self.visible_entries().get(index).copied()
    }

    /// Week dropdown contents: `Default` followed by every week
    pub fn week_options(&self) -> Vec<WeekView> {
        std::iter::once(WeekView::Default)
            .chain((1..=self.effective_length()).map(WeekView::Week))
            .collect()
    }

    /// Patch a cached entry after its notice was saved
    pub fn notice_updated(mut self, id: &str, notice: &str) -> Self {
        if let Some(entry) = self
            .courses_by_week
            .values_mut()
            .flatten()
            .find(|e| e.id == id)
        {
            entry.notice = notice.to_string();
        }
        self
    }

    /// Entries whose notices a bulk clear touches; only a single week can be
    /// cleared at once
    pub fn week_entries_for_clear(&self) -> Result<Vec<&ScheduleEntry>> {
        match self.view {
            WeekView::Week(week) => match self.courses_by_week.get(&week) {
                Some(entries) if !entries.is_empty() => Ok(entries.iter().collect()),
                _ => Err(PlannerError::validation("No courses found for this week")),
            },
            WeekView::Default => Err(PlannerError::validation("No courses found for this week")),
        }
    }
}
