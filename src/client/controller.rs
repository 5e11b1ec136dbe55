//! Schedule page controller
//!
//! Drives `PlannerState` from user actions, talking to the schedule service
//! through `ScheduleApi`. Failures never abort the page: they are logged and
//! shown as a transient error banner, and the state is reloaded from the
//! service wherever a partial write may have happened.

use chrono::NaiveDate;
use futures_util::future::join_all;
use std::time::Duration;
use tracing::{info, warn};

use super::api::ScheduleApi;
use super::banner::{Banner, Banners};
use crate::config::config::PlannerConfig;
use crate::models::term::{Term, is_valid_term_length};
use crate::planner::debounce::Debouncer;
use crate::planner::error::{PlannerError, Result};
use crate::planner::expansion::{CourseDraft, WeekSelection, expand_course};
use crate::planner::retry::{VisibilityPolicy, wait_for_visibility};
use crate::planner::state::{PlannerState, term_length_error};
use crate::planner::view::WeekView;

/// Banner shown when a freshly created term never shows up in the list
pub const TERM_NOT_SELECTED: &str = "Term created but could not select it. Please reload.";

/// Quiet period before an edited notice is saved
pub const NOTICE_DEBOUNCE: Duration = Duration::from_millis(1000);

pub struct ScheduleController<A: ScheduleApi> {
    api: A,
    state: PlannerState,
    banners: Banners,
    visibility: VisibilityPolicy,
    notice_delay: Duration,
}

impl<A: ScheduleApi> ScheduleController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: PlannerState::new(),
            banners: Banners::default(),
            visibility: VisibilityPolicy::default(),
            notice_delay: NOTICE_DEBOUNCE,
        }
    }

    /// Controller with polling and debounce timings from the planner config
    pub fn from_config(api: A, config: &PlannerConfig) -> Self {
        Self {
            visibility: VisibilityPolicy::from(config),
            notice_delay: config.notice_debounce(),
            ..Self::new(api)
        }
    }

    /// A fresh debouncer for one notice field
    pub fn notice_debouncer(&self) -> Debouncer {
        Debouncer::new(self.notice_delay)
    }

    pub fn with_visibility(mut self, visibility: VisibilityPolicy) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn state(&self) -> &PlannerState {
        &self.state
    }

    pub fn banners(&mut self) -> &mut Banners {
        &mut self.banners
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    fn update(&mut self, transition: impl FnOnce(PlannerState) -> PlannerState) {
        self.state = transition(std::mem::take(&mut self.state));
    }

    fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.banners.push(Banner::error(message));
    }

    fn show_success(&mut self, message: impl Into<String>) {
        self.banners.push(Banner::success(message));
    }

    /// Load terms and select the first one, if any
    pub async fn init(&mut self) -> Result<()> {
        if let Err(e) = self.load_terms().await {
            self.show_error(format!("Failed to initialize app: {}", e));
            return Err(e);
        }
        let first = self.state.terms.first().map(|t| t.id.clone());
        self.switch_term(first.as_deref()).await
    }

    /// Reload the term list; returns the reset warning when the selected
    /// week no longer fits the selected term
    pub async fn load_terms(&mut self) -> Result<Option<&'static str>> {
        let terms = self.api.list_terms().await?;
        let (state, warning) = std::mem::take(&mut self.state).replace_terms(terms);
        self.state = state;
        Ok(warning)
    }

    /// Select a term (or none), reloading terms and its schedule
    pub async fn switch_term(&mut self, term_id: Option<&str>) -> Result<()> {
        let Some(term_id) = term_id else {
            self.update(|state| state.switch_term(None));
            return Ok(());
        };

        if let Err(e) = self.load_terms().await {
            self.show_error("Failed to load term schedules");
            return Err(e);
        }
        self.update(|state| state.switch_term(Some(term_id)));
        self.load_schedules().await
    }

    /// Rebuild the week cache; on failure the cache is emptied
    pub async fn load_schedules(&mut self) -> Result<()> {
        let Some(term_id) = self.state.current_term_id.clone() else {
            self.update(|state| state.load_schedules(Vec::new()));
            return Ok(());
        };

        match self.api.list_schedules(&term_id).await {
            Ok(entries) => {
                self.update(|state| state.load_schedules(entries));
                Ok(())
            }
            Err(e) => {
                self.update(|state| state.load_schedules(Vec::new()));
                self.show_error(format!("Operation failed: {}", e));
                Err(e)
            }
        }
    }

    /// Create a term and select it once the service lists it
    ///
    /// If the term never becomes visible, the last listed term is selected
    /// instead and an error banner asks for a reload.
    pub async fn create_term(&mut self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term> {
        let name = name.trim();
        let invalid = if name.is_empty() {
            Some(PlannerError::validation("Please fill in all fields"))
        } else if !is_valid_term_length(term_length) {
            Some(term_length_error())
        } else {
            None
        };
        if let Some(err) = invalid {
            self.show_error(err.to_string());
            return Err(err);
        }

        let created = match self.api.create_term(name, term_length, start_date).await {
            Ok(term) => term,
            Err(e) => {
                self.show_error(format!("Failed to create new term: {}", e));
                return Err(e);
            }
        };
        info!("Created term {} ({})", created.name, created.id);

        let api = &self.api;
        let id = created.id.as_str();
        let visible = wait_for_visibility(self.visibility, || async move {
            api.list_terms()
                .await
                .ok()
                .filter(|terms| terms.iter().any(|t| t.id == id))
        })
        .await;

        match visible {
            Some(terms) => {
                self.update(|state| state.set_terms(terms));
                self.switch_term(Some(created.id.as_str())).await?;
                self.show_success("New term created successfully");
            }
            None => {
                warn!("Term {} not visible after creation", created.id);
                self.load_terms().await?;
                let last = self.state.terms.last().map(|t| t.id.clone());
                if let Some(last) = last {
                    self.switch_term(Some(last.as_str())).await?;
                }
                self.show_error(TERM_NOT_SELECTED);
            }
        }
        Ok(created)
    }

    /// Edit the current term's length; returns the week reset warning, if
    /// the selected week no longer exists
    pub async fn change_term_length(&mut self, term_length: u32) -> Result<Option<&'static str>> {
        let Some(term_id) = self.state.current_term_id.clone() else {
            let err = PlannerError::validation("Please select a term first.");
            self.show_error(err.to_string());
            return Err(err);
        };
        // validate before touching the service
        if let Err(e) = self.state.clone().apply_term_length(term_length) {
            self.show_error(e.to_string());
            return Err(e);
        }

        if let Err(e) = self.api.update_term_length(&term_id, term_length).await {
            self.show_error("Failed to update term length.");
            return Err(e);
        }
        let reloaded = match self.load_terms().await {
            Ok(warning) => warning,
            Err(e) => {
                self.show_error("Failed to update term length.");
                return Err(e);
            }
        };

        // the listing may lag behind the write
        let (state, applied) = self.state.clone().apply_term_length(term_length)?;
        self.state = state;
        let warning = reloaded.or(applied);
        if let Some(warning) = warning {
            self.show_error(warning);
        }
        self.show_success("Term length updated successfully");
        Ok(warning)
    }

    /// Pick a view from the week dropdown
    pub fn select_week(&mut self, view: WeekView) {
        let (state, warning) = std::mem::take(&mut self.state).select_view(view);
        self.state = state;
        if let Some(warning) = warning {
            self.show_error(warning);
        }
    }

    pub fn next_week(&mut self) {
        self.update(PlannerState::next_week);
    }

    pub fn prev_week(&mut self) {
        self.update(PlannerState::prev_week);
    }

    /// Add a course to the selected week, or to every week in the default
    /// view; returns how many entries were created
    pub async fn add_course(&mut self, draft: &CourseDraft) -> Result<usize> {
        let selection = match self.state.view {
            WeekView::Default => WeekSelection::All,
            WeekView::Week(week) => WeekSelection::Week(week),
        };

        // field checks first, against whatever is cached
        if let Err(e) = expand_course(
            draft,
            self.state.current_term(),
            selection,
            &self.state.courses_by_week,
        ) {
            self.show_error(e.to_string());
            return Err(e);
        }

        self.load_schedules().await?;
        let entries = expand_course(
            draft,
            self.state.current_term(),
            selection,
            &self.state.courses_by_week,
        )?;

        let results = join_all(entries.iter().map(|entry| self.api.create_schedule(entry))).await;
        let created = results.iter().filter(|r| r.is_ok()).count();
        let failure = results.into_iter().find_map(|r| r.err());

        // always reconcile with the store, even after a partial failure
        let reloaded = self.load_schedules().await;

        if let Some(e) = failure {
            self.show_error(format!("Operation failed: {}", e));
            return Err(e);
        }
        reloaded?;
        self.show_success("Course(s) added successfully");
        Ok(created)
    }

    /// Remove the course shown in row `index` of the table
    pub async fn remove_course(&mut self, index: usize) -> Result<()> {
        let Some(id) = self.state.entry_at(index).map(|e| e.id.clone()) else {
            let err = PlannerError::validation("Invalid course selection");
            self.show_error(err.to_string());
            return Err(err);
        };

        if let Err(e) = self.api.delete_schedule(&id).await {
            self.show_error(format!("Operation failed: {}", e));
            return Err(e);
        }
        self.show_success("Course removed successfully");
        self.load_schedules().await
    }

    /// Save a notice right away
    pub async fn save_notice(&mut self, id: &str, notice: &str) -> Result<()> {
        let notice = notice.trim();
        if let Err(e) = self.api.update_notice(id, notice).await {
            self.show_error(format!("Operation failed: {}", e));
            return Err(e);
        }
        self.update(|state| state.notice_updated(id, notice));
        Ok(())
    }

    /// Clear every notice of the selected week, returning how many were
    /// cleared
    ///
    /// Failed saves are reported in a banner but do not fail the call; only
    /// entries the service confirmed are cleared in the cache.
    pub async fn clear_week_notices(&mut self) -> Result<usize> {
        let ids = self
            .state
            .week_entries_for_clear()
            .map(|entries| entries.iter().map(|e| e.id.clone()).collect::<Vec<_>>());
        let ids = match ids {
            Ok(ids) => ids,
            Err(e) => {
                self.show_error(e.to_string());
                return Err(e);
            }
        };

        let results = join_all(ids.iter().map(|id| self.api.update_notice(id, ""))).await;

        let mut cleared = Vec::new();
        let mut failure = None;
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(_) => cleared.push(id.as_str()),
                Err(e) => failure = Some(e),
            }
        }

        self.update(|state| {
            cleared
                .iter()
                .fold(state, |state, id| state.notice_updated(id, ""))
        });
        match failure {
            Some(e) => self.show_error(format!("Operation failed: {}", e)),
            None => self.show_success("All notices cleared successfully"),
        }
        Ok(cleared.len())
    }
}

impl<A: ScheduleApi + Clone + 'static> ScheduleController<A> {
    /// Queue a debounced notice save; the cached entry is patched at once
    pub fn schedule_notice_save(&mut self, debouncer: &mut Debouncer, id: &str, notice: &str) {
        let notice = notice.trim().to_string();
        self.update(|state| state.notice_updated(id, &notice));

        let api = self.api.clone();
        let id = id.to_string();
        debouncer.schedule(move || async move {
            if let Err(e) = api.update_notice(&id, &notice).await {
                warn!("Failed to save notice for {}: {}", id, e);
            }
        });
    }
}
