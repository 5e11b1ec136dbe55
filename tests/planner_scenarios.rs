// Planner scenarios
//
// End-to-end walks through the pure planner state machine:
// - expanding a course over a whole term
// - re-running an expansion
// - shrinking a term under the selected week
// - week navigation bounds

use chrono::NaiveDate;
use term_planner::models::term::Term;
use term_planner::planner::view::{WEEK_RESET_WARNING, validate_view};
use term_planner::planner::{
    CourseDraft, PlannerState, WeekSelection, WeekView, expand_course, group_by_week,
};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn cs101() -> CourseDraft {
    CourseDraft {
        name: "CS101".into(),
        instructor: "Dr. Ada".into(),
        start_time: "09:00".into(),
        end_time: "10:00".into(),
        days: vec!["Monday".into(), "Wednesday".into()],
    }
}

#[test]
fn test_course_expands_over_whole_term() {
    let term = Term::new("Short", 3, monday());
    let entries = expand_course(&cs101(), Some(&term), WeekSelection::All, &Default::default())
        .unwrap();

    let dates: Vec<String> = entries.iter().map(|e| e.date.to_string()).collect();
    assert_eq!(
        dates,
        vec![
            "2025-01-06",
            "2025-01-08",
            "2025-01-13",
            "2025-01-15",
            "2025-01-20",
            "2025-01-22"
        ]
    );
    let weeks: Vec<u32> = entries.iter().map(|e| e.week).collect();
    assert_eq!(weeks, vec![1, 1, 2, 2, 3, 3]);
    assert!(entries.iter().all(|e| e.term_id == term.id && e.notice.is_empty()));
}

#[test]
fn test_second_expansion_adds_nothing() {
    let term = Term::new("Fall", 12, monday());
    let first = expand_course(&cs101(), Some(&term), WeekSelection::All, &Default::default())
        .unwrap();
    assert_eq!(first.len(), 24);

    let stored = group_by_week(first.into_iter().map(|e| e.into_entry()));
    let second = expand_course(&cs101(), Some(&term), WeekSelection::All, &stored).unwrap();
    assert!(second.is_empty());
}

#[test]
fn test_aggregate_view_orders_by_week_then_day() {
    let term = Term::new("Short", 2, monday());
    let entries = expand_course(&cs101(), Some(&term), WeekSelection::All, &Default::default())
        .unwrap()
        .into_iter()
        .rev()
        .map(|e| e.into_entry())
        .collect();

    let state = PlannerState::new()
        .set_terms(vec![term.clone()])
        .switch_term(Some(&term.id))
        .load_schedules(entries);

    let order: Vec<(u32, String)> = state
        .visible_entries()
        .iter()
        .map(|e| (e.week, e.days[0].clone()))
        .collect();
    assert_eq!(
        order,
        vec![
            (1, "Monday".to_string()),
            (1, "Wednesday".to_string()),
            (2, "Monday".to_string()),
            (2, "Wednesday".to_string()),
        ]
    );
}

#[test]
fn test_shrinking_term_from_ten_to_three_resets_view() {
    let term = Term::new("Fall", 10, monday());
    let state = PlannerState::new()
        .set_terms(vec![term.clone()])
        .switch_term(Some(&term.id));
    let (state, warning) = state.select_view(WeekView::Week(7));
    assert_eq!(warning, None);

    let (state, warning) = state.apply_term_length(3).unwrap();
    assert_eq!(state.term_length, 3);
    assert_eq!(state.view, WeekView::Default);
    assert_eq!(warning, Some(WEEK_RESET_WARNING));
    assert_eq!(state.week_options().len(), 4);
}

#[test]
fn test_stored_term_shrinking_underneath_the_page() {
    let mut term = Term::new("Fall", 10, monday());
    let state = PlannerState::new()
        .set_terms(vec![term.clone()])
        .switch_term(Some(&term.id));
    let (state, _) = state.select_view(WeekView::Week(7));

    term.term_length = 3;
    let (state, warning) = state.replace_terms(vec![term]);
    assert_eq!(state.term_length, 3);
    assert_eq!(state.view, WeekView::Default);
    assert_eq!(warning, Some(WEEK_RESET_WARNING));
    assert_eq!(validate_view(state.view, state.term_length), (WeekView::Default, None));
}

#[test]
fn test_navigation_stays_inside_term() {
    let term = Term::new("Short", 3, monday());
    let mut state = PlannerState::new()
        .set_terms(vec![term.clone()])
        .switch_term(Some(&term.id));

    for _ in 0..10 {
        state = state.next_week();
        assert!(matches!(state.view, WeekView::Week(1..=3)));
    }
    assert_eq!(state.view, WeekView::Week(3));
    assert!(!state.can_go_next());

    for _ in 0..10 {
        state = state.prev_week();
    }
    assert_eq!(state.view, WeekView::Week(1));
    assert!(!state.can_go_prev());
}
