//! Previous/next week navigation
//!
//! Moves stay inside `[1, term_length]`; from the aggregated view both
//! directions land on week 1.

use super::view::WeekView;

pub fn next(view: WeekView, term_length: u32) -> WeekView {
    match view {
        WeekView::Default => WeekView::Week(1),
        WeekView::Week(week) => WeekView::Week(week.saturating_add(1).clamp(1, term_length.max(1))),
    }
}

pub fn prev(view: WeekView, term_length: u32) -> WeekView {
    match view {
        WeekView::Default => WeekView::Week(1),
        WeekView::Week(week) => WeekView::Week(week.saturating_sub(1).clamp(1, term_length.max(1))),
    }
}

pub fn can_go_prev(view: WeekView) -> bool {
    matches!(view, WeekView::Week(week) if week > 1)
}

pub fn can_go_next(view: WeekView, term_length: u32) -> bool {
    matches!(view, WeekView::Week(week) if week < term_length)
}
