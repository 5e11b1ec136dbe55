use crate::api::handlers::schedule_handler::*;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::api::app_state::ScheduleState;

/// Schedule entry routes
pub fn create_schedule_router() -> Router<ScheduleState> {
    Router::new()
        .route("/schedules", get(list_schedules))
        .route("/schedules", post(create_schedule))
        .route("/schedules/:id", put(update_schedule))
        .route("/schedules/:id", delete(delete_schedule))
}
