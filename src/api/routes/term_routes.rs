use crate::api::handlers::term_handler::*;
use axum::{
    Router,
    routing::{get, post, put},
};

use crate::api::app_state::ScheduleState;

/// Term routes
pub fn create_term_router() -> Router<ScheduleState> {
    Router::new()
        .route("/terms", get(list_terms))
        .route("/terms", post(create_term))
        .route("/terms/:id", get(get_term))
        .route("/terms/:id", put(update_term))
}
