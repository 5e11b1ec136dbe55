//! API 模块
//!
//! 课表/学期服务与两个追踪服务的路由，每个路由监听独立端口。

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use crate::api::app_state::{ScheduleState, TrackerState};
use crate::models::tracker::TrackedItem;
use crate::observability::health_check;
use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Open CORS plus request tracing, applied to every service
fn with_common_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(cors).layer(TraceLayer::new_for_http())
}

/// Schedule and term service
pub fn create_schedule_app(state: ScheduleState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .merge(routes::term_routes::create_term_router())
        .merge(routes::schedule_routes::create_schedule_router());

    with_common_layers(Router::new().nest("/api", api).with_state(state))
}

/// Tracker service for one item kind, with its own notice feed
pub fn create_tracker_app<T: TrackedItem>(state: TrackerState<T>) -> Router {
    let api = Router::new()
        .merge(routes::tracker_routes::create_tracker_router::<T>())
        .merge(routes::tracker_routes::create_notice_router::<T>());

    with_common_layers(Router::new().nest("/api", api).with_state(state))
}
