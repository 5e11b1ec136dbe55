use crate::api::handlers::{notice_handler::*, tracker_handler::*};
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::api::app_state::TrackerState;
use crate::models::tracker::TrackedItem;

/// Item routes under `/{collection}`
pub fn create_tracker_router<T: TrackedItem>() -> Router<TrackerState<T>> {
    let collection = format!("/{}", T::COLLECTION);
    let item = format!("/{}/:id", T::COLLECTION);

    Router::new()
        .route(&collection, get(list_items::<T>))
        .route(&collection, post(add_item::<T>))
        .route(&collection, delete(remove_done_items::<T>))
        .route(&item, delete(delete_item::<T>))
        .route(&item, patch(set_item_done::<T>))
}

/// In-memory notice feed routes
pub fn create_notice_router<T: TrackedItem>() -> Router<TrackerState<T>> {
    Router::new()
        .route("/notices", get(list_notices::<T>))
        .route("/notices", post(post_notice::<T>))
        .route("/notices", delete(clear_notices::<T>))
}
