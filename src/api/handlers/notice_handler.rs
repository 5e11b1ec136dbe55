use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    api::{
        app_state::TrackerState,
        dto::{PostNoticeRequest, SuccessResponse, non_blank},
    },
    error::AppError,
    models::tracker::TrackedItem,
};

pub async fn list_notices<T: TrackedItem>(State(state): State<TrackerState<T>>) -> impl IntoResponse {
    Json(state.notices.list())
}

pub async fn post_notice<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
    Json(request): Json<PostNoticeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let message = non_blank(request.message.as_deref())
        .ok_or_else(|| AppError::Validation("Missing message".to_string()))?;

    state.notices.push(message);
    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())))
}

pub async fn clear_notices<T: TrackedItem>(State(state): State<TrackerState<T>>) -> impl IntoResponse {
    state.notices.clear();
    Json(SuccessResponse::ok())
}
