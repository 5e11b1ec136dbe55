//! 追踪处理器
//!
//! 对条目类型泛型；作业与考试路由分别以 `Assignment` 和 `Exam` 实例化。

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::TrackerState,
        dto::{RemovedResponse, SetDoneRequest, SuccessResponse},
    },
    error::AppError,
    models::tracker::TrackedItem,
};

pub async fn list_items<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
) -> Result<impl IntoResponse, AppError> {
    let items = state.service.list().await?;
    Ok(Json(items))
}

pub async fn add_item<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
    Json(draft): Json<T::Draft>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Adding {} item", T::COLLECTION);

    let item = state.service.add(draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn delete_item<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting {} item {}", T::COLLECTION, id);

    state.service.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

pub async fn set_item_done<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
    Path(id): Path<String>,
    Json(request): Json<SetDoneRequest>,
) -> Result<impl IntoResponse, AppError> {
    let done = request.done.unwrap_or(false);
    debug!("Marking {} item {} done={}", T::COLLECTION, id, done);

    let item = state.service.set_done(&id, done).await?;
    Ok(Json(item))
}

pub async fn remove_done_items<T: TrackedItem>(
    State(state): State<TrackerState<T>>,
) -> Result<impl IntoResponse, AppError> {
    let removed = state.service.remove_done().await?;
    Ok(Json(RemovedResponse { removed }))
}
