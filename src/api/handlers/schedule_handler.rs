use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::ScheduleState,
        dto::{
            CreateScheduleRequest, DeletedResponse, ListSchedulesParams, UpdateNoticeRequest,
            UpdatedResponse, non_blank, parse_date, parse_positive_int,
        },
    },
    error::AppError,
    models::schedule::NewScheduleEntry,
};

pub async fn list_schedules(
    State(state): State<ScheduleState>,
    Query(params): Query<ListSchedulesParams>,
) -> Result<impl IntoResponse, AppError> {
    let term_id = non_blank(params.term_id.as_deref());
    debug!("Listing schedules for term {:?}", term_id);

    let entries = state.schedule_service.list(term_id).await?;
    Ok(Json(entries))
}

impl CreateScheduleRequest {
    /// Presence check of every required field
    fn into_entry(self) -> Option<NewScheduleEntry> {
        let required = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Some(NewScheduleEntry {
            date: self.date.as_deref().and_then(parse_date)?,
            week: self.week.as_ref().and_then(parse_positive_int)?,
            name: required(self.name)?,
            instructor: required(self.instructor)?,
            start_time: required(self.start_time)?,
            end_time: required(self.end_time)?,
            days: self.days?,
            notice: self.notice.unwrap_or_default(),
            term_id: required(self.term_id)?,
        })
    }
}

pub async fn create_schedule(
    State(state): State<ScheduleState>,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating schedule entry: {:?}", request.name);

    let entry = request
        .into_entry()
        .ok_or_else(|| AppError::Validation("Missing required fields".to_string()))?;
    let created = state.schedule_service.create(entry).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_schedule(
    State(state): State<ScheduleState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateNoticeRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating notice of schedule entry {}", id);

    let notice = request.notice.unwrap_or_default();
    let updated = state.schedule_service.update_notice(&id, &notice).await?;
    Ok(Json(UpdatedResponse { updated }))
}

pub async fn delete_schedule(
    State(state): State<ScheduleState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Deleting schedule entry {}", id);

    let deleted = state.schedule_service.delete(&id).await?;
    Ok(Json(DeletedResponse { deleted }))
}
