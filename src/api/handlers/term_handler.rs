use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::debug;

use crate::{
    api::{
        app_state::ScheduleState,
        dto::{CreateTermRequest, UpdateTermRequest, non_blank, parse_date, parse_positive_int},
    },
    error::AppError,
};

fn invalid_length() -> AppError {
    AppError::Validation("Invalid termLength (must be 1-52)".to_string())
}

pub async fn list_terms(State(state): State<ScheduleState>) -> Result<impl IntoResponse, AppError> {
    let terms = state.term_service.list().await?;
    Ok(Json(terms))
}

pub async fn get_term(
    State(state): State<ScheduleState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let term = state.term_service.get(&id).await?;
    Ok(Json(term))
}

pub async fn create_term(
    State(state): State<ScheduleState>,
    Json(request): Json<CreateTermRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Creating term: {:?}", request.name);

    let name = non_blank(request.name.as_deref());
    let start_date = request.start_date.as_deref().and_then(parse_date);
    let (Some(name), Some(start_date)) = (name, start_date) else {
        return Err(AppError::Validation(
            "Missing or invalid name or startDate".to_string(),
        ));
    };
    let term_length = request
        .term_length
        .as_ref()
        .and_then(parse_positive_int)
        .ok_or_else(invalid_length)?;

    let term = state
        .term_service
        .create(name, term_length, start_date)
        .await?;

    Ok((StatusCode::CREATED, Json(term)))
}

pub async fn update_term(
    State(state): State<ScheduleState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTermRequest>,
) -> Result<impl IntoResponse, AppError> {
    debug!("Updating term {}: {:?}", id, request.term_length);

    let term_length = request
        .term_length
        .as_ref()
        .and_then(parse_positive_int)
        .ok_or_else(invalid_length)?;

    let term = state.term_service.update_length(&id, term_length).await?;
    Ok(Json(term))
}
