use super::AppState;
use super::error::{ApiError, ApiResult};
use super::extractors::NoteId;
use super::types::{CreateNoteRequest, NoteEnvelope, UpdateDescriptionRequest};
use crate::Note;
use crate::app::NoteService;
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
};
use log::{debug, error};
use std::sync::Arc;

/// Runs a service call on the blocking pool; backends do synchronous I/O
async fn run_blocking<T, F>(state: &AppState, op: F) -> ApiResult<T>
where
    F: FnOnce(&NoteService) -> crate::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || op(service.as_ref()))
        .await
        .map_err(|e| {
            error!("Note service task failed: {e}");
            ApiError::internal()
        })?
        .map_err(ApiError::from)
}

/// GET /notes
pub async fn list_notes(State(state): State<AppState>) -> ApiResult<Json<Vec<Note>>> {
    let notes = run_blocking(&state, NoteService::list_notes).await?;
    Ok(Json(notes))
}

/// GET /notes/:id
pub async fn get_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> ApiResult<Json<NoteEnvelope>> {
    let note = run_blocking(&state, move |service| service.get_note(id)).await?;
    Ok(Json(NoteEnvelope::successful(note)))
}

/// POST /notes
///
/// The body is read raw so that an empty body, a body that does not decode,
/// and a decoded body with an empty description each get their own message.
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<NoteEnvelope>)> {
    let body = match body {
        Ok(body) if !body.is_empty() => body,
        Ok(_) => return Err(ApiError::empty_body()),
        Err(e) => {
            debug!("Failed reading create body: {e}");
            return Err(ApiError::empty_body());
        }
    };

    let request: CreateNoteRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected create body: {e}");
        ApiError::malformed_body()
    })?;

    let description = request.description.unwrap_or_default();
    let completed = request.completed.unwrap_or(false);
    let note = run_blocking(&state, move |service| {
        service.create_note(description, completed)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(NoteEnvelope::created(note))))
}

/// PATCH /notes/completed/:id
pub async fn toggle_completed(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> ApiResult<Json<NoteEnvelope>> {
    let note = run_blocking(&state, move |service| service.toggle_completed(id)).await?;
    Ok(Json(NoteEnvelope::successful(note)))
}

/// PATCH /notes/description/:id
pub async fn update_description(
    State(state): State<AppState>,
    NoteId(id): NoteId,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<NoteEnvelope>> {
    // Every way of not supplying a description is the same client error here
    let body = body.map_err(|e| {
        debug!("Failed reading update body: {e}");
        ApiError::missing_field()
    })?;
    let request: UpdateDescriptionRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected update body: {e}");
        ApiError::missing_field()
    })?;
    let description = request.description.ok_or_else(ApiError::missing_field)?;

    let note = run_blocking(&state, move |service| {
        service.update_description(id, description)
    })
    .await?;
    Ok(Json(NoteEnvelope::successful(note)))
}

/// DELETE /notes/delete/:id
pub async fn delete_note(
    State(state): State<AppState>,
    NoteId(id): NoteId,
) -> ApiResult<Json<NoteEnvelope>> {
    let note = run_blocking(&state, move |service| service.delete_note(id)).await?;
    Ok(Json(NoteEnvelope::deleted(note)))
}

pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
