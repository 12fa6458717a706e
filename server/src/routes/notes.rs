//! Note CRUD handlers. Every operation is scoped to the authenticated owner
//! resolved by [`AuthUser`]; a foreign note and a missing one are the same
//! 404 from out here.

use api::models::note::normalize_title;
use api::models::NoteInfo;
use api::{MessageResponse, NotePayload};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::extract::AuthUser;
use crate::state::AppState;

/// An id that isn't a UUID names no note the caller owns.
fn parse_note_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound)
}

/// GET /api/notes — the caller's notes, most recently updated first.
pub async fn list(
    AuthUser(owner): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<NoteInfo>>, ApiError> {
    let notes = state.notes.list(owner).await?;
    Ok(Json(notes.iter().map(|note| note.to_info()).collect()))
}

/// GET /api/notes/{id}
pub async fn get(
    AuthUser(owner): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NoteInfo>, ApiError> {
    let note = state.notes.get(owner, parse_note_id(&id)?).await?;
    Ok(Json(note.to_info()))
}

/// POST /api/notes
pub async fn create(
    AuthUser(owner): AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<NotePayload>,
) -> Result<(StatusCode, Json<NoteInfo>), ApiError> {
    let title = normalize_title(&payload.title);
    let note = state.notes.create(owner, &title, &payload.body).await?;
    Ok((StatusCode::CREATED, Json(note.to_info())))
}

/// PUT /api/notes/{id} — full replace of title and body.
pub async fn update(
    AuthUser(owner): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NotePayload>,
) -> Result<Json<NoteInfo>, ApiError> {
    let title = normalize_title(&payload.title);
    let note = state
        .notes
        .update(owner, parse_note_id(&id)?, &title, &payload.body)
        .await?;
    Ok(Json(note.to_info()))
}

/// DELETE /api/notes/{id}
pub async fn delete(
    AuthUser(owner): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.notes.delete(owner, parse_note_id(&id)?).await?;
    Ok(Json(MessageResponse {
        message: "Note deleted successfully".to_string(),
    }))
}
