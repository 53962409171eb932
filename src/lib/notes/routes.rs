//! This module includes all routes used for managing notes.
use std::sync::{Arc, RwLock};

use crate::{
    notes::{
        request::{CreateNoteRequest, UpdateNoteRequest},
        Note, NoteError,
    },
    state::AppState,
};
use axum::{
    extract::Path,
    http::StatusCode,
    response::Html,
    routing::get,
    Extension, Json, Router,
};
use tracing::{debug, error, instrument, warn};

/// Builds the API router over the given state.
pub fn router(state: Arc<RwLock<AppState>>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/notes", get(list_notes).post(create_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .layer(Extension(state))
}

/// Greets whoever asks for the root path.
async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// Returns every note in the collection.
#[instrument(skip(state))]
async fn list_notes(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<Note>>, NoteError> {
    debug!("listing all notes");

    let state = state.read().map_err(|err| {
        error!("error acquiring the lock for app state: {:?}", err);
        NoteError::OperationFailed
    })?;

    Ok(Json(state.all().to_vec()))
}

/// Returns the note with the given id. A missing note answers with a bare
/// 404, without the JSON error body the update route uses.
#[instrument(skip(state))]
async fn get_note(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<Json<Note>, StatusCode> {
    debug!("fetching note {:?}", id);

    let state = state.read().map_err(|err| {
        error!("error acquiring the lock for app state: {:?}", err);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    match state.find(&id) {
        Some(note) => Ok(Json(note.clone())),
        None => {
            warn!("no note with id {:?}", id);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Appends a new note built from the request payload.
#[instrument(skip(state, payload))]
async fn create_note(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<Json<Note>, NoteError> {
    let content = match payload.content.as_deref() {
        Some(content) if !content.is_empty() => content.to_owned(),
        _ => {
            warn!("attempted to create a note without content");
            return Err(NoteError::MissingContent);
        }
    };

    let mut state = state.write().map_err(|err| {
        error!("error acquiring the lock for app state: {:?}", err);
        NoteError::OperationFailed
    })?;

    let note = state.create(content, payload.important_flag());

    debug!("created note {:?}", note.id);

    Ok(Json(note))
}

/// Merges the payload into the stored note and returns the result.
#[instrument(skip(state, payload))]
async fn update_note(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, NoteError> {
    debug!("updating note {:?}", id);

    let mut state = state.write().map_err(|err| {
        error!("error acquiring the lock for app state: {:?}", err);
        NoteError::OperationFailed
    })?;

    match state.update(&id, &payload) {
        Some(note) => Ok(Json(note)),
        None => {
            warn!("no note with id {:?}", id);
            Err(NoteError::NotFound)
        }
    }
}

/// Removes the note with the given id. Answers 204 whether or not the note
/// existed, so repeating a delete is harmless.
#[instrument(skip(state))]
async fn delete_note(
    Extension(state): Extension<Arc<RwLock<AppState>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, NoteError> {
    debug!("deleting note {:?}", id);

    let mut state = state.write().map_err(|err| {
        error!("error acquiring the lock for app state: {:?}", err);
        NoteError::OperationFailed
    })?;

    state.remove(&id);

    Ok(StatusCode::NO_CONTENT)
}
