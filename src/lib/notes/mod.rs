//! Module containing everything pertaining to notes.
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub mod request;
pub mod routes;

/// A single note record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Unique within the collection, assigned by the server on create.
    pub id: String,
    pub content: String,
    pub important: bool,
}

/// An error type for all failures that may happen while handling a note
/// request.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("content missing")]
    MissingContent,
    #[error("Note not found")]
    NotFound,
    #[error("Operation could not be completed")]
    OperationFailed,
}

impl IntoResponse for NoteError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::MissingContent => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::OperationFailed => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": format!("{self}")
        }));

        (status, body).into_response()
    }
}
