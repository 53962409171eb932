//! In-memory note store and the HTTP handlers that expose it.
pub mod notes;
pub mod state;
