// Library root
// -----------
// Client library for the favorites (movies & TV shows) REST API.
//
// Module responsibilities:
// - `config`: resolves the API base URL once at startup.
// - `api`: the four `/entries` operations (list, create, update, delete).
// - `error`: the failures those operations can return.
//
// Presentation code (a dashboard, a TUI, ...) sits outside this crate and
// only talks to `api::EntryClient`.
pub mod api;
pub mod config;
pub mod error;

pub use api::{EntryClient, EntryPayload, EntryResponse, PageRequest};
pub use config::ApiConfig;
pub use error::ApiError;
