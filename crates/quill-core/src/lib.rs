//! Client library for a personal blog's REST API.
//!
//! - `api`: the HTTP client, its token/response middleware and endpoint bindings
//! - `auth`: the persisted session and the store that logs in and out
//! - `article`: the persisted current-article and filter selection
//! - `storage`: key-value persistence behind both stores
//! - `config`: base URL and directory resolution

pub mod api;
pub mod article;
pub mod auth;
pub mod config;
pub mod models;
pub mod storage;
pub mod utils;

pub use api::{ApiClient, ApiError, Envelope, FailureKind};
pub use article::ArticleStore;
pub use auth::{Session, SessionState, SessionStore};
pub use config::Config;
pub use storage::{FileStorage, MemoryStorage, Storage};
