//! Authentication module for the client-held session.
//!
//! This module provides:
//! - `Session`: token and user profile, persisted under the `user` key
//! - `SessionStore`: login, logout and token checks against the API
//!
//! A session has two states, `Anonymous` and `Authenticated`. Only a
//! successful login moves it to `Authenticated`; only logout moves it back.

pub mod session;

pub use session::{Session, SessionState, SessionStore, UserInfo, SESSION_KEY};
