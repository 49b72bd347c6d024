//! REST API client module for the blog backend.
//!
//! This module provides the `ApiClient` for communicating with the blog API:
//! user accounts, articles, categories, comments, talks and site info.
//!
//! Every endpoint answers with an `Envelope`. Authenticated calls carry the
//! persisted session token in a `token` header.

pub mod client;
pub mod envelope;
pub mod error;
pub mod hooks;
pub mod middleware;
mod services;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ApiClient;
pub use envelope::{Envelope, SUCCESS_CODE};
pub use error::{ApiError, FailureKind, TransportError};
pub use hooks::{Navigator, Notifier, PendingRoute, TracingNotifier, LOGIN_ROUTE};
pub use transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport, REQUEST_TIMEOUT_SECS};
