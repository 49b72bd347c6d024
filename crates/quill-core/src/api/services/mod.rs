//! Endpoint bindings, one module per API area.
//!
//! Each binding builds an `HttpRequest` and runs it through
//! `ApiClient::execute`, so token injection, failure notifications and the
//! login redirect apply to all of them.

mod article;
mod comment;
mod site;
mod talk;
mod user;
