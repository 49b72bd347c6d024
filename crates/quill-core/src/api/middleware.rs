//! Middleware composed around every `Transport::send`.
//!
//! - `attach_token` runs before the request leaves: it reads the persisted
//!   session and adds the `token` header when one is present.
//! - `classify` runs on whatever came back: it turns the exchange into either
//!   a successful `Envelope` or an `ApiError`, firing the notification and
//!   login-redirect hooks on the way.

use reqwest::header::HeaderValue;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::Session;
use crate::storage::Storage;

use super::error::{ApiError, TransportError};
use super::hooks::{Navigator, Notifier, LOGIN_ROUTE};
use super::transport::{HttpRequest, HttpResponse};
use super::Envelope;

/// Header that carries the session token.
pub const TOKEN_HEADER: &str = "token";

/// Shown when a business failure carries no message.
pub const BUSINESS_FALLBACK_MESSAGE: &str = "Service error, please try again later";

/// Shown when a transport failure carries no message.
pub const TRANSPORT_FALLBACK_MESSAGE: &str = "Service unavailable, please try again later";

/// Add the persisted session token to the request, if there is one.
pub fn attach_token(request: &mut HttpRequest, storage: &dyn Storage) -> Result<(), ApiError> {
    let session = Session::load(storage)
        .map_err(|e| ApiError::Request(format!("Failed to read session: {:#}", e)))?
        .unwrap_or_default();

    if session.token.is_empty() {
        return Ok(());
    }

    let value = HeaderValue::from_str(&session.token)
        .map_err(|e| ApiError::Request(format!("Session token is not a valid header value: {}", e)))?;
    request.headers.insert(TOKEN_HEADER, value);
    Ok(())
}

/// Classify a finished exchange.
///
/// Every failure produces exactly one notification. A 401 additionally
/// navigates to the login route.
pub fn classify(
    outcome: Result<HttpResponse, TransportError>,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> Result<Envelope, ApiError> {
    let response = match outcome {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "Request failed without a response");
            notifier.error(TRANSPORT_FALLBACK_MESSAGE);
            return Err(err.into());
        }
    };

    if !response.status.is_success() {
        return Err(status_failure(response, notifier, navigator));
    }

    match serde_json::from_str::<Envelope>(&response.body) {
        Ok(envelope) if envelope.is_success() => Ok(envelope),
        Ok(envelope) => {
            debug!(code = envelope.code, msg = ?envelope.msg, "Business failure");
            notifier.error(non_empty(envelope.msg.as_deref()).unwrap_or(BUSINESS_FALLBACK_MESSAGE));
            Err(ApiError::Business(envelope))
        }
        Err(e) => {
            warn!(status = %response.status, error = %e, "Response is not an envelope");
            notifier.error(BUSINESS_FALLBACK_MESSAGE);
            Err(ApiError::Transport {
                status: Some(response.status.as_u16()),
                message: format!(
                    "Invalid envelope ({}): {}",
                    e,
                    ApiError::truncate_body(&response.body)
                ),
            })
        }
    }
}

fn status_failure(
    response: HttpResponse,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) -> ApiError {
    let message = body_message(&response.body);
    warn!(status = %response.status, msg = ?message, "Request failed with HTTP status");

    if response.status == StatusCode::UNAUTHORIZED {
        navigator.navigate(LOGIN_ROUTE);
    }
    notifier.error(message.as_deref().unwrap_or(TRANSPORT_FALLBACK_MESSAGE));

    if response.status == StatusCode::UNAUTHORIZED {
        return ApiError::Unauthorized { message };
    }

    ApiError::Transport {
        status: Some(response.status.as_u16()),
        message: message.unwrap_or_else(|| {
            format!("Status {}: {}", response.status, ApiError::truncate_body(&response.body))
        }),
    }
}

/// `msg` field of a JSON error body.
fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    non_empty(value.get("msg").and_then(Value::as_str)).map(str::to_string)
}

fn non_empty(msg: Option<&str>) -> Option<&str> {
    msg.filter(|m| !m.is_empty())
}
