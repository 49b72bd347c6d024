use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::transport::{ReqwestTransport, Transport};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::models::{LoginForm, LoginPayload};
use crate::storage::{load_json, save_json, Storage};

/// Storage key the session is persisted under.
pub const SESSION_KEY: &str = "user";

/// Profile kept with the session. Serializes as `{}` when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl UserInfo {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&LoginPayload> for UserInfo {
    fn from(payload: &LoginPayload) -> Self {
        Self {
            id: payload.id,
            username: payload.username.clone(),
            email: payload.email.clone(),
            create_time: payload.register_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated,
}

/// Client-held authentication record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub is_login: bool,
}

impl Session {
    pub fn authenticated(token: String, user_info: UserInfo) -> Self {
        Self {
            user_info,
            token,
            is_login: true,
        }
    }

    /// Load the persisted session.
    ///
    /// A record that claims to be logged in without a token is treated as
    /// anonymous.
    pub fn load(storage: &dyn Storage) -> Result<Option<Self>> {
        let session: Option<Self> = load_json(storage, SESSION_KEY)?;
        Ok(session.map(|s| {
            if s.is_login && s.token.is_empty() {
                warn!("Stored session is marked logged in without a token, ignoring it");
                Self::default()
            } else {
                s
            }
        }))
    }

    pub fn save(&self, storage: &dyn Storage) -> Result<()> {
        save_json(storage, SESSION_KEY, self)
    }

    pub fn state(&self) -> SessionState {
        if self.is_login && !self.token.is_empty() {
            SessionState::Authenticated
        } else {
            SessionState::Anonymous
        }
    }
}

/// Owns the session and keeps storage in step with it.
///
/// Mutating operations take `&mut self`, so `login` and `logout` are
/// serialized by the borrow checker; across processes the last write to
/// storage wins.
pub struct SessionStore<T = ReqwestTransport> {
    client: ApiClient<T>,
    session: Session,
}

impl<T: Transport> SessionStore<T> {
    /// Create a store, restoring the session from the client's storage.
    pub fn restore(client: ApiClient<T>) -> Self {
        let session = match Session::load(client.storage().as_ref()) {
            Ok(Some(session)) => {
                debug!(state = ?session.state(), "Restored session");
                session
            }
            Ok(None) => Session::default(),
            Err(e) => {
                warn!(error = %e, "Failed to restore session, starting anonymous");
                // Overwrite the bad record so later requests can read it
                let session = Session::default();
                if let Err(e) = session.save(client.storage().as_ref()) {
                    warn!(error = %e, "Failed to reset unreadable session");
                }
                session
            }
        };
        Self { client, session }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> &str {
        &self.session.token
    }

    pub fn user_info(&self) -> &UserInfo {
        &self.session.user_info
    }

    pub fn is_login(&self) -> bool {
        self.session.is_login
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Authenticate and, on success, replace the session.
    ///
    /// Failures are returned untouched and leave the session as it was.
    /// Returns the successful login envelope.
    pub async fn login(&mut self, form: &LoginForm) -> Result<Envelope, ApiError> {
        let envelope = self.client.login(form).await?;

        let payload: LoginPayload = envelope
            .data_as()
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse login data: {}", e)))?;
        let token = payload
            .token
            .clone()
            .or_else(|| envelope.extra_str("token").map(str::to_string))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ApiError::InvalidResponse("Login response carried no token".to_string()))?;

        self.session = Session::authenticated(token, UserInfo::from(&payload));
        self.persist();
        info!(username = ?self.session.user_info.username, "Logged in");

        Ok(envelope)
    }

    /// Clear the session. Local only; the server is not told.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.persist();
        info!("Logged out");
    }

    /// Whether the server still accepts the current token.
    ///
    /// Never errors: an empty token answers `false` without a request, and
    /// any failed call is reported as `false`.
    pub async fn check_login(&self) -> bool {
        if self.session.token.is_empty() {
            return false;
        }
        match self.client.check_token().await {
            Ok(envelope) => envelope.is_success(),
            Err(e) => {
                debug!(error = %e, "Token check failed");
                false
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.session.save(self.client.storage().as_ref()) {
            warn!(error = %e, "Failed to persist session");
        }
    }
}
