use serde_json::json;

use crate::api::transport::{HttpRequest, Transport};
use crate::api::{ApiClient, ApiError, Envelope};
use crate::models::{LoginForm, RegisterForm, ResetPasswordForm, UserProfile, VerifyCodeForm};

impl<T: Transport> ApiClient<T> {
    /// Profile of the logged-in user.
    pub async fn user_info(&self) -> Result<UserProfile, ApiError> {
        self.fetch(HttpRequest::get("/user/info")).await
    }

    /// Authenticate. Returns the raw envelope; `SessionStore::login` is the
    /// caller that turns it into a session.
    pub async fn login(&self, form: &LoginForm) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/login", to_body(form)?)).await
    }

    pub async fn register(&self, form: &RegisterForm) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/register", to_body(form)?)).await
    }

    /// Ask the server to email a verification code.
    pub async fn send_verification_code(&self, email: &str) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::get("/common/code").query("email", email))
            .await
    }

    pub async fn reset_password(&self, form: &ResetPasswordForm) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/resetPassword", to_body(form)?))
            .await
    }

    /// Validate the current token.
    pub async fn check_token(&self) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::get("/user/check")).await
    }

    pub async fn verify_code(&self, form: &VerifyCodeForm) -> Result<Envelope, ApiError> {
        self.execute(HttpRequest::post("/user/verifyCode", to_body(form)?))
            .await
    }
}

/// Serialize a request body, failing before anything is sent.
pub(super) fn to_body<B: serde::Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Request(format!("Failed to encode body: {}", e)))
}
