use serde::{Deserialize, Serialize};

/// Credentials posted to `/user/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordForm {
    pub email: String,
    pub code: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyCodeForm {
    pub email: String,
    pub code: String,
}

/// `data` of a successful login.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub register_time: Option<String>,
    pub token: Option<String>,
}

/// Profile returned by `/user/info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    #[serde(alias = "createTime")]
    pub register_time: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("(unnamed)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_login_payload() {
        let json = r#"{"id":1,"username":"a","email":"a@x.com","registerTime":"2024-01-01","token":"T"}"#;
        let payload: LoginPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.id, Some(1));
        assert_eq!(payload.register_time.as_deref(), Some("2024-01-01"));
        assert_eq!(payload.token.as_deref(), Some("T"));
    }

    #[test]
    fn test_parse_profile_accepts_create_time() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id":2,"username":"","createTime":"2023-05-06","extra":true}"#).unwrap();
        assert_eq!(profile.register_time.as_deref(), Some("2023-05-06"));
        assert_eq!(profile.display_name(), "(unnamed)");
    }

    #[test]
    fn test_login_form_serializes_plain_fields() {
        let json = serde_json::to_value(LoginForm::new("a", "b")).unwrap();
        assert_eq!(json, serde_json::json!({"username": "a", "password": "b"}));
    }
}
