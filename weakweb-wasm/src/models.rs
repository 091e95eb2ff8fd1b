use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct User {
    pub(crate) id: i64,
    pub(crate) email: String,
    // Бэкенд отдаёт пароль открытым текстом (учебная уязвимость).
    pub(crate) password: String,
    // Свободная строка: сервер демонстрирует mass assignment.
    pub(crate) role: String,
}

impl User {
    /// Только для ветвления UI, не контроль доступа.
    pub(crate) fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) content: String,
    pub(crate) created_at: String,
    pub(crate) user_id: i64,
    pub(crate) user_email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthResponse {
    pub(crate) token: Option<String>,
    pub(crate) error: Option<String>,
    pub(crate) message: Option<String>,
    pub(crate) password_strength: Option<i32>,
    pub(crate) strength_feedback: Option<String>,
    pub(crate) is_breached: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct SignupRequest {
    pub(crate) email: String,
    pub(crate) password: String,
    // Уходит на сервер как есть (демонстрация mass assignment).
    pub(crate) role: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest {
    pub(crate) current_password: String,
    pub(crate) new_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) content: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateUserRequest {
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) role: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) role: Option<String>,
}

impl UpdateUserRequest {
    pub(crate) fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.role.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UploadResponse {
    pub(crate) filename: String,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClientErrorReport {
    pub(crate) error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) feature: Option<String>,
    pub(crate) message: String,
}

impl ClientErrorReport {
    /// Отчёт о заблокированной вставке из буфера в поле `field`.
    pub(crate) fn paste_disabled(field: &str) -> Self {
        Self {
            error: "paste_disabled".to_string(),
            field: Some(field.to_string()),
            feature: None,
            message: "Paste functionality is disabled for security reasons".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_camel_case_fields() {
        let raw = r#"{"id":1,"content":"hi","createdAt":"2026-03-01T00:00:00Z","userId":7,"userEmail":"a@example.com"}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.user_id, 7);
        assert_eq!(post.created_at, "2026-03-01T00:00:00Z");
    }

    #[test]
    fn auth_response_token_presence_signals_success() {
        let ok: AuthResponse =
            serde_json::from_str(r#"{"token":"a.b.c"}"#).expect("response should parse");
        assert!(ok.token.is_some());

        let failed: AuthResponse =
            serde_json::from_str(r#"{"error":"Invalid credentials"}"#).expect("response should parse");
        assert!(failed.token.is_none());
        assert_eq!(failed.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn update_user_request_serializes_only_set_fields() {
        let update = UpdateUserRequest {
            role: Some("admin".to_string()),
            ..UpdateUserRequest::default()
        };
        let raw = serde_json::to_string(&update).expect("update should serialize");
        assert_eq!(raw, r#"{"role":"admin"}"#);
    }

    #[test]
    fn paste_disabled_report_names_the_field() {
        let report = ClientErrorReport::paste_disabled("new_password");
        let raw = serde_json::to_string(&report).expect("report should serialize");
        assert_eq!(
            raw,
            r#"{"error":"paste_disabled","field":"new_password","message":"Paste functionality is disabled for security reasons"}"#
        );
    }

    #[test]
    fn user_is_admin_only_for_admin_role() {
        let raw = r#"{"id":1,"email":"a@example.com","password":"pw","role":"superuser"}"#;
        let user: User = serde_json::from_str(raw).expect("user should parse");
        assert!(!user.is_admin());
    }
}
