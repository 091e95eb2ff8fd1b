use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Публичная модель пользователя.
///
/// Бэкенд намеренно отдаёт пароль в открытом виде (учебная уязвимость),
/// поэтому поле присутствует в модели как есть.
pub struct User {
    /// Идентификатор пользователя.
    pub id: i64,
    /// Email (используется как логин).
    pub email: String,
    /// Пароль, как его вернул сервер.
    pub password: String,
    /// Роль (`user`/`admin`). Свободная строка: бэкенд демонстрирует
    /// mass assignment и может вернуть что угодно.
    pub role: String,
}

impl User {
    /// Проверка роли для ветвления UI. Не является контролем доступа.
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Публичная модель поста.
pub struct Post {
    /// Идентификатор поста.
    pub id: i64,
    /// Содержимое (до 280 символов).
    pub content: String,
    /// Дата и время создания (UTC).
    pub created_at: DateTime<Utc>,
    /// Идентификатор автора.
    pub user_id: i64,
    /// Email автора.
    pub user_email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Ответ auth-ручек (`/auth/login`, `/auth/signup`, `/auth/change-password`).
///
/// Возвращается вызывающему как есть, даже при не-2xx статусе: признак
/// успеха: наличие `token` (login) или `message` (signup/change-password).
pub struct AuthResponse {
    /// Bearer-токен при успешном входе.
    pub token: Option<String>,
    /// Текст ошибки при неуспехе.
    pub error: Option<String>,
    /// Информационное сообщение при успехе.
    pub message: Option<String>,
    /// Оценка стойкости пароля, если сервер её посчитал.
    pub password_strength: Option<i32>,
    /// Пояснение к оценке стойкости.
    pub strength_feedback: Option<String>,
    /// Признак, что пароль замечен в утечках.
    pub is_breached: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
/// Частичное обновление пользователя (`PUT /user/:id`).
///
/// Отправляются только заполненные поля. `role` здесь часть демонстрации
/// mass assignment: клиент может запросить смену роли.
pub struct UserUpdate {
    /// Новый email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Новый пароль.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Новая роль.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl UserUpdate {
    /// Нет ни одного заполненного поля, отправлять нечего.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.role.is_none()
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Ответ на загрузку файла (`POST /file/upload`).
pub struct UploadResponse {
    /// Имя, под которым сервер сохранил файл.
    pub filename: String,
}

#[derive(Debug, Clone, Serialize)]
/// Отчёт о клиентской ошибке (`POST /validation/client-error`).
///
/// Fire-and-forget диагностика: результат отправки вызывающие игнорируют.
pub struct ClientErrorReport {
    /// Код ошибки, например `password_invalid_length`.
    pub error: String,
    /// Поле формы, к которому относится ошибка.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Фича, к которой относится ошибка.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    /// Человекочитаемое описание.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_uses_camel_case_wire_format() {
        let raw = r#"{
            "id": 3,
            "content": "hello",
            "createdAt": "2026-02-01T10:00:00Z",
            "userId": 7,
            "userEmail": "a@example.com"
        }"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.user_id, 7);
        assert_eq!(post.user_email, "a@example.com");
    }

    #[test]
    fn auth_response_tolerates_missing_fields() {
        let resp: AuthResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#)
            .expect("auth response should parse");
        assert!(resp.token.is_none());
        assert_eq!(resp.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn user_update_skips_empty_fields() {
        let update = UserUpdate {
            email: Some("new@example.com".to_string()),
            ..UserUpdate::default()
        };
        let raw = serde_json::to_string(&update).expect("update should serialize");
        assert_eq!(raw, r#"{"email":"new@example.com"}"#);
    }

    #[test]
    fn user_is_admin_matches_role_string() {
        let user = User {
            id: 1,
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
            role: "admin".to_string(),
        };
        assert!(user.is_admin());

        let user = User { role: "user".to_string(), ..user };
        assert!(!user.is_admin());
    }
}
