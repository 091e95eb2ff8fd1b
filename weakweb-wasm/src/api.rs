//! Тонкие функции-обёртки над REST API, по одной на ручку бэкенда.
//!
//! Соглашение об ошибках намеренно несимметричное (как у бэкенда):
//! auth-ручки парсят тело при любом статусе и отдают его вызывающему,
//! CRUD-ручки превращают не-2xx в [`ApiError`].

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::models::{
    AuthResponse, ChangePasswordRequest, ClientErrorReport, CreatePostRequest, CreateUserRequest,
    LoginRequest, Post, SignupRequest, UpdateUserRequest, UploadResponse, User,
};

const API_BASE_URL: &str = match option_env!("WEAKWEB_API_URL") {
    Some(value) => value,
    None => "http://localhost:8080",
};

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Http { status: u16, message: String },
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Http { status, message } => write!(f, "http error {status}: {message}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl ApiError {
    /// Провал авторизации: страницы сбрасывают сессию и уводят на /login.
    pub(crate) fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403, .. })
    }
}

fn endpoint(path: &str) -> String {
    format!(
        "{}/{}",
        API_BASE_URL.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

async fn parse_json<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

async fn parse_error_body(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "request failed".to_string());

    let fallback = match status {
        400 => "Некорректный запрос".to_string(),
        401 => "Требуется авторизация".to_string(),
        403 => "Недостаточно прав для этой операции".to_string(),
        404 => "Ресурс не найден".to_string(),
        500..=599 => "Ошибка сервера".to_string(),
        _ => format!("HTTP ошибка {status}"),
    };

    let message = if text.trim().is_empty() { fallback } else { text };

    ApiError::Http { status, message }
}

// --- auth: тело возвращается как есть при любом статусе ---

pub(crate) async fn login(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };

    let response = Request::post(&endpoint("/auth/login"))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(response).await
}

pub(crate) async fn signup(
    email: &str,
    password: &str,
    role: &str,
) -> Result<AuthResponse, ApiError> {
    let payload = SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        role: role.to_string(),
    };

    let response = Request::post(&endpoint("/auth/signup"))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(response).await
}

pub(crate) async fn change_password(
    token: &str,
    current_password: &str,
    new_password: &str,
) -> Result<AuthResponse, ApiError> {
    let payload = ChangePasswordRequest {
        current_password: current_password.to_string(),
        new_password: new_password.to_string(),
    };

    let response = Request::put(&endpoint("/auth/change-password"))
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    parse_json(response).await
}

// --- users: CRUD-соглашение, не-2xx становится ошибкой ---

pub(crate) async fn me(token: &str) -> Result<User, ApiError> {
    let response = Request::get(&endpoint("/user/me"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn get_user(token: &str, id: i64) -> Result<User, ApiError> {
    let response = Request::get(&endpoint(&format!("/user/{id}")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn list_users(token: &str) -> Result<Vec<User>, ApiError> {
    let response = Request::get(&endpoint("/user"))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn create_user(
    token: &str,
    request: &CreateUserRequest,
) -> Result<User, ApiError> {
    let response = Request::post(&endpoint("/user"))
        .header("Authorization", &bearer(token))
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn update_user(
    token: &str,
    id: i64,
    request: &UpdateUserRequest,
) -> Result<User, ApiError> {
    let response = Request::put(&endpoint(&format!("/user/{id}")))
        .header("Authorization", &bearer(token))
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn delete_user(token: &str, id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&endpoint(&format!("/user/{id}")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    Ok(())
}

// --- posts ---

pub(crate) async fn list_posts() -> Result<Vec<Post>, ApiError> {
    let response = Request::get(&endpoint("/posts"))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    // Порядок сервера (новые первыми), клиент не пересортирует.
    parse_json(response).await
}

pub(crate) async fn list_user_posts(user_id: i64) -> Result<Vec<Post>, ApiError> {
    let response = Request::get(&endpoint(&format!("/posts/user/{user_id}")))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn create_post(token: &str, content: &str) -> Result<Post, ApiError> {
    let payload = CreatePostRequest {
        content: content.to_string(),
    };

    let response = Request::post(&endpoint("/posts"))
        .header("Authorization", &bearer(token))
        .json(&payload)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) async fn delete_post(token: &str, id: i64) -> Result<(), ApiError> {
    let response = Request::delete(&endpoint(&format!("/posts/{id}")))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    Ok(())
}

// --- files ---

/// Загрузка multipart-формы. Ручка намеренно без авторизации.
pub(crate) async fn upload_file(form: web_sys::FormData) -> Result<UploadResponse, ApiError> {
    let response = Request::post(&endpoint("/file/upload"))
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if !response.ok() {
        return Err(parse_error_body(response).await);
    }

    parse_json(response).await
}

pub(crate) fn download_url(filename: &str) -> String {
    endpoint(&format!("/file/download/{filename}"))
}

/// Путь уходит в query без обработки (демонстрация path traversal).
pub(crate) fn retrieve_url(path: &str) -> String {
    format!("{}?path={path}", endpoint("/file/retrieve"))
}

// --- диагностика ---

/// Fire-and-forget: любые ошибки отправки молча игнорируются.
pub(crate) async fn report_client_error(report: &ClientErrorReport) {
    let Ok(request) = Request::post(&endpoint("/validation/client-error")).json(report) else {
        return;
    };
    let _ = request.send().await;
}
