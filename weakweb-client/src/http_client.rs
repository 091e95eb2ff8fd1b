use reqwest::{Client, Method};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;
use std::time::Duration;

use crate::error::{WeakwebError, WeakwebResult};
use crate::models::{AuthResponse, ClientErrorReport, Post, UploadResponse, User, UserUpdate};

#[derive(Debug, Serialize)]
struct LoginRequestDto<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SignupRequestDto<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequestDto<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePostRequestDto<'a> {
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateUserRequestDto<'a> {
    email: &'a str,
    password: &'a str,
    role: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorResponseDto {
    error: Option<String>,
}

#[derive(Debug, Clone)]
/// HTTP-клиент для REST API учебно-уязвимого бэкенда.
///
/// Соглашение об ошибках двухслойное и намеренно несимметричное:
/// auth-ручки возвращают распарсенное тело при любом статусе, CRUD-ручки
/// превращают не-2xx в [`WeakwebError`].
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Создаёт новый HTTP-клиент с базовым URL сервера.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("failed to build reqwest client");

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn decode_error(response: reqwest::Response) -> WeakwebError {
        let status = response.status();

        let message = match response.json::<ErrorResponseDto>().await {
            Ok(body) => body
                .error
                .unwrap_or_else(|| format!("http status {status}")),
            Err(_) => format!("http status {status}"),
        };
        tracing::warn!(%status, %message, "request failed");
        WeakwebError::from_http_status(status, Some(message))
    }

    /// универсальный helper для CRUD-запросов с json-payload
    async fn send_json<TReq, TRes>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> WeakwebResult<TRes>
    where
        TReq: Serialize,
        TRes: DeserializeOwned,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(WeakwebError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<TRes>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// универсальный helper для CRUD-запросов без тела
    async fn send_empty(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> WeakwebResult<reqwest::Response> {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(WeakwebError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        Ok(response)
    }

    /// auth-соглашение: тело парсится при любом статусе, ветвление по
    /// `token`/`error`/`message` остаётся вызывающему.
    async fn send_auth<TReq>(
        &self,
        method: Method,
        path: &str,
        body: &TReq,
        token: Option<&str>,
    ) -> WeakwebResult<AuthResponse>
    where
        TReq: Serialize,
    {
        let url = self.endpoint(path);
        tracing::debug!(%method, %url, "sending auth request");

        let mut request = self.client.request(method, url).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(WeakwebError::from_reqwest)?;
        response
            .json::<AuthResponse>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Вход по email и паролю.
    pub async fn login(&self, email: &str, password: &str) -> WeakwebResult<AuthResponse> {
        let payload = LoginRequestDto { email, password };
        self.send_auth(Method::POST, "/auth/login", &payload, None)
            .await
    }

    /// Регистрация. `role` уходит на сервер как есть (демонстрация
    /// mass assignment).
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> WeakwebResult<AuthResponse> {
        let payload = SignupRequestDto {
            email,
            password,
            role,
        };
        self.send_auth(Method::POST, "/auth/signup", &payload, None)
            .await
    }

    /// Смена пароля текущего пользователя.
    pub async fn change_password(
        &self,
        token: &str,
        current_password: &str,
        new_password: &str,
    ) -> WeakwebResult<AuthResponse> {
        let payload = ChangePasswordRequestDto {
            current_password,
            new_password,
        };
        self.send_auth(Method::PUT, "/auth/change-password", &payload, Some(token))
            .await
    }

    /// Текущий пользователь по токену.
    pub async fn me(&self, token: &str) -> WeakwebResult<User> {
        let response = self.send_empty(Method::GET, "/user/me", Some(token)).await?;
        response
            .json::<User>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Пользователь по идентификатору.
    pub async fn get_user(&self, token: &str, id: i64) -> WeakwebResult<User> {
        let response = self
            .send_empty(Method::GET, &format!("/user/{id}"), Some(token))
            .await?;
        response
            .json::<User>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Все пользователи (админская ручка; клиент роль не проверяет).
    pub async fn list_users(&self, token: &str) -> WeakwebResult<Vec<User>> {
        let response = self.send_empty(Method::GET, "/user", Some(token)).await?;
        response
            .json::<Vec<User>>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Создание пользователя.
    pub async fn create_user(
        &self,
        token: &str,
        email: &str,
        password: &str,
        role: &str,
    ) -> WeakwebResult<User> {
        let payload = CreateUserRequestDto {
            email,
            password,
            role,
        };
        self.send_json(Method::POST, "/user", &payload, Some(token))
            .await
    }

    /// Частичное обновление пользователя.
    pub async fn update_user(
        &self,
        token: &str,
        id: i64,
        update: &UserUpdate,
    ) -> WeakwebResult<User> {
        self.send_json(Method::PUT, &format!("/user/{id}"), update, Some(token))
            .await
    }

    /// Удаление пользователя.
    pub async fn delete_user(&self, token: &str, id: i64) -> WeakwebResult<()> {
        self.send_empty(Method::DELETE, &format!("/user/{id}"), Some(token))
            .await?;
        Ok(())
    }

    /// Все посты, в порядке сервера (новые первыми). Клиент не пересортирует.
    pub async fn list_posts(&self) -> WeakwebResult<Vec<Post>> {
        let response = self.send_empty(Method::GET, "/posts", None).await?;
        response
            .json::<Vec<Post>>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Посты одного пользователя.
    pub async fn list_user_posts(&self, user_id: i64) -> WeakwebResult<Vec<Post>> {
        let response = self
            .send_empty(Method::GET, &format!("/posts/user/{user_id}"), None)
            .await?;
        response
            .json::<Vec<Post>>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Создание поста от имени авторизованного пользователя.
    pub async fn create_post(&self, token: &str, content: &str) -> WeakwebResult<Post> {
        let payload = CreatePostRequestDto { content };
        self.send_json(Method::POST, "/posts", &payload, Some(token))
            .await
    }

    /// Удаление поста по идентификатору.
    pub async fn delete_post(&self, token: &str, id: i64) -> WeakwebResult<()> {
        self.send_empty(Method::DELETE, &format!("/posts/{id}"), Some(token))
            .await?;
        Ok(())
    }

    /// Загрузка файла multipart-полем `file`.
    ///
    /// Ручка намеренно не требует авторизации (учебная уязвимость).
    pub async fn upload_file(&self, path: &Path) -> WeakwebResult<UploadResponse> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|err| WeakwebError::InvalidRequest(format!("cannot read {path:?}: {err}")))?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = self.endpoint("/file/upload");
        tracing::debug!(%url, "uploading file");

        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(WeakwebError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        response
            .json::<UploadResponse>()
            .await
            .map_err(WeakwebError::from_reqwest)
    }

    /// Скачивание ранее загруженного файла по имени.
    pub async fn download_file(&self, filename: &str) -> WeakwebResult<Vec<u8>> {
        let response = self
            .send_empty(Method::GET, &format!("/file/download/{filename}"), None)
            .await?;
        let bytes = response.bytes().await.map_err(WeakwebError::from_reqwest)?;
        Ok(bytes.to_vec())
    }

    /// Скачивание файла по произвольному пути (`?path=...`).
    ///
    /// Путь передаётся на сервер без какой-либо обработки: эта ручка
    /// демонстрирует path traversal на стороне бэкенда.
    pub async fn retrieve_file(&self, path: &str) -> WeakwebResult<Vec<u8>> {
        let url = self.endpoint("/file/retrieve");
        tracing::debug!(%url, path, "retrieving file");

        let response = self
            .client
            .get(url)
            .query(&[("path", path)])
            .send()
            .await
            .map_err(WeakwebError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(Self::decode_error(response).await);
        }

        let bytes = response.bytes().await.map_err(WeakwebError::from_reqwest)?;
        Ok(bytes.to_vec())
    }

    /// Отправка диагностического отчёта о клиентской ошибке.
    ///
    /// Статус ответа не проверяется: это fire-and-forget ручка.
    pub async fn report_client_error(&self, report: &ClientErrorReport) -> WeakwebResult<()> {
        let url = self.endpoint("/validation/client-error");
        tracing::debug!(%url, error = %report.error, "reporting client error");

        self.client
            .post(url)
            .json(report)
            .send()
            .await
            .map_err(WeakwebError::from_reqwest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_normalizes_slashes() {
        let client = HttpClient::new("http://localhost:8080/");
        let full = client.endpoint("/auth/login");
        assert_eq!(full, "http://localhost:8080/auth/login");
    }

    #[test]
    fn change_password_body_is_camel_case() {
        let payload = ChangePasswordRequestDto {
            current_password: "old",
            new_password: "new",
        };
        let raw = serde_json::to_string(&payload).expect("payload should serialize");
        assert_eq!(raw, r#"{"currentPassword":"old","newPassword":"new"}"#);
    }

    #[test]
    fn signup_body_carries_client_supplied_role() {
        let payload = SignupRequestDto {
            email: "a@example.com",
            password: "pw",
            role: "admin",
        };
        let raw = serde_json::to_string(&payload).expect("payload should serialize");
        assert!(raw.contains(r#""role":"admin""#));
    }
}
