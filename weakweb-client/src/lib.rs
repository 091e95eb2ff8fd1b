//! Клиентская библиотека для учебно-уязвимого социального бэкенда
//! ("Weak Website"): auth, пользователи, посты, файлы и диагностика.
//!
//! Клиент хранит bearer-токен после `login`/`signup` и автоматически
//! подставляет его в защищённые операции. Полезную нагрузку токена можно
//! прочитать без проверки подписи (см. [`token`]), только для отображения.
//!
//! Соглашение об ошибках намеренно несимметричное (как у самого бэкенда):
//! auth-ручки возвращают распарсенное тело при любом HTTP-статусе, все
//! остальные превращают не-2xx в [`WeakwebError`].
#![warn(missing_docs)]

mod error;
mod http_client;
mod models;
pub mod token;

pub use error::{WeakwebError, WeakwebResult};
pub use http_client::HttpClient;
pub use models::{AuthResponse, ClientErrorReport, Post, UploadResponse, User, UserUpdate};

use std::path::Path;

#[derive(Debug, Clone)]
/// Клиент Weak Website с состоянием сессии (bearer-токен).
pub struct WeakwebClient {
    http: HttpClient,
    token: Option<String>,
}

impl WeakwebClient {
    /// Создаёт клиент с базовым URL сервера, например `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(base_url),
            token: None,
        }
    }

    /// Устанавливает bearer-токен вручную.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Возвращает текущий bearer-токен, если он установлен.
    pub fn get_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Очищает сохранённый bearer-токен.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// `userId` из полезной нагрузки текущего токена, без проверки подписи.
    pub fn current_user_id(&self) -> Option<i64> {
        self.token.as_deref().and_then(token::current_user_id)
    }

    fn require_token(&self) -> WeakwebResult<&str> {
        self.token.as_deref().ok_or(WeakwebError::Unauthorized)
    }

    /// Вход. При наличии `token` в ответе он сохраняется в клиенте.
    pub async fn login(&mut self, email: &str, password: &str) -> WeakwebResult<AuthResponse> {
        let result = self.http.login(email, password).await?;
        if let Some(token) = &result.token {
            self.token = Some(token.clone());
        }
        Ok(result)
    }

    /// Регистрация. Токен из ответа (если сервер его вернул) сохраняется.
    pub async fn signup(
        &mut self,
        email: &str,
        password: &str,
        role: &str,
    ) -> WeakwebResult<AuthResponse> {
        let result = self.http.signup(email, password, role).await?;
        if let Some(token) = &result.token {
            self.token = Some(token.clone());
        }
        Ok(result)
    }

    /// Смена пароля текущего пользователя.
    ///
    /// Требует установленный bearer-токен.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> WeakwebResult<AuthResponse> {
        let token = self.require_token()?;
        self.http
            .change_password(token, current_password, new_password)
            .await
    }

    /// Текущий пользователь (`GET /user/me`).
    pub async fn me(&self) -> WeakwebResult<User> {
        let token = self.require_token()?;
        self.http.me(token).await
    }

    /// Пользователь по идентификатору.
    pub async fn get_user(&self, id: i64) -> WeakwebResult<User> {
        let token = self.require_token()?;
        self.http.get_user(token, id).await
    }

    /// Все пользователи (админская ручка).
    pub async fn list_users(&self) -> WeakwebResult<Vec<User>> {
        let token = self.require_token()?;
        self.http.list_users(token).await
    }

    /// Создание пользователя.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        role: &str,
    ) -> WeakwebResult<User> {
        let token = self.require_token()?;
        self.http.create_user(token, email, password, role).await
    }

    /// Частичное обновление пользователя.
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> WeakwebResult<User> {
        let token = self.require_token()?;
        self.http.update_user(token, id, update).await
    }

    /// Удаление пользователя.
    pub async fn delete_user(&self, id: i64) -> WeakwebResult<()> {
        let token = self.require_token()?;
        self.http.delete_user(token, id).await
    }

    /// Все посты, новые первыми. Авторизация не требуется.
    pub async fn list_posts(&self) -> WeakwebResult<Vec<Post>> {
        self.http.list_posts().await
    }

    /// Посты одного пользователя. Авторизация не требуется.
    pub async fn list_user_posts(&self, user_id: i64) -> WeakwebResult<Vec<Post>> {
        self.http.list_user_posts(user_id).await
    }

    /// Создание поста.
    ///
    /// Требует установленный bearer-токен.
    pub async fn create_post(&self, content: &str) -> WeakwebResult<Post> {
        let token = self.require_token()?;
        self.http.create_post(token, content).await
    }

    /// Удаление поста.
    ///
    /// Требует установленный bearer-токен.
    pub async fn delete_post(&self, id: i64) -> WeakwebResult<()> {
        let token = self.require_token()?;
        self.http.delete_post(token, id).await
    }

    /// Загрузка файла. Ручка бэкенда не требует авторизации.
    pub async fn upload_file(&self, path: &Path) -> WeakwebResult<UploadResponse> {
        self.http.upload_file(path).await
    }

    /// Скачивание файла по имени.
    pub async fn download_file(&self, filename: &str) -> WeakwebResult<Vec<u8>> {
        self.http.download_file(filename).await
    }

    /// Скачивание файла по произвольному пути (path traversal демо).
    pub async fn retrieve_file(&self, path: &str) -> WeakwebResult<Vec<u8>> {
        self.http.retrieve_file(path).await
    }

    /// Fire-and-forget отчёт о клиентской ошибке.
    pub async fn report_client_error(&self, report: &ClientErrorReport) -> WeakwebResult<()> {
        self.http.report_client_error(report).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_slot_set_get_clear() {
        let mut client = WeakwebClient::new("http://localhost:8080");
        assert!(client.get_token().is_none());

        client.set_token("abc.def.ghi");
        assert_eq!(client.get_token(), Some("abc.def.ghi"));

        client.clear_token();
        assert!(client.get_token().is_none());
    }

    #[test]
    fn current_user_id_is_none_without_token() {
        let client = WeakwebClient::new("http://localhost:8080");
        assert_eq!(client.current_user_id(), None);
    }

    #[test]
    fn current_user_id_is_none_for_opaque_token() {
        let mut client = WeakwebClient::new("http://localhost:8080");
        client.set_token("not-a-jwt-at-all");
        assert_eq!(client.current_user_id(), None);
    }
}
