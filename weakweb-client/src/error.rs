use thiserror::Error;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `weakweb-client`.
pub enum WeakwebError {
    /// Ошибка HTTP-транспорта (`reqwest`).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Требуется авторизация (отсутствует/некорректен токен).
    #[error("unauthorized")]
    Unauthorized,

    /// Запрошенный ресурс не найден.
    #[error("not found")]
    NotFound,

    /// Некорректный запрос или бизнес-ошибка валидации.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Результат операций `weakweb-client`.
pub type WeakwebResult<T> = Result<T, WeakwebError>;

impl WeakwebError {
    pub(crate) fn from_http_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Self::Unauthorized
            }
            reqwest::StatusCode::NOT_FOUND => Self::NotFound,
            _ => {
                let message = message.unwrap_or_else(|| format!("http status {status}"));
                Self::InvalidRequest(message)
            }
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Self::from_http_status(status, None);
        }
        Self::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn status_401_and_403_map_to_unauthorized() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = WeakwebError::from_http_status(status, None);
            assert!(matches!(err, WeakwebError::Unauthorized));
        }
    }

    #[test]
    fn status_404_maps_to_not_found() {
        let err = WeakwebError::from_http_status(StatusCode::NOT_FOUND, None);
        assert!(matches!(err, WeakwebError::NotFound));
    }

    #[test]
    fn other_statuses_keep_the_server_message() {
        let err = WeakwebError::from_http_status(
            StatusCode::BAD_REQUEST,
            Some("content is too long".to_string()),
        );
        assert!(matches!(err, WeakwebError::InvalidRequest(msg) if msg == "content is too long"));
    }

    #[test]
    fn missing_server_message_falls_back_to_the_status() {
        let err = WeakwebError::from_http_status(StatusCode::INTERNAL_SERVER_ERROR, None);
        assert!(
            matches!(err, WeakwebError::InvalidRequest(msg) if msg == "http status 500 Internal Server Error")
        );
    }
}
