//! Чтение полезной нагрузки bearer-токена без проверки подписи.
//!
//! Результат используется только для косметики UI (показать/скрыть кнопку
//! удаления, и т.п.); авторизацию выполняет сервер.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct TokenClaims {
    #[serde(rename = "userId")]
    user_id: i64,
}

/// `userId` из среднего сегмента токена; `None` при любой некорректности.
pub(crate) fn current_user_id(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&raw).ok()?;
    Some(claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{header}.{payload}.fake-signature")
    }

    #[test]
    fn reads_user_id_claim() {
        let token = make_token(r#"{"userId":7}"#);
        assert_eq!(current_user_id(&token), Some(7));
    }

    #[test]
    fn rejects_malformed_token() {
        assert_eq!(current_user_id(""), None);
        assert_eq!(current_user_id("no-dots-here"), None);
        assert_eq!(current_user_id("a.!!!not-base64!!!.c"), None);
    }

    #[test]
    fn rejects_payload_without_user_id() {
        let token = make_token(r#"{"sub":"x"}"#);
        assert_eq!(current_user_id(&token), None);
    }

    #[test]
    fn signature_is_never_checked() {
        let token = make_token(r#"{"userId":5}"#);
        let (prefix, _) = token.rsplit_once('.').expect("token has segments");
        assert_eq!(current_user_id(&format!("{prefix}.tampered")), Some(5));
    }
}
