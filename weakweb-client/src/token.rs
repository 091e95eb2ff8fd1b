//! Чтение полезной нагрузки bearer-токена без проверки подписи.
//!
//! Это НЕ верификация JWT: берётся средний сегмент, декодируется base64url
//! и парсится как JSON. Результат годится только для отображения,
//! авторизацию выполняет сервер.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
/// Интересующие нас поля полезной нагрузки токена.
pub struct TokenClaims {
    /// Идентификатор пользователя.
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Декодирует средний сегмент токена в [`TokenClaims`].
///
/// Любая некорректность (не три сегмента, битый base64, битый JSON,
/// отсутствие `userId`) превращается в `None`.
pub fn decode_token_payload(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    // Некоторые генераторы добавляют padding, хотя JWT его не требует.
    let raw = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&raw).ok()
}

/// Возвращает `userId` из токена, либо `None` для пустого/битого токена.
pub fn current_user_id(token: &str) -> Option<i64> {
    decode_token_payload(token).map(|claims| claims.user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload_json: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
        format!("{header}.{payload}.not-a-real-signature")
    }

    #[test]
    fn current_user_id_reads_user_id_claim() {
        let token = make_token(r#"{"userId":7,"iat":1700000000}"#);
        assert_eq!(current_user_id(&token), Some(7));
    }

    #[test]
    fn current_user_id_ignores_signature_entirely() {
        let token = make_token(r#"{"userId":42}"#);
        let (head_and_payload, _) = token.rsplit_once('.').expect("token has segments");
        let forged = format!("{head_and_payload}.completely-different");
        assert_eq!(current_user_id(&forged), Some(42));
    }

    #[test]
    fn current_user_id_rejects_missing_payload_segment() {
        assert_eq!(current_user_id("only-one-segment"), None);
    }

    #[test]
    fn current_user_id_rejects_bad_base64() {
        assert_eq!(current_user_id("aaa.%%%%.bbb"), None);
    }

    #[test]
    fn current_user_id_rejects_payload_without_user_id() {
        let token = make_token(r#"{"sub":"someone"}"#);
        assert_eq!(current_user_id(&token), None);
    }

    #[test]
    fn decode_tolerates_padded_payload() {
        use base64::engine::general_purpose::URL_SAFE;
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
        let payload = URL_SAFE.encode(br#"{"userId":99}"#);
        assert!(payload.ends_with('='));
        let token = format!("{header}.{payload}.sig");
        assert_eq!(current_user_id(&token), Some(99));
    }
}
