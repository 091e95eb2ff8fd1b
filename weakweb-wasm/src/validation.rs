//! Общая таблица правил валидации с ключом по имени поля.
//!
//! Все страницы проверяют ввод через [`evaluate`] вместо ad hoc кода на
//! каждой форме. Сами правила намеренно слабые/противоречивые
//! (учебный контент): молчаливое усечение пароля, запрет длин 64-128,
//! запрет не-ASCII. Правило может не только отклонить значение, но и
//! преобразовать его.

/// Лимит длины поста в символах.
pub(crate) const MAX_POST_CHARS: usize = 280;

/// Причина отклонения значения; `code` уходит в отчёт о клиентской ошибке.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rejection {
    pub(crate) code: &'static str,
    pub(crate) message: &'static str,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Отклонить пустое или пробельное значение.
    NonEmpty(Rejection),
    /// Отклонить значение длиннее предела (в символах).
    MaxLen(usize, Rejection),
    /// Отклонить длину в диапазоне включительно (слабое демо-правило).
    DenyLenRange(usize, usize, Rejection),
    /// Молча укоротить значение (слабое демо-правило).
    TruncateTo(usize),
    /// Отклонить значение с не-ASCII символами.
    AsciiOnly(Rejection),
}

fn rules_for(field: &str) -> &'static [Rule] {
    match field {
        "post_content" => &[
            Rule::NonEmpty(Rejection {
                code: "post_content_empty",
                message: "Post content cannot be empty",
            }),
            Rule::MaxLen(
                MAX_POST_CHARS,
                Rejection {
                    code: "post_content_too_long",
                    message: "Post content cannot exceed 280 characters",
                },
            ),
        ],
        // Порядок как в оригинальном флоу смены пароля: сначала запрет
        // диапазона длин, затем усечение, затем проверка ASCII.
        "new_password" => &[
            Rule::DenyLenRange(
                64,
                128,
                Rejection {
                    code: "password_invalid_length",
                    message: "Passwords between 64-128 characters are not allowed",
                },
            ),
            Rule::TruncateTo(20),
            Rule::AsciiOnly(Rejection {
                code: "password_invalid_chars",
                message: "Password contains invalid characters. Only ASCII characters are allowed.",
            }),
        ],
        _ => &[],
    }
}

/// Прогоняет значение через правила поля.
///
/// `Ok` содержит итоговое (возможно преобразованное) значение; для поля
/// без правил значение возвращается как есть.
pub(crate) fn evaluate(field: &str, value: &str) -> Result<String, Rejection> {
    let mut value = value.to_string();
    for rule in rules_for(field) {
        match *rule {
            Rule::NonEmpty(rejection) => {
                if value.trim().is_empty() {
                    return Err(rejection);
                }
            }
            Rule::MaxLen(limit, rejection) => {
                if value.chars().count() > limit {
                    return Err(rejection);
                }
            }
            Rule::DenyLenRange(min, max, rejection) => {
                let len = value.chars().count();
                if len >= min && len <= max {
                    return Err(rejection);
                }
            }
            Rule::TruncateTo(limit) => {
                if value.chars().count() > limit {
                    value = value.chars().take(limit).collect();
                }
            }
            Rule::AsciiOnly(rejection) => {
                if !value.is_ascii() {
                    return Err(rejection);
                }
            }
        }
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_content_rejects_empty_and_whitespace() {
        assert!(evaluate("post_content", "").is_err());
        assert!(evaluate("post_content", "   \n\t ").is_err());
    }

    #[test]
    fn post_content_accepts_exactly_280_chars() {
        let content = "a".repeat(280);
        assert_eq!(evaluate("post_content", &content), Ok(content));
    }

    #[test]
    fn post_content_rejects_281_chars() {
        let content = "a".repeat(281);
        let rejection = evaluate("post_content", &content).expect_err("281 chars must be rejected");
        assert_eq!(rejection.code, "post_content_too_long");
    }

    #[test]
    fn new_password_rejects_lengths_64_to_128() {
        for len in [64, 100, 128] {
            let password = "a".repeat(len);
            let rejection =
                evaluate("new_password", &password).expect_err("length must be rejected");
            assert_eq!(rejection.code, "password_invalid_length");
        }
    }

    #[test]
    fn new_password_of_63_chars_is_truncated_to_20() {
        let password = "a".repeat(63);
        let result = evaluate("new_password", &password).expect("63 chars pass the range rule");
        assert_eq!(result.len(), 20);
    }

    // Контринтуитивно, но верно оригиналу: 129+ символов проходят
    // проверку диапазона и молча усекаются.
    #[test]
    fn new_password_of_129_chars_slips_past_the_range_rule() {
        let password = "a".repeat(129);
        let result = evaluate("new_password", &password).expect("129 chars pass the range rule");
        assert_eq!(result.len(), 20);
    }

    #[test]
    fn new_password_keeps_short_values_untouched() {
        assert_eq!(
            evaluate("new_password", "hunter2"),
            Ok("hunter2".to_string())
        );
    }

    #[test]
    fn new_password_rejects_unicode() {
        let rejection =
            evaluate("new_password", "пароль123").expect_err("unicode must be rejected");
        assert_eq!(rejection.code, "password_invalid_chars");
    }

    #[test]
    fn unknown_field_passes_through() {
        assert_eq!(
            evaluate("nickname", "  whatever  "),
            Ok("  whatever  ".to_string())
        );
    }
}
