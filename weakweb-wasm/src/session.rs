//! Сессия как явный контекст с единственной границей чтения/записи токена.
//!
//! Страницы и компоненты не обращаются к localStorage напрямую: весь
//! жизненный цикл токена (вход → хранение → выход/сброс) проходит здесь.

use leptos::prelude::*;

use crate::auth;
use crate::storage;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    pub(crate) fn new() -> Self {
        Self {
            token: RwSignal::new(storage::load_token()),
        }
    }

    pub(crate) fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.token.get().is_some()
    }

    /// `userId` из токена, без проверки подписи. Только для отображения.
    pub(crate) fn current_user_id(&self) -> Option<i64> {
        self.token
            .get()
            .and_then(|token| auth::current_user_id(&token))
    }

    /// Сохраняет токен после успешного входа/регистрации.
    pub(crate) fn store_token(&self, token: &str) -> Result<(), String> {
        storage::save_token(token)?;
        self.token.set(Some(token.to_string()));
        Ok(())
    }

    /// Сбрасывает сессию (logout или провал авторизованного запроса).
    pub(crate) fn clear(&self) -> Result<(), String> {
        storage::clear_token()?;
        self.token.set(None);
        Ok(())
    }
}

pub(crate) fn provide_session() {
    provide_context(Session::new());
}

pub(crate) fn use_session() -> Session {
    expect_context::<Session>()
}
