use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::session::use_session;

/// Пускает внутрь при наличии токена, иначе уводит на `redirect_path`.
///
/// Проверяется только присутствие токена: ни подпись, ни срок действия, ни
/// роль клиент не смотрит, реальная авторизация на сервере.
#[component]
pub(crate) fn ProtectedRoute(
    children: ChildrenFn,
    #[prop(default = "/login")] redirect_path: &'static str,
) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || view! { <Redirect path=redirect_path.to_string()/> }
        >
            {children()}
        </Show>
    }
}
