use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::session::use_session;

/// Навигационная оболочка: ссылки Login/Sign Up для гостя (кроме текущей
/// страницы), Logout для вошедшего.
#[component]
pub(crate) fn Layout(children: Children) -> impl IntoView {
    let session = use_session();
    let location = use_location();

    let on_logout = move |_| {
        if session.clear().is_err() {
            return;
        }
        // Жёсткий переход, как делал оригинал: сбрасывает состояние всех
        // страниц разом.
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    };

    view! {
        <div class="layout">
            <nav class="nav">
                <A href="/">"Weak Website"</A>
                <div class="nav-links">
                    <Show
                        when=move || !session.is_authenticated()
                        fallback=move || {
                            view! { <button on:click=on_logout>"Logout"</button> }
                        }
                    >
                        <Show when=move || location.pathname.get() != "/login">
                            <A href="/login">"Login"</A>
                        </Show>
                        <Show when=move || location.pathname.get() != "/signup">
                            <A href="/signup">"Sign Up"</A>
                        </Show>
                    </Show>
                </div>
            </nav>
            <main class="container">{children()}</main>
        </div>
    }
}
