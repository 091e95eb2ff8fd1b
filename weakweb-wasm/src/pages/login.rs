use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::session::use_session;

/// Вход: при `token` в ответе сохраняем его и уходим на главную, при
/// `error` показываем её. Не-2xx статус сам по себе ошибкой не считается
/// (auth-соглашение бэкенда).
#[component]
pub(crate) fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let email = email.get();
        let password = password.get();
        let navigate = navigate.clone();

        submitting.set(true);
        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(response) => match response.token {
                    Some(token) => match session.store_token(&token) {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(err) => error.set(Some(err)),
                    },
                    None => {
                        error.set(Some(
                            response.error.unwrap_or_else(|| "Login failed".to_string()),
                        ));
                    }
                },
                Err(err) => error.set(Some(format!("An error occurred during login: {err}"))),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <h1>"Login"</h1>
            <form class="auth-form" on:submit=on_submit>
                <label>
                    "Email:"
                    <input
                        type="text"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password:"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <div class="error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <button type="submit" disabled=move || submitting.get()>
                    "Login"
                </button>
            </form>
            <A href="/">"Back to Home"</A>
        </div>
    }
}
