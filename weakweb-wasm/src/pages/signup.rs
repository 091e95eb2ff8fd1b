use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::layout::Layout;

/// Регистрация. Поле роли в форме не показывается, но в запросе уходит
/// всегда: сервер демонстрирует mass assignment и примет любое значение.
#[component]
pub(crate) fn SignupPage() -> impl IntoView {
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
            match api::signup(&email, &password, "user").await {
                Ok(response) => {
                    if response.message.is_some() {
                        navigate("/login", NavigateOptions::default());
                    } else {
                        error.set(Some(
                            response
                                .error
                                .unwrap_or_else(|| "Signup failed".to_string()),
                        ));
                    }
                }
                Err(err) => error.set(Some(format!("An error occurred during signup: {err}"))),
            }
            submitting.set(false);
        });
    };

    view! {
        <Layout>
            <div class="page">
                <h1>"Sign Up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email:"
                        <input
                            type="email"
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
                        "Sign Up"
                    </button>
                </form>
            </div>
        </Layout>
    }
}
