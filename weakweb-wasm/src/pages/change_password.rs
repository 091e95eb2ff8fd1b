use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::layout::Layout;
use crate::models::ClientErrorReport;
use crate::session::use_session;
use crate::validation;

/// Функция выключена начиная с релиза V2.1.5 и до сих пор не возвращена.
/// Обработчик отправки остался полностью рабочим на случай включения.
const PAGE_AVAILABLE: bool = false;

/// Смена пароля. Пока страница закрыта заглушкой, но каждый заход с
/// попыткой отправки репортится на сервер как `feature_unavailable`.
#[component]
pub(crate) fn ChangePasswordPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        if !PAGE_AVAILABLE {
            error.set(Some(
                "Password change is temporarily unavailable.".to_string(),
            ));
            spawn_local(async move {
                api::report_client_error(&ClientErrorReport {
                    error: "feature_unavailable".to_string(),
                    field: None,
                    feature: Some("change_password".to_string()),
                    message: "Change password page is disabled.".to_string(),
                })
                .await;
            });
            return;
        }

        let candidate = match validation::evaluate("new_password", &new_password.get()) {
            Ok(value) => value,
            Err(rejection) => {
                error.set(Some(rejection.message.to_string()));
                spawn_local(async move {
                    api::report_client_error(&ClientErrorReport {
                        error: rejection.code.to_string(),
                        field: Some("new_password".to_string()),
                        feature: None,
                        message: rejection.message.to_string(),
                    })
                    .await;
                });
                return;
            }
        };

        let Some(token) = session.token() else {
            error.set(Some("You must be logged in.".to_string()));
            return;
        };

        submitting.set(true);
        let navigate = navigate.clone();
        let current = current_password.get();
        spawn_local(async move {
            match api::change_password(&token, &current, &candidate).await {
                Ok(response) => {
                    if response.message.is_some() {
                        navigate("/dashboard", NavigateOptions::default());
                    } else {
                        error.set(Some(
                            response
                                .error
                                .unwrap_or_else(|| "Password change failed.".to_string()),
                        ));
                    }
                }
                Err(err) => {
                    error.set(Some(format!("An error occurred: {err}")));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <Layout>
            <div class="page">
                <h1>"Change Password"</h1>

                <Show when=move || !PAGE_AVAILABLE>
                    <div class="card notice">
                        <h2>"Temporarily Unavailable"</h2>
                        <p>
                            "Password changes are disabled while we migrate our "
                            "authentication service. Please check back later."
                        </p>
                        <a href="/dashboard">"Return to Dashboard"</a>
                    </div>
                </Show>

                <Show when=move || error.get().is_some()>
                    <div class="error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit class="card">
                    <label>
                        "Current Password:"
                        // Вставка из буфера запрещена на обоих полях пароля,
                        // каждая попытка репортится на сервер.
                        <input
                            type="password"
                            prop:value=move || current_password.get()
                            on:input=move |ev| current_password.set(event_target_value(&ev))
                            on:paste=move |ev| {
                                ev.prevent_default();
                                spawn_local(async move {
                                    api::report_client_error(&ClientErrorReport::paste_disabled(
                                        "current_password",
                                    ))
                                    .await;
                                });
                                if let Some(window) = web_sys::window() {
                                    let _ = window.alert_with_message(
                                        "Paste functionality is disabled for security reasons!",
                                    );
                                }
                            }
                        />
                    </label>
                    <p class="muted">
                        "Note: your current password is not actually verified."
                    </p>
                    <label>
                        "New Password:"
                        <input
                            type="password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                            on:paste=move |ev| {
                                ev.prevent_default();
                                spawn_local(async move {
                                    api::report_client_error(&ClientErrorReport::paste_disabled(
                                        "new_password",
                                    ))
                                    .await;
                                });
                                if let Some(window) = web_sys::window() {
                                    let _ = window.alert_with_message(
                                        "Paste functionality is disabled for security reasons!",
                                    );
                                }
                            }
                        />
                    </label>
                    <button type="submit" disabled=move || submitting.get()>
                        {move || {
                            if submitting.get() { "Changing..." } else { "Change Password" }
                        }}
                    </button>
                </form>
            </div>
        </Layout>
    }
}
