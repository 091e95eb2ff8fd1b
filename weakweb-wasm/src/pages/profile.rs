use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::layout::Layout;
use crate::models::{UpdateUserRequest, User};
use crate::session::use_session;

/// Профиль текущего пользователя: просмотр и правка email/пароля.
#[component]
pub(crate) fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let user = RwSignal::new(None::<User>);
    let editing = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    {
        let navigate = navigate.clone();
        spawn_local(async move {
            let Some(token) = session.token() else {
                navigate("/login", NavigateOptions::default());
                return;
            };
            match api::me(&token).await {
                Ok(current) => {
                    email.set(current.email.clone());
                    user.set(Some(current));
                }
                Err(err) => {
                    if err.is_auth_failure() {
                        let _ = session.clear();
                        navigate("/login", NavigateOptions::default());
                    } else {
                        error.set(Some(format!("Failed to load profile: {err}")));
                    }
                }
            }
        });
    }

    let start_editing = move |_| {
        if let Some(current) = user.get() {
            email.set(current.email);
        }
        password.set(String::new());
        error.set(None);
        notice.set(None);
        editing.set(true);
    };

    let cancel_editing = move |_| {
        editing.set(false);
        password.set(String::new());
        error.set(None);
    };

    let on_save = move |_| {
        error.set(None);
        notice.set(None);
        let Some(current) = user.get() else {
            return;
        };
        let Some(token) = session.token() else {
            return;
        };
        // Email уходит всегда, пароль только если поле заполнено.
        let update = UpdateUserRequest {
            email: Some(email.get()),
            password: (!password.get().is_empty()).then(|| password.get()),
            role: None,
        };
        let user_id = current.id;
        spawn_local(async move {
            match api::update_user(&token, user_id, &update).await {
                Ok(updated) => {
                    email.set(updated.email.clone());
                    user.set(Some(updated));
                    password.set(String::new());
                    editing.set(false);
                    notice.set(Some("Profile updated.".to_string()));
                }
                Err(err) => error.set(Some(format!("Failed to update profile: {err}"))),
            }
        });
    };

    view! {
        <Layout>
            <div class="page">
                <h1>"My Profile"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <Show when=move || notice.get().is_some()>
                    <div class="notice">{move || notice.get().unwrap_or_default()}</div>
                </Show>

                <Show
                    when=move || user.get().is_some()
                    fallback=|| view! { <p class="muted">"Loading profile..."</p> }
                >
                    <div class="card">
                        <Show
                            when=move || editing.get()
                            fallback=move || {
                                view! {
                                    <p>
                                        <strong>"Email: "</strong>
                                        {move || {
                                            user.get().map(|u| u.email).unwrap_or_default()
                                        }}
                                    </p>
                                    <p>
                                        <strong>"Role: "</strong>
                                        {move || {
                                            user.get().map(|u| u.role).unwrap_or_default()
                                        }}
                                    </p>
                                    <button on:click=start_editing>"Edit Profile"</button>
                                }
                            }
                        >
                            <label>
                                "Email:"
                                <input
                                    type="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <label>
                                "New Password:"
                                <input
                                    type="password"
                                    placeholder="Leave blank to keep current password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>
                            <div class="actions">
                                <button on:click=on_save>"Save"</button>
                                <button on:click=cancel_editing>"Cancel"</button>
                            </div>
                        </Show>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
