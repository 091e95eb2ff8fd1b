use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::layout::Layout;
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::session::use_session;

/// Собирает частичное обновление из формы: отправляем только то, что
/// реально поменялось относительно выбранного пользователя.
fn diff_update(selected: &User, email: &str, password: &str, role: &str) -> UpdateUserRequest {
    UpdateUserRequest {
        email: (email != selected.email).then(|| email.to_string()),
        password: (!password.is_empty()).then(|| password.to_string()),
        role: (role != selected.role).then(|| role.to_string()),
    }
}

/// Админ-панель управления пользователями.
///
/// Клиент не проверяет роль: страница лишь скрыта за наличием токена, а
/// право на `/user`-ручки решает сервер. Провал загрузки списка уводит на
/// главную (как и в остальных view, обработка ошибок своя, локальная).
#[component]
pub(crate) fn AdminPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let users = RwSignal::new(Vec::<User>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let is_creating = RwSignal::new(false);
    let selected = RwSignal::new(None::<User>);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("user".to_string());

    {
        let navigate = navigate.clone();
        spawn_local(async move {
            let Some(token) = session.token() else {
                navigate("/login", NavigateOptions::default());
                return;
            };
            match api::list_users(&token).await {
                Ok(list) => {
                    users.set(list);
                    loading.set(false);
                }
                Err(_) => {
                    // Скорее всего не хватает прав: сервер не отдал список.
                    navigate("/", NavigateOptions::default());
                }
            }
        });
    }

    let reset_form = move || {
        email.set(String::new());
        password.set(String::new());
        role.set("user".to_string());
        selected.set(None);
        is_creating.set(false);
    };

    let start_creating = move |_| {
        reset_form();
        is_creating.set(true);
    };

    let start_editing = move |user: User| {
        email.set(user.email.clone());
        password.set(String::new());
        role.set(user.role.clone());
        selected.set(Some(user));
        is_creating.set(false);
    };

    let on_create = move |_| {
        error.set(None);
        if email.get().is_empty() || password.get().is_empty() {
            error.set(Some("Email and password are required.".to_string()));
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let request = CreateUserRequest {
            email: email.get(),
            password: password.get(),
            role: role.get(),
        };
        spawn_local(async move {
            match api::create_user(&token, &request).await {
                Ok(created) => {
                    users.update(|list| list.push(created));
                    reset_form();
                }
                Err(err) => error.set(Some(format!("Failed to create user: {err}"))),
            }
        });
    };

    let on_update = move |_| {
        error.set(None);
        let Some(current) = selected.get() else {
            return;
        };
        let update = diff_update(&current, &email.get(), &password.get(), &role.get());
        if update.is_empty() {
            reset_form();
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        let user_id = current.id;
        spawn_local(async move {
            match api::update_user(&token, user_id, &update).await {
                Ok(updated) => {
                    users.update(|list| {
                        if let Some(entry) = list.iter_mut().find(|u| u.id == updated.id) {
                            *entry = updated;
                        }
                    });
                    reset_form();
                }
                Err(err) => error.set(Some(format!("Failed to update user: {err}"))),
            }
        });
    };

    let on_delete = move |user_id: i64| {
        let confirmed = web_sys::window()
            .and_then(|window| {
                window
                    .confirm_with_message("Are you sure you want to delete this user?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_user(&token, user_id).await {
                Ok(()) => users.update(|list| list.retain(|u| u.id != user_id)),
                Err(err) => error.set(Some(format!("Failed to delete user: {err}"))),
            }
        });
    };

    let form_is_open = move || is_creating.get() || selected.get().is_some();

    view! {
        <Layout>
            <div class="page">
                <div class="page-head">
                    <h1>"User Management"</h1>
                    <Show when=move || !form_is_open()>
                        <button on:click=start_creating>"Create New User"</button>
                    </Show>
                </div>

                <Show when=move || error.get().is_some()>
                    <div class="error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <Show when=move || form_is_open()>
                    <div class="card">
                        <h2>
                            {move || {
                                if is_creating.get() { "Create New User" } else { "Edit User" }
                            }}
                        </h2>
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
                                placeholder="Leave blank to keep current password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <label>
                            "Role:"
                            <select
                                prop:value=move || role.get()
                                on:change=move |ev| role.set(event_target_value(&ev))
                            >
                                <option value="user">"User"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </label>
                        <div class="actions">
                            <Show
                                when=move || is_creating.get()
                                fallback=move || {
                                    view! { <button on:click=on_update>"Update User"</button> }
                                }
                            >
                                <button on:click=on_create>"Create User"</button>
                            </Show>
                            <button on:click=move |_| reset_form()>"Cancel"</button>
                        </div>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="muted">"Loading users..."</p> }
                >
                    <table class="user-table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Email"</th>
                                <th>"Role"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || users.get()
                                key=|user| user.id
                                children=move |user| {
                                    let user_id = user.id;
                                    let user_for_edit = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.id}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.role.clone()}</td>
                                            <td>
                                                <button on:click=move |_| start_editing(
                                                    user_for_edit.clone(),
                                                )>"Edit"</button>
                                                <button on:click=move |_| on_delete(user_id)>
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </Layout>
    }
}
