use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::layout::Layout;
use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::models::User;
use crate::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostsTab {
    All,
    Mine,
}

/// Личный кабинет: карточка пользователя из `/user/me`, форма поста и две
/// вкладки ленты. Провал `/user/me` трактуется как протухшая сессия:
/// токен сбрасывается, пользователь уходит на /login (обработка 401 здесь
/// своя, как и на других страницах: общего перехватчика нет намеренно).
#[component]
pub(crate) fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(true);
    let refresh = RwSignal::new(0u64);
    let tab = RwSignal::new(PostsTab::All);

    {
        let navigate = navigate.clone();
        spawn_local(async move {
            let Some(token) = session.token() else {
                navigate("/login", NavigateOptions::default());
                return;
            };
            match api::me(&token).await {
                Ok(current) => user.set(Some(current)),
                Err(_) => {
                    // Токен невалиден или протух: сброс и заново на вход.
                    let _ = session.clear();
                    navigate("/login", NavigateOptions::default());
                }
            }
            loading.set(false);
        });
    }

    let on_post_created = Callback::new(move |_| refresh.update(|n| *n += 1));

    view! {
        <Layout>
            <div class="page">
                <h1>"Dashboard"</h1>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="muted">"Loading..."</p> }
                >
                    {move || {
                        user.get()
                            .map(|current| {
                                let role_class = if current.is_admin() {
                                    "badge badge-admin"
                                } else {
                                    "badge badge-user"
                                };
                                view! {
                                    <div class="card">
                                        <h2>{format!("Welcome back, {}!", current.email)}</h2>
                                        <p>"Email: " {current.email.clone()}</p>
                                        <p>
                                            "Role: " <span class=role_class>{current.role.clone()}</span>
                                        </p>
                                        <p class="muted">{format!("User ID: {}", current.id)}</p>
                                    </div>
                                }
                            })
                    }}

                    <h2>"Posts"</h2>
                    <PostForm on_post_created=on_post_created/>

                    <div class="tabs">
                        <button
                            class:active=move || tab.get() == PostsTab::All
                            on:click=move |_| tab.set(PostsTab::All)
                        >
                            "All Posts"
                        </button>
                        <button
                            class:active=move || tab.get() == PostsTab::Mine
                            on:click=move |_| tab.set(PostsTab::Mine)
                        >
                            "My Posts"
                        </button>
                    </div>

                    <Show when=move || tab.get() == PostsTab::All>
                        <PostList refresh=refresh/>
                    </Show>
                    <Show when=move || tab.get() == PostsTab::Mine>
                        {move || {
                            user.get()
                                .map(|current| view! { <PostList refresh=refresh user_id=current.id/> })
                        }}
                    </Show>
                </Show>
            </div>
        </Layout>
    }
}
