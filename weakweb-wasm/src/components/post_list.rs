use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Post;
use crate::posts;
use crate::session::use_session;

/// Лента постов: без `user_id` все посты, с ним посты одного автора.
///
/// Список рендерится в порядке сервера (новые первыми). Кнопка удаления
/// чистая косметика: показывается при совпадении `userId` из токена с автором,
/// реальную проверку владения делает бэкенд. Родитель дёргает перезагрузку
/// инкрементом `refresh`.
#[component]
pub(crate) fn PostList(
    refresh: RwSignal<u64>,
    #[prop(optional)] user_id: Option<i64>,
) -> impl IntoView {
    let session = use_session();
    let items = RwSignal::new(Vec::<Post>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match user_id {
                Some(id) => api::list_user_posts(id).await,
                None => api::list_posts().await,
            };
            match result {
                Ok(list) => items.set(list),
                Err(err) => error.set(Some(format!("Failed to load posts: {err}"))),
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        // Подписка на триггер перезагрузки от родителя.
        let _ = refresh.get();
        load();
    });

    let on_delete = move |post_id: i64| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_post(&token, post_id).await {
                Ok(()) => items.update(|list| posts::remove_post(list, post_id)),
                Err(err) => error.set(Some(format!("Failed to delete post: {err}"))),
            }
        });
    };

    view! {
        <Show when=move || loading.get()>
            <p class="muted">"Loading posts..."</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || !loading.get() && error.get().is_none() && items.get().is_empty()>
            <p class="muted">"No posts to display."</p>
        </Show>
        <ul class="post-list">
            <For
                each=move || items.get()
                key=|post| post.id
                children=move |post| {
                    let post_id = post.id;
                    let owner_id = post.user_id;
                    view! {
                        <li class="post">
                            <div class="post-head">
                                <strong>{post.user_email.clone()}</strong>
                                <small>{post.created_at.clone()}</small>
                                <Show when=move || {
                                    posts::can_delete(session.current_user_id(), owner_id)
                                }>
                                    <button on:click=move |_| on_delete(post_id)>"Delete"</button>
                                </Show>
                            </div>
                            <p class="post-content">{post.content.clone()}</p>
                        </li>
                    }
                }
            />
        </ul>
    }
}
