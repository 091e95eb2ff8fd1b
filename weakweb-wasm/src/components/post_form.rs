use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::session::use_session;
use crate::validation;

/// Форма нового поста: валидация через общую таблицу правил, затем запрос.
/// Отклонённый ввод не порождает сетевого вызова.
#[component]
pub(crate) fn PostForm(on_post_created: Callback<()>) -> impl IntoView {
    let session = use_session();
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error.set(None);

        let value = match validation::evaluate("post_content", &content.get()) {
            Ok(value) => value,
            Err(rejection) => {
                error.set(Some(rejection.message.to_string()));
                return;
            }
        };

        let Some(token) = session.token() else {
            error.set(Some("You must be logged in to post".to_string()));
            return;
        };

        submitting.set(true);
        spawn_local(async move {
            match api::create_post(&token, &value).await {
                Ok(_) => {
                    content.set(String::new());
                    on_post_created.run(());
                }
                Err(err) => error.set(Some(format!("Failed to create post: {err}"))),
            }
            submitting.set(false);
        });
    };

    view! {
        <form class="post-form" on:submit=on_submit>
            <textarea
                placeholder="What's on your mind?"
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
                disabled=move || submitting.get()
            ></textarea>
            <div class="post-form-meta">
                <span>
                    {move || {
                        format!("{}/{}", content.get().chars().count(), validation::MAX_POST_CHARS)
                    }}
                </span>
                <Show when=move || submitting.get()>
                    <span>"Posting..."</span>
                </Show>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <button type="submit" disabled=move || submitting.get()>
                "Post"
            </button>
        </form>
    }
}
