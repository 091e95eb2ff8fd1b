use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;
use crate::components::post_form::PostForm;
use crate::components::post_list::PostList;
use crate::session::use_session;

/// Публичная лента: форма поста только для вошедших, список для всех.
#[component]
pub(crate) fn FeedPage() -> impl IntoView {
    let session = use_session();
    let refresh = RwSignal::new(0u64);

    let on_post_created = Callback::new(move |_| refresh.update(|n| *n += 1));

    view! {
        <Layout>
            <div class="page">
                <h1>"Feed"</h1>

                <Show
                    when=move || session.is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="card">
                                <p>
                                    <A href="/login">"Login"</A> " or "
                                    <A href="/signup">"Sign up"</A> " to create posts!"
                                </p>
                            </div>
                        }
                    }
                >
                    <PostForm on_post_created=on_post_created/>
                </Show>

                <div class="feed-head">
                    <h2>"Latest Posts"</h2>
                    <button on:click=move |_| refresh.update(|n| *n += 1)>"Refresh"</button>
                </div>

                <PostList refresh=refresh/>
            </div>
        </Layout>
    }
}
