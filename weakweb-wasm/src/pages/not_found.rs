use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::Layout;

#[component]
pub(crate) fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="page page-centered">
                <h1>"404"</h1>
                <p>"The page you are looking for does not exist."</p>
                <A href="/">"Go back home"</A>
            </div>
        </Layout>
    }
}
