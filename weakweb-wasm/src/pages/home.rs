use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub(crate) fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <h1>"Weak Website"</h1>
            <p>"Welcome to the vulnerable website demo."</p>
            <div class="links">
                <A href="/login">"Login"</A>
                <A href="/signup">"Sign Up"</A>
                <A href="/feed">"Feed"</A>
                <A href="/security-info">"Security Info"</A>
            </div>
        </div>
    }
}
