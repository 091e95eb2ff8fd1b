use leptos::prelude::*;

use crate::components::layout::Layout;

struct Weakness {
    title: &'static str,
    summary: &'static str,
    details: &'static [&'static str],
}

/// Каталог намеренных уязвимостей стенда. Чистая статика.
const WEAKNESSES: &[Weakness] = &[
    Weakness {
        title: "Broken Authentication",
        summary: "Tokens are trusted without verification.",
        details: &[
            "The client decodes the JWT payload without checking its signature.",
            "A forged token with any userId claim is accepted by the UI.",
            "Logging out only clears local storage; tokens are never revoked.",
        ],
    },
    Weakness {
        title: "Broken Access Control",
        summary: "Authorization lives only on the client.",
        details: &[
            "The admin panel is hidden, not protected; any token opens it.",
            "Signup sends a role field the server applies as-is (mass assignment).",
            "User records returned by the API include plaintext passwords.",
        ],
    },
    Weakness {
        title: "Unrestricted File Upload",
        summary: "Anything can be uploaded by anyone.",
        details: &[
            "The upload endpoint requires no authentication.",
            "File type and size are never checked.",
            "Uploaded files are served back under a predictable URL.",
        ],
    },
    Weakness {
        title: "Path Traversal",
        summary: "File retrieval passes the path straight through.",
        details: &[
            "The retrieve endpoint takes a raw path query parameter.",
            "No normalization is applied, so ../ sequences reach the filesystem.",
            "Combined with upload this allows reading arbitrary server files.",
        ],
    },
];

/// Страница с описанием встроенных уязвимостей (учебный материал).
#[component]
pub(crate) fn SecurityInfoPage() -> impl IntoView {
    view! {
        <Layout>
            <div class="page">
                <h1>"Security Information"</h1>
                <p class="muted">
                    "This application is intentionally vulnerable and exists for "
                    "security training. Never deploy it anywhere reachable from "
                    "the internet."
                </p>
                <div class="card-grid">
                    {WEAKNESSES
                        .iter()
                        .map(|weakness| {
                            view! {
                                <div class="card">
                                    <h2>{weakness.title}</h2>
                                    <p>{weakness.summary}</p>
                                    <ul>
                                        {weakness
                                            .details
                                            .iter()
                                            .map(|detail| view! { <li>{*detail}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Layout>
    }
}
