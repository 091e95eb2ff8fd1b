use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::api;
use crate::components::layout::Layout;

/// Загрузка и скачивание файлов.
///
/// Обе половины намеренно дырявые: `/file/upload` не требует токена и не
/// фильтрует расширения, а retrieve отдаёт путь на сервер как есть, без
/// какой-либо нормализации (демонстрация path traversal).
#[component]
pub(crate) fn FileUploadPage() -> impl IntoView {
    let selected = RwSignal::new_local(None::<web_sys::File>);
    let uploaded = RwSignal::new(None::<String>);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let retrieve_path = RwSignal::new(String::new());

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        selected.set(file);
        uploaded.set(None);
        error.set(None);
    };

    let on_upload = move |_| {
        let Some(file) = selected.get() else {
            error.set(Some("Please select a file first.".to_string()));
            return;
        };
        error.set(None);
        uploading.set(true);
        spawn_local(async move {
            let form = match web_sys::FormData::new() {
                Ok(form) => form,
                Err(_) => {
                    error.set(Some("Failed to prepare the upload.".to_string()));
                    uploading.set(false);
                    return;
                }
            };
            if form.append_with_blob("file", &file).is_err() {
                error.set(Some("Failed to prepare the upload.".to_string()));
                uploading.set(false);
                return;
            }
            match api::upload_file(form).await {
                Ok(response) => uploaded.set(Some(response.filename)),
                Err(err) => error.set(Some(format!("Upload failed: {err}"))),
            }
            uploading.set(false);
        });
    };

    let on_retrieve = move |_| {
        let path = retrieve_path.get();
        if path.is_empty() {
            error.set(Some("Enter a file path to retrieve.".to_string()));
            return;
        }
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&api::retrieve_url(&path), "_blank");
        }
    };

    view! {
        <Layout>
            <div class="page">
                <h1>"File Upload"</h1>

                <Show when=move || error.get().is_some()>
                    <div class="error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <div class="card">
                    <h2>"Upload a File"</h2>
                    <p class="muted">"Any file type is accepted. No login required."</p>
                    <input type="file" on:change=on_file_change/>
                    <button on:click=on_upload disabled=move || uploading.get()>
                        {move || if uploading.get() { "Uploading..." } else { "Upload" }}
                    </button>
                    <Show when=move || uploaded.get().is_some()>
                        <p>
                            "Uploaded: "
                            <a
                                href=move || {
                                    api::download_url(&uploaded.get().unwrap_or_default())
                                }
                                target="_blank"
                            >
                                {move || uploaded.get().unwrap_or_default()}
                            </a>
                        </p>
                    </Show>
                </div>

                <div class="card">
                    <h2>"Retrieve a File"</h2>
                    <p class="muted">"Fetch any file by its path on the server."</p>
                    <input
                        type="text"
                        placeholder="uploads/report.pdf"
                        prop:value=move || retrieve_path.get()
                        on:input=move |ev| retrieve_path.set(event_target_value(&ev))
                    />
                    <button on:click=on_retrieve>"Retrieve"</button>
                </div>
            </div>
        </Layout>
    }
}
