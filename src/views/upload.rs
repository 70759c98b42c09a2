use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{Layout, UploadedFileCard};
use crate::config::CONFIG;
use crate::hooks::use_upload_simulator;
use crate::utils::file_handles;

#[function_component(UploadView)]
pub fn upload_view() -> Html {
    let uploads = use_upload_simulator();
    let drag_over = use_state(|| false);
    let input_ref = use_node_ref();

    let on_change = {
        let select = uploads.select.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            select.emit(file_handles(input.files()));
            // Permite volver a elegir el mismo archivo
            input.set_value("");
        })
    };

    let on_drop = {
        let select = uploads.select.clone();
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);
            select.emit(file_handles(e.data_transfer().and_then(|dt| dt.files())));
        })
    };

    let on_drag_over = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if !*drag_over {
                drag_over.set(true);
            }
        })
    };

    let on_drag_leave = {
        let drag_over = drag_over.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            drag_over.set(false);
        })
    };

    let on_browse = {
        let input_ref = input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let max_mb = CONFIG.upload.advisory_max_bytes / 1024 / 1024;

    html! {
        <Layout>
            <div class="upload-page">
                <div class="page-heading">
                    <h1>{"Upload Contracts"}</h1>
                    <p class="muted">
                        {"Upload PDF contracts to extract key information and analyze terms using AI"}
                    </p>
                </div>

                <div class="gradient-card">
                    <div
                        class={classes!("upload-zone", (*drag_over).then_some("drag-over"))}
                        ondrop={on_drop}
                        ondragover={on_drag_over}
                        ondragleave={on_drag_leave}
                    >
                        <div class="upload-icon">{"⬆️"}</div>
                        <h3>{"Drop your contracts here"}</h3>
                        <p class="muted">{"or click to browse files"}</p>
                        <input
                            ref={input_ref}
                            type="file"
                            multiple=true
                            accept={CONFIG.upload.accepted_extension.clone()}
                            class="hidden"
                            id="file-upload"
                            onchange={on_change}
                        />
                        <button type="button" class="btn btn-primary" onclick={on_browse}>
                            {"Select Files"}
                        </button>
                        <p class="hint">{format!("Supports PDF files up to {}MB", max_mb)}</p>
                    </div>
                </div>

                if !uploads.files.is_empty() {
                    <section class="uploaded-files">
                        <h2>{"Processing Files"}</h2>
                        { for uploads.files.iter().map(|file| html! {
                            <UploadedFileCard
                                key={file.id.to_string()}
                                file={file.clone()}
                                on_remove={uploads.remove.clone()}
                            />
                        })}
                    </section>
                }
            </div>
        </Layout>
    }
}
