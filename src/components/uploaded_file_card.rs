use yew::prelude::*;

use crate::components::ProgressBar;
use crate::models::{FileId, UploadStatus, UploadedFile};
use crate::utils::format_size_mb;

#[derive(Properties, PartialEq, Clone)]
pub struct UploadedFileCardProps {
    pub file: UploadedFile,
    pub on_remove: Callback<FileId>,
}

#[function_component(UploadedFileCard)]
pub fn uploaded_file_card(props: &UploadedFileCardProps) -> Html {
    let f = &props.file;

    let status_icon = match f.status {
        UploadStatus::Completed => html! { <span class="icon text-success" title="Completed">{"✅"}</span> },
        UploadStatus::Error => html! { <span class="icon text-destructive" title="Error">{"⚠️"}</span> },
        UploadStatus::Uploading | UploadStatus::Processing => html! {},
    };

    let on_remove_click = {
        let cb = props.on_remove.clone();
        let id = f.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id);
        })
    };

    html! {
        <div class="uploaded-file gradient-card" data-file-id={f.id.to_string()}>
            <div class="uploaded-file-header">
                <div class="uploaded-file-name">
                    <span class="icon">{"📄"}</span>
                    <h3>{f.file.name.clone()}</h3>
                </div>
                <div class="uploaded-file-actions">
                    {status_icon}
                    <button class="btn-ghost btn-remove" onclick={on_remove_click} title="Remove">
                        {"✕"}
                    </button>
                </div>
            </div>

            <div class="uploaded-file-body">
                if f.status.shows_progress() {
                    <ProgressBar progress={f.progress} show_percentage=true />
                }

                <div class="muted">{format!("Size: {} MB", format_size_mb(f.file.size))}</div>

                if let Some(text) = &f.extracted_text {
                    <div class="extraction-summary">
                        <h4>{"Extraction Summary"}</h4>
                        <p>{text.clone()}</p>
                    </div>
                }

                if let Some(error) = &f.error {
                    <div class="upload-error">
                        <h4>{"Error"}</h4>
                        <p>{error.clone()}</p>
                    </div>
                }
            </div>
        </div>
    }
}
