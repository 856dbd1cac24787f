//! MRI upload modal with drag & drop support.
//!
//! Only picks the file; validation and the request happen in `App`.

use leptos::*;
use web_sys::{DragEvent, Event, FileList, HtmlInputElement, MouseEvent};
use crate::{UploadedFile, ACCEPT_FILTER};

#[component]
pub fn UploadWidget(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_file: Callback<UploadedFile>,
) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    // Multi-file drops keep the first file only
    let forward_first = move |files: Option<FileList>| {
        if let Some(file) = files.and_then(|list| list.get(0)) {
            on_file.call(UploadedFile::new(file));
        }
    };

    let on_drag = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        match ev.type_().as_str() {
            "dragenter" | "dragover" => set_drag_active.set(true),
            "dragleave" => set_drag_active.set(false),
            _ => {}
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(false);
        forward_first(ev.data_transfer().and_then(|transfer| transfer.files()));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        forward_first(input.files());
        // Allows picking the same file again after a rejection
        input.set_value("");
    };

    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.call(())>
            <div
                class=move || if drag_active.get() { "upload-modal drag-active" } else { "upload-modal" }
                on:click=|ev: MouseEvent| ev.stop_propagation()
                on:dragenter=on_drag
                on:dragleave=on_drag
                on:dragover=on_drag
                on:drop=on_drop
            >
                <button class="close-btn" on:click=move |_| on_close.call(())>"✕"</button>
                <div class="upload-content">
                    <div class="upload-icon">"📤"</div>
                    <h3>"Upload MRI Scan"</h3>
                    <p class="upload-hint">"Drag & drop or click to browse"</p>

                    <input
                        type="file"
                        accept=ACCEPT_FILTER
                        style="display:none"
                        node_ref=file_input
                        on:change=on_file_change
                    />

                    <button class="browse-btn" on:click=trigger_file_input>
                        "Browse Files"
                    </button>
                </div>
            </div>
        </div>
    }
}
