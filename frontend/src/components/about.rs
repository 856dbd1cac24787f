//! About page

use leptos::*;
use crate::DIAGNOSES;

#[component]
pub fn InfoView() -> impl IntoView {
    view! {
        <div class="about">
            <h2>"About This Project"</h2>
            <p>"Our AI model detects 4 types of brain conditions with 95%+ accuracy:"</p>
            <ul>
                {DIAGNOSES
                    .into_iter()
                    .map(|diagnosis| view! { <li>"✅ " {diagnosis}</li> })
                    .collect_view()}
            </ul>
            <p>"Built with TensorFlow, Flask, and " <span class="rust-badge">"🦀 Rust + Leptos"</span></p>
        </div>
    }
}
