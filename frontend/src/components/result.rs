//! Prediction result page.

use leptos::*;
use crate::PredictionResult;

#[component]
pub fn ResultView(
    #[prop(into)] prediction: Signal<Option<PredictionResult>>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="result-page">
            {move || match prediction.get() {
                Some(result) => {
                    let class_name = if result.is_tumor_free() { "diagnosis healthy" } else { "diagnosis" };
                    let scan_id = result.scan_id.clone();
                    view! {
                        <h2 class=class_name>{result.class_name.clone()}</h2>
                        <p>{result.confidence_label()}</p>
                        {scan_id.map(|id| view! { <p class="scan-id">"Scan reference: " {id}</p> })}
                    }
                    .into_view()
                }
                None => view! { <p>"No prediction yet."</p> }.into_view(),
            }}
            <button class="back-btn" on:click=move |_| on_back.call(())>
                "← Upload Another"
            </button>
        </div>
    }
}
