//! Landing page with the upload call-to-action

use leptos::*;

#[component]
pub fn LandingView(#[prop(into)] on_try: Callback<()>) -> impl IntoView {
    view! {
        <div class="home">
            <div class="hero">
                <h1>"AI-Powered Brain Tumor Detection"</h1>
                <p class="subtitle">"Upload an MRI scan for instant, accurate diagnosis"</p>
                <button class="try-btn" on:click=move |_| on_try.call(())>
                    "📤 Try Me"
                </button>
            </div>
        </div>
    }
}
