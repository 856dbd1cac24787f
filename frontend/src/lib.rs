//! BrainAI - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that uploads an MRI scan to the prediction
//! service and shows the predicted tumor class with its confidence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (AppState)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PageHeader (Home / About navigation)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingView | InfoView | ResultView   (by PageId)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadWidget (modal, when open)                             │
//! │  ErrorBanner (when an error is set)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (PageId, PredictionResult, AppError, etc.)
//! - [`state`] - The single state holder and its transitions
//! - [`components`] - UI components (PageHeader, UploadWidget, etc.)
//! - [`services`] - Prediction service communication

use leptos::*;
use leptos_meta::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Navigation
    PageId,
    // Upload
    FileInfo, UploadedFile,
    // API
    PredictionResult,
    // Errors
    AppError, AppResult,
};

// State
pub use state::AppState;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install console hooks and mount [`App`] on `<body>`.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🧠 BrainAI - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Global state for the application
    let (state, set_state) = create_signal(AppState::default());

    let page = Signal::derive(move || state.with(|s| s.page));
    let prediction = Signal::derive(move || state.with(|s| s.prediction.clone()));
    let error_message = Signal::derive(move || state.with(AppState::error_message));

    let on_navigate = Callback::new(move |page: PageId| set_state.update(|s| s.set_page(page)));
    let on_try = Callback::new(move |_: ()| set_state.update(AppState::request_upload_flow));
    let on_close = Callback::new(move |_: ()| set_state.update(AppState::close_upload_flow));
    let on_back = Callback::new(move |_: ()| set_state.update(|s| s.set_page(PageId::Home)));
    let on_dismiss = Callback::new(move |_: ()| set_state.update(AppState::dismiss_error));
    let on_file = Callback::new(move |file: UploadedFile| submit_file(set_state, file));

    view! {
        <Title text=APP_TITLE/>
        <div class="app">
            <PageHeader active_page=page on_navigate=on_navigate/>

            {move || match page.get() {
                PageId::Home => view! { <LandingView on_try=on_try/> }.into_view(),
                PageId::About => view! { <InfoView/> }.into_view(),
                PageId::Result => view! { <ResultView prediction=prediction on_back=on_back/> }.into_view(),
            }}

            <Show
                when=move || state.with(|s| s.modal_open)
                fallback=|| view! { }
            >
                <UploadWidget on_close=on_close on_file=on_file/>
            </Show>

            <ErrorBanner message=error_message on_dismiss=on_dismiss/>
        </div>
    }
}

/// Validate `file` and, when accepted, send it to the prediction service.
///
/// Not cancelled on navigation; a concurrent submission that resolves
/// later overwrites the earlier result.
fn submit_file(set_state: WriteSignal<AppState>, file: UploadedFile) {
    let mut admitted = false;
    set_state.update(|s| admitted = s.admit_upload(file.info()));
    if !admitted {
        return;
    }

    spawn_local(async move {
        let outcome = predict(&file, &predict_endpoint()).await;
        set_state.update(|s| s.apply_prediction(outcome));
    });
}
