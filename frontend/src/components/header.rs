use leptos::*;
use crate::PageId;

/// Anchors in the brand bar; decorative, they do not change the page.
const SECTION_LINKS: [(&str, &str); 4] = [
    ("#models", "Models"),
    ("#research", "Research"),
    ("#science", "Science"),
    ("#about", "About"),
];

#[component]
pub fn PageHeader(
    #[prop(into)] active_page: Signal<PageId>,
    #[prop(into)] on_navigate: Callback<PageId>,
) -> impl IntoView {
    // Highlight only; the page itself belongs to App
    let nav_button = move |target: PageId| {
        view! {
            <button
                class=move || if active_page.get() == target { "active" } else { "" }
                on:click=move |_| {
                    log::debug!("🧭 Navigate to {}", target.label());
                    on_navigate.call(target);
                }
            >
                {target.icon()} " " {target.label()}
            </button>
        }
    };

    view! {
        <header class="header">
            <div class="logo">"🧠 BrainAI"</div>
            <ul class="nav-links">
                {SECTION_LINKS
                    .into_iter()
                    .map(|(href, label)| view! { <li><a href=href>{label}</a></li> })
                    .collect_view()}
            </ul>
            <nav>
                {PageId::NAVIGABLE.into_iter().map(nav_button).collect_view()}
            </nav>
        </header>
    }
}
