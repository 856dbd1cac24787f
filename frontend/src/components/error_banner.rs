use leptos::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || message.with(Option::is_some)
            fallback=|| view! { }
        >
            <div class="error-banner">
                {move || message.get().unwrap_or_default()}
                <button on:click=move |_| on_dismiss.call(())>"×"</button>
            </div>
        </Show>
    }
}
