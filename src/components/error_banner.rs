//! Error Banner Component

use leptos::prelude::*;

/// Inline error message with a dismiss button, hidden when `message` is `None`
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div class="error-message">
                {text}
                <button on:click=move |_| on_dismiss.run(())>"×"</button>
            </div>
        })
    }
}
