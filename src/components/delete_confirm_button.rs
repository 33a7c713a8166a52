//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms the button, ✓ deletes, ✗ backs out.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// Tooltip on the unarmed button, e.g. "Delete User"
    #[prop(into)]
    title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let title = StoredValue::new(title);

    let set_armed = move |ev: web_sys::MouseEvent, value: bool| {
        ev.stop_propagation();
        armed.set(value);
    };

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |ev| {
                            set_armed(ev, false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button class="cancel-btn" title="Cancel" on:click=move |ev| set_armed(ev, false)>
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="action-btn delete-btn"
                    title=title.get_value()
                    on:click=move |ev| set_armed(ev, true)
                >
                    <i class="fi fi-rr-trash"></i>
                    <span>"Delete"</span>
                </button>
            }
            .into_any()
        }
    }
}
