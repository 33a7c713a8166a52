//! Link Component
//!
//! Anchor that switches views through history instead of reloading.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::routing::Route;

/// In-app link to `route`
///
/// Keeps a real `href` so middle-click and "open in new tab" still work.
#[component]
pub fn Link(
    route: Route,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <a
            href=route.href()
            class=move || class.get()
            on:click=move |ev: web_sys::MouseEvent| {
                if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                    return;
                }
                ev.prevent_default();
                ctx.navigate(route);
            }
        >
            {children()}
        </a>
    }
}
