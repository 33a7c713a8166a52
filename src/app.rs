//! Post Manager Frontend App
//!
//! View shell: routes between the landing page and the two list views.

use leptos::ev;
use leptos::prelude::*;

use crate::api::HttpGateway;
use crate::components::{Homepage, Navbar, PostList, UserList};
use crate::config::AppConfig;
use crate::context::{current_route, AppContext};
use crate::routing::Route;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, set_route) = signal(current_route());
    let ctx = AppContext::new((route, set_route));

    // Provide context to all children
    provide_context(ctx);
    provide_context(HttpGateway::new(config.api_base_url.clone()));
    provide_context(config);

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());
    on_cleanup(move || popstate.remove());

    // Only a change of view remounts; a filter change stays inside PostList
    let view_root = Memo::new(move |_| match route.get() {
        Route::Posts { .. } => Route::Posts { user_id: None },
        other => other,
    });

    view! {
        <div class="app">
            {move || match view_root.get() {
                Route::Home => view! { <Homepage /> }.into_any(),
                Route::Users => view! {
                    <Navbar />
                    <UserList />
                }.into_any(),
                Route::Posts { .. } => view! {
                    <Navbar />
                    <PostList />
                }.into_any(),
            }}
        </div>
    }
}
