//! Navigation Bar Component
//!
//! Shared top bar for the list views.

use leptos::prelude::*;

use crate::components::Link;
use crate::context::AppContext;
use crate::routing::Route;

const NAV_ITEMS: &[(Route, &str, &str)] = &[
    (Route::Home, "fi fi-rr-home", "Home"),
    (Route::Users, "fi fi-rr-users", "User Management"),
    (Route::Posts { user_id: None }, "fi fi-rr-document", "Post Management"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class="navbar">
            <div class="navbar-container">
                <div class="navbar-left">
                    {NAV_ITEMS.iter().map(move |(route, icon, label)| {
                        let route = *route;
                        let class = Signal::derive(move || {
                            if ctx.route.get().same_view(&route) {
                                "nav-link active".to_string()
                            } else {
                                "nav-link".to_string()
                            }
                        });
                        view! {
                            <Link route=route class=class>
                                <i class=*icon></i>
                                <span>{*label}</span>
                            </Link>
                        }
                    }).collect_view()}
                </div>
            </div>
        </nav>
    }
}
