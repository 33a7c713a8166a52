//! Homepage Component
//!
//! Landing view with entry cards for both list views.

use leptos::prelude::*;

use crate::components::Link;
use crate::routing::Route;

#[component]
fn NavCard(route: Route, icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <Link route=route class=Signal::stored("nav-card".to_string())>
            <div class="nav-card-icon">
                <i class=icon></i>
            </div>
            <h3 class="nav-card-title">{title}</h3>
            <p class="nav-card-description">{description}</p>
            <div class="nav-card-arrow">
                <i class="fi fi-rr-arrow-right"></i>
            </div>
        </Link>
    }
}

#[component]
pub fn Homepage() -> impl IntoView {
    view! {
        <div class="homepage">
            <div class="hero-section">
                <h1 class="hero-title">"User & Post Manager"</h1>
                <p class="hero-subtitle">
                    "Manage users and posts of a remote REST API: create, edit, delete and browse them page by page."
                </p>

                <div class="navigation-section">
                    <h2 class="navigation-title">"Get Started"</h2>
                    <div class="navigation-cards">
                        <NavCard
                            route=Route::Users
                            icon="fi fi-rr-users"
                            title="Manage Users"
                            description="Create, edit, and manage user accounts."
                        />
                        <NavCard
                            route=Route::Posts { user_id: None }
                            icon="fi fi-rr-document"
                            title="Manage Posts"
                            description="Organize posts and see who wrote them."
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
