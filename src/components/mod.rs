//! UI Components
//!
//! Leptos views over the controllers.

mod delete_confirm_button;
mod error_banner;
mod homepage;
mod link;
mod navbar;
mod pagination_bar;
mod post_form;
mod post_list;
mod user_form;
mod user_list;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use homepage::Homepage;
pub use link::Link;
pub use navbar::Navbar;
pub use pagination_bar::PaginationBar;
pub use post_form::PostForm;
pub use post_list::PostList;
pub use user_form::UserForm;
pub use user_list::UserList;
