//! App Configuration
//!
//! Static settings provided to components via context.

use log::LevelFilter;

/// Remote REST API serving `/users` and `/posts`
pub const API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Rows per page in the user table
    pub users_per_page: usize,
    /// Cards per page in the post grid
    pub posts_per_page: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            users_per_page: 5,
            posts_per_page: 6,
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}
