//! Routes
//!
//! Addressable views and their URLs. Parsing takes the path and query
//! as plain strings so nothing here touches browser globals.

use percent_encoding::percent_decode_str;

/// Query parameter that seeds the post author filter
pub const USER_ID_PARAM: &str = "userId";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Users,
    Posts { user_id: Option<u32> },
}

impl Route {
    /// Resolve `location.pathname` and `location.search`
    ///
    /// Unknown paths fall back to the landing view. A `userId` that is
    /// not a positive integer is ignored.
    pub fn parse(path: &str, query: &str) -> Self {
        match path.trim_end_matches('/') {
            "/users" => Self::Users,
            "/posts" => Self::Posts {
                user_id: query_param(query, USER_ID_PARAM)
                    .and_then(|value| value.parse::<u32>().ok())
                    .filter(|id| *id != 0),
            },
            _ => Self::Home,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Users => "/users".to_string(),
            Self::Posts { user_id: None } => "/posts".to_string(),
            Self::Posts { user_id: Some(id) } => format!("/posts?{USER_ID_PARAM}={id}"),
        }
    }

    /// Same view, ignoring query parameters (for nav highlighting)
    pub fn same_view(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Author filter carried by the URL
    pub fn user_filter(&self) -> Option<u32> {
        match self {
            Self::Posts { user_id } => *user_id,
            _ => None,
        }
    }
}

/// First value of `key` in a `?a=1&b=2` query string, percent-decoded
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(name, _)| decode(name) == key)
        .map(|(_, value)| decode(value))
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/", ""), Route::Home);
        assert_eq!(Route::parse("", ""), Route::Home);
        assert_eq!(Route::parse("/users", ""), Route::Users);
        assert_eq!(Route::parse("/users/", "?page=2"), Route::Users);
        assert_eq!(Route::parse("/posts", ""), Route::Posts { user_id: None });
        assert_eq!(Route::parse("/nowhere", ""), Route::Home);
    }

    #[test]
    fn test_parse_user_filter() {
        assert_eq!(Route::parse("/posts", "?userId=3"), Route::Posts { user_id: Some(3) });
        assert_eq!(Route::parse("/posts", "?sort=asc&userId=12"), Route::Posts { user_id: Some(12) });
        assert_eq!(Route::parse("/posts", "?userId=abc"), Route::Posts { user_id: None });
        assert_eq!(Route::parse("/posts", "?userId=0"), Route::Posts { user_id: None });
        assert_eq!(Route::parse("/posts", "?userId"), Route::Posts { user_id: None });
        assert_eq!(Route::parse("/users", "?userId=3").user_filter(), None);
    }

    #[test]
    fn test_href() {
        assert_eq!(Route::Home.href(), "/");
        assert_eq!(Route::Users.href(), "/users");
        assert_eq!(Route::Posts { user_id: None }.href(), "/posts");
        assert_eq!(Route::Posts { user_id: Some(5) }.href(), "/posts?userId=5");
    }

    #[test]
    fn test_query_param_decoding() {
        assert_eq!(query_param("?q=a%20b+c", "q").as_deref(), Some("a b c"));
        assert_eq!(query_param("?flag", "flag").as_deref(), Some(""));
        assert_eq!(query_param("", "q"), None);
    }

    #[test]
    fn test_same_view_ignores_filter() {
        assert!(Route::Posts { user_id: Some(1) }.same_view(&Route::Posts { user_id: None }));
        assert!(!Route::Users.same_view(&Route::Home));
    }
}
