//! REST Gateway
//!
//! Boundary to the remote resource API. One network round trip per
//! call, no retries, no caching.

mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::models::{Post, Resource};

pub use http::HttpGateway;

/// CRUD operations on one resource collection
///
/// Futures are not `Send`: on wasm32 they wrap browser `fetch` promises.
#[async_trait(?Send)]
pub trait Gateway<R: Resource> {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<R>, GatewayError>;

    /// Fetch one entity by ID
    async fn get(&self, id: u32) -> Result<R, GatewayError>;

    /// Create an entity, the server assigns its ID
    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError>;

    /// Replace the fields present in `patch`
    async fn update(&self, id: u32, patch: &R::Patch) -> Result<R, GatewayError>;

    /// Delete entity by ID
    async fn delete(&self, id: u32) -> Result<(), GatewayError>;
}

/// Extension for the post collection, which the server can filter by author
#[async_trait(?Send)]
pub trait PostGateway: Gateway<Post> {
    async fn list_by_user(&self, user_id: u32) -> Result<Vec<Post>, GatewayError>;
}
