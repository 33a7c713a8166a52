//! HTTP Gateway
//!
//! `reqwest` implementation of the gateway traits. On wasm32 reqwest
//! drives the browser `fetch` API.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{Gateway, PostGateway};
use crate::error::GatewayError;
use crate::models::{Post, Resource};

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// `{base}/{path}`
    pub fn collection_url<R: Resource>(&self) -> String {
        format!("{}/{}", self.base_url, R::PATH)
    }

    /// `{base}/{path}/{id}`
    pub fn entity_url<R: Resource>(&self, id: u32) -> String {
        format!("{}/{}/{}", self.base_url, R::PATH, id)
    }
}

/// Reject non-2xx responses, then decode the JSON body
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {status}"));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

#[async_trait(?Send)]
impl<R: Resource> Gateway<R> for HttpGateway {
    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        let fetch = |detail| GatewayError::Fetch { resource: R::LABEL, detail };
        let url = self.collection_url::<R>();
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|e| fetch(e.to_string()))?;
        read_json(response).await.map_err(fetch)
    }

    async fn get(&self, id: u32) -> Result<R, GatewayError> {
        let fetch = |detail| GatewayError::Fetch { resource: R::LABEL, detail };
        let url = self.entity_url::<R>(id);
        log::debug!("GET {url}");

        let response = self.client.get(&url).send().await.map_err(|e| fetch(e.to_string()))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound { resource: R::LABEL, id });
        }
        read_json(response).await.map_err(fetch)
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError> {
        let failed = |detail| GatewayError::Create { resource: R::LABEL, detail };
        let url = self.collection_url::<R>();
        log::debug!("POST {url}");

        // .json() also sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;
        read_json(response).await.map_err(failed)
    }

    async fn update(&self, id: u32, patch: &R::Patch) -> Result<R, GatewayError> {
        let failed = |detail| GatewayError::Update { resource: R::LABEL, detail };
        let url = self.entity_url::<R>(id);
        log::debug!("PUT {url}");

        let response = self
            .client
            .put(&url)
            .json(patch)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;
        read_json(response).await.map_err(failed)
    }

    async fn delete(&self, id: u32) -> Result<(), GatewayError> {
        let failed = |detail| GatewayError::Delete { resource: R::LABEL, detail };
        let url = self.entity_url::<R>(id);
        log::debug!("DELETE {url}");

        let response = self.client.delete(&url).send().await.map_err(|e| failed(e.to_string()))?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(failed(format!("HTTP {status}")))
        }
    }
}

#[async_trait(?Send)]
impl PostGateway for HttpGateway {
    async fn list_by_user(&self, user_id: u32) -> Result<Vec<Post>, GatewayError> {
        let fetch = |detail| GatewayError::Fetch { resource: Post::LABEL, detail };
        let url = self.collection_url::<Post>();
        log::debug!("GET {url}?userId={user_id}");

        let response = self
            .client
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await
            .map_err(|e| fetch(e.to_string()))?;
        read_json(response).await.map_err(fetch)
    }
}
