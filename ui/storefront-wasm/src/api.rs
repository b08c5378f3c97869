//! HTTP API client.
//!
//! `CatalogApi` is the seam the loaders fetch through; `HttpCatalog` is the
//! browser implementation backed by `fetch`.

use crate::error::ApiError;
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use sf_api_types::{
    BRANDS_PATH, Brand, HOT_DROPS_PATH, HotDrop, INSPIRATION_PATH, InspirationItem, Product,
    ProductQuery,
};
use tracing::debug;

#[async_trait(?Send)]
pub trait CatalogApi {
    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError>;
    async fn brands(&self) -> Result<Vec<Brand>, ApiError>;
    async fn hot_drops(&self) -> Result<Vec<HotDrop>, ApiError>;
    async fn inspiration(&self) -> Result<Vec<InspirationItem>, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpCatalog {
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET a path and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let resp = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(&text)
    }
}

pub fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalog {
    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        self.get_json(&query.path()).await
    }

    async fn brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.get_json(BRANDS_PATH).await
    }

    async fn hot_drops(&self) -> Result<Vec<HotDrop>, ApiError> {
        self.get_json(HOT_DROPS_PATH).await
    }

    async fn inspiration(&self) -> Result<Vec<InspirationItem>, ApiError> {
        self.get_json(INSPIRATION_PATH).await
    }
}
