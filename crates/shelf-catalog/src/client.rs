//! HTTP client for the catalog's product search endpoint.

use std::time::Duration;

use reqwest::{Client, Url};
use shelf_core::{AppConfig, Product};

use crate::error::CatalogError;
use crate::normalize::normalize_product;
use crate::types::ApiProduct;

/// Header carrying the catalog API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

const SEARCH_PATH: &str = "products/search";

/// HTTP client for `GET /products/search`.
///
/// Non-2xx responses surface as [`CatalogError::Http`], transport failures
/// as [`CatalogError::Network`] and undecodable bodies as
/// [`CatalogError::Parse`]. A failed request is never turned into an empty
/// page. There is no retry: the picker retries implicitly when the user
/// scrolls again or changes the search term.
pub struct CatalogClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client rooted at `base_url` (e.g. `https://api.example.com/task`).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    /// - [`CatalogError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn new(
        api_key: &str,
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so joining the search path appends to the
        // base path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Creates a client from the catalog settings in [`AppConfig`].
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            &config.catalog_api_key,
            &config.catalog_base_url,
            config.catalog_request_timeout_secs,
            &config.catalog_user_agent,
        )
    }

    /// Fetches one page of products matching `term`.
    ///
    /// `page` is 1-based. The page is the last one when fewer than `limit`
    /// products come back (see [`crate::pagination::is_last_page`]).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Network`] on transport failure.
    /// - [`CatalogError::Http`] on any non-2xx status.
    /// - [`CatalogError::Parse`] if the body is not a product array.
    pub async fn fetch_page(
        &self,
        term: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Product>, CatalogError> {
        let url = self.search_url(term, page, limit)?;
        tracing::debug!(term, page, limit, "fetching catalog page");

        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::warn!(term, page, error = %e, "catalog request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(term, page, status = status.as_u16(), "catalog returned non-2xx");
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<Option<Vec<ApiProduct>>>(&body).map_err(|e| {
            CatalogError::Parse {
                context: format!("search page {page} for \"{term}\""),
                source: e,
            }
        })?;

        let products: Vec<Product> = parsed
            .unwrap_or_default()
            .into_iter()
            .map(normalize_product)
            .collect();

        tracing::debug!(term, page, count = products.len(), "catalog page received");
        Ok(products)
    }

    /// Builds the search URL for the given term, page, and page size.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if the search path cannot be
    /// joined onto the base URL.
    fn search_url(&self, term: &str, page: u32, limit: u32) -> Result<Url, CatalogError> {
        let mut url = self
            .base_url
            .join(SEARCH_PATH)
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("search", term)
            .append_pair("page", &page.to_string())
            .append_pair("limit", &limit.to_string());

        Ok(url)
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"[redacted]")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
