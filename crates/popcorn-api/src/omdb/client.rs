//! OMDb (Open Movie Database) API client.
//!
//! OMDb requires an API key passed as a query parameter on every request.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::types::{OmdbDetailResponse, OmdbSearchResponse};
use crate::error::CatalogError;
use crate::traits::{MovieCatalog, MovieDetails, MovieSummary};

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// OMDb enforces no server-side timeout, so the client sets its own.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OMDb API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDb API key (required).
    pub api_key: String,
    /// Base URL override (default: https://www.omdbapi.com/).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// OMDb API client.
pub struct OmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let http = Client::builder().timeout(timeout).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key,
        })
    }

    /// Check the HTTP response for errors and return it on success.
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status.as_u16() == 401 {
            return Err(CatalogError::InvalidKey);
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "OMDb API error");
        Err(CatalogError::Api {
            status: status.as_u16(),
            message: body,
        })
    }
}

impl MovieCatalog for OmdbClient {
    async fn search_movies(&self, query: &str) -> Result<Vec<MovieSummary>, CatalogError> {
        tracing::debug!(query, "OMDb title search");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("s", query)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: OmdbSearchResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("bad search response: {e}")))?;

        if !body.is_success() {
            return Err(CatalogError::NotFound);
        }

        // Provider-returned order is preserved.
        Ok(body
            .search
            .into_iter()
            .map(|item| item.into_summary())
            .collect())
    }

    async fn get_movie(&self, imdb_id: &str) -> Result<MovieDetails, CatalogError> {
        tracing::debug!(imdb_id, "OMDb detail lookup");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", imdb_id)])
            .send()
            .await?;

        let resp = Self::check_response(resp).await?;
        let body: OmdbDetailResponse = resp
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("bad detail response: {e}")))?;

        if !body.is_success() {
            return Err(CatalogError::NotFound);
        }

        Ok(body.into_details())
    }
}
