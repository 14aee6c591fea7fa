//! HTTP client for the parts catalog service.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use super::types::RawCatalogResponse;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("catalog request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("catalog returned HTTP {0}")]
    Status(StatusCode),

    #[error("catalog returned invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("catalog reported an error: {0}")]
    Upstream(String),

    #[error("ART_ID cannot be empty, 'None' or '0' (got '{0}')")]
    InvalidArticleId(String),
}

/// Whether an article id may be sent to the applicability endpoint.
pub fn is_valid_article_id(article_id: &str) -> bool {
    !(article_id.is_empty() || article_id == "0" || article_id.eq_ignore_ascii_case("none"))
}

/// Client for the catalog's search, OEM and applicability endpoints.
///
/// Every operation is a single GET with no retry.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    http: Client,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, proxies).
    pub fn with_http(base_url: impl Into<String>, http: Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Search by article number only.
    pub async fn search_part(&self, part_number: &str) -> Result<RawCatalogResponse, CatalogError> {
        let url = self.endpoint("tecdoc-search", &[("search_number", part_number)])?;
        self.fetch(url, "search_part").await
    }

    /// Search by article number scoped to one supplier.
    pub async fn search_part_with_supplier(
        &self,
        part_number: &str,
        supplier_id: &str,
        supplier_brand: &str,
    ) -> Result<RawCatalogResponse, CatalogError> {
        let url = self.endpoint(
            "tecdoc-search",
            &[
                ("search_number", part_number),
                ("sup_id", supplier_id),
                ("sup_code", supplier_brand),
                ("with_price_only", "false"),
                ("oem", "false"),
                ("oem_search_limit", "5"),
            ],
        )?;
        self.fetch(url, "search_part_with_supplier").await
    }

    /// OEM cross-reference numbers for an article.
    pub async fn get_oem_numbers(&self, article_id: &str) -> Result<RawCatalogResponse, CatalogError> {
        let url = self.endpoint("tecdoc-oem", &[("art_id", article_id)])?;
        self.fetch(url, "get_oem_numbers").await
    }

    /// Vehicles an article fits.
    ///
    /// Rejects an empty, `"0"` or `"none"` article id without touching the network.
    pub async fn get_applicability(
        &self,
        article_id: &str,
        article_number: &str,
        supplier_brand: &str,
    ) -> Result<RawCatalogResponse, CatalogError> {
        if !is_valid_article_id(article_id) {
            warn!(article_id, "Rejected applicability lookup");
            return Err(CatalogError::InvalidArticleId(article_id.to_string()));
        }

        let url = self.endpoint(
            "tecdoc-applicability",
            &[
                ("art_id", article_id),
                ("article", article_number),
                ("brand", supplier_brand),
            ],
        )?;
        self.fetch(url, "get_applicability").await
    }

    fn endpoint(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, CatalogError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&raw).map_err(|source| CatalogError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        url.query_pairs_mut().extend_pairs(query.iter());
        Ok(url)
    }

    async fn fetch(
        &self,
        url: Url,
        operation: &'static str,
    ) -> Result<RawCatalogResponse, CatalogError> {
        info!(operation, url = %url, "Catalog request");

        let result = self.send(url).await;
        if let Err(e) = &result {
            warn!(operation, error = %e, "Catalog request failed");
        }
        result
    }

    async fn send(&self, url: Url) -> Result<RawCatalogResponse, CatalogError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(CatalogError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        let body = response.bytes().await.map_err(CatalogError::Request)?;
        let raw: RawCatalogResponse = serde_json::from_slice(&body).map_err(CatalogError::Decode)?;

        if let Some(message) = raw.error_message() {
            if raw.items().is_empty() {
                return Err(CatalogError::Upstream(message));
            }
        }

        debug!(items = raw.items().len(), "Catalog response");
        Ok(raw)
    }
}
