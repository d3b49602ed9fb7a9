//! Category API client. Implements CategoryPort over reqwest.
//!
//! One GET per call against `{base}/categories...`; the decoded envelope is returned untouched.

use crate::domain::{ApiResponse, Category, CategoryNode, DomainError};
use crate::ports::CategoryPort;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP adapter for the remote category service.
///
/// Holds no state besides the shared `reqwest::Client`, so concurrent calls are independent.
/// Uses the transport's default timeout behaviour.
pub struct HttpCategoryClient {
    client: Client,
    base_url: Url,
}

impl HttpCategoryClient {
    /// Create a client for the given base address (e.g. "http://localhost:3003/api/v1").
    ///
    /// # Errors
    /// Returns `DomainError::Config` if `base_url` is not an absolute http(s) URL.
    pub fn new(base_url: &str) -> Result<Self, DomainError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`HttpCategoryClient::new`] with a caller-provided `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, DomainError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| DomainError::Config(format!("invalid API base URL {base_url:?}: {e}")))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Config(format!(
                "API base URL must be an http(s) address: {base_url:?}"
            )));
        }
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Base URL extended by `segments`, each percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn categories_url(&self, active: bool) -> Url {
        let mut url = self.endpoint(&["categories"]);
        url.query_pairs_mut()
            .append_pair("active", if active { "true" } else { "false" });
        url
    }

    async fn get_envelope<T>(&self, url: Url) -> Result<ApiResponse<T>, DomainError>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "GET category API");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "category API request failed");
            DomainError::Transport(format!("GET {url}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to read error response body");
                    String::new()
                }
            };
            warn!(status = %status, url = %url, "category API returned error");
            return Err(DomainError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| DomainError::Decode(format!("GET {url}: {e}")))
    }
}

#[async_trait::async_trait]
impl CategoryPort for HttpCategoryClient {
    async fn get_categories(
        &self,
        active: bool,
    ) -> Result<ApiResponse<Vec<Category>>, DomainError> {
        self.get_envelope(self.categories_url(active)).await
    }

    async fn get_category_tree(&self) -> Result<ApiResponse<Vec<CategoryNode>>, DomainError> {
        self.get_envelope(self.endpoint(&["categories", "tree"]))
            .await
    }

    async fn get_category_by_id(
        &self,
        category_id: &str,
    ) -> Result<ApiResponse<Category>, DomainError> {
        self.get_envelope(self.endpoint(&["categories", category_id]))
            .await
    }

    async fn get_category_by_slug(&self, slug: &str) -> Result<ApiResponse<Category>, DomainError> {
        self.get_envelope(self.endpoint(&["categories", "slug", slug]))
            .await
    }
}
