use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Instant;

use crate::config::CatalogConfig;

use super::error::RemoteError;
use super::traits::PictogramCatalog;
use super::types::{PictogramId, PictogramRecord};

/// URL templates of the catalog. Pure, no network access.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEndpoints {
    api_url: String,
    image_url: String,
    language_in_path: bool,
}

impl CatalogEndpoints {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            image_url: config.image_url.clone(),
            language_in_path: config.language_in_path,
        }
    }

    /// `<api_url>/search/<query>`, or `<api_url>/<language>/search/<query>`
    /// when the language goes in the path. The query is percent-encoded as
    /// a single path segment. `.` and `..` would be dropped by URL
    /// normalization, so they are refused.
    pub fn search_url(&self, query: &str, language: &str) -> Result<Url, RemoteError> {
        let invalid = || RemoteError::InvalidUrl {
            url: self.api_url.clone(),
        };
        if matches!(query, "." | "..") {
            return Err(invalid());
        }
        let mut url = Url::parse(&self.api_url).map_err(|_| invalid())?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
            segments.pop_if_empty();
            if self.language_in_path {
                segments.push(language);
            }
            segments.push("search").push(query);
        }
        Ok(url)
    }

    /// Canonical 500px image address of a pictogram.
    pub fn image_url(&self, id: &PictogramId) -> String {
        format!("{}/{}/{}_500.png", self.image_url.trim_end_matches('/'), id, id)
    }
}

/// HTTP client for the pictogram catalog.
///
/// Every call is an independent request: no retry, no cache, no timeout
/// beyond the transport defaults.
pub struct CatalogClient {
    client: Client,
    endpoints: CatalogEndpoints,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(concat!("pictopick/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Transport)?;

        Ok(Self {
            client,
            endpoints: CatalogEndpoints::new(config),
        })
    }

    pub fn endpoints(&self) -> &CatalogEndpoints {
        &self.endpoints
    }

    async fn fetch(&self, query: &str, language: &str) -> Result<Vec<PictogramRecord>, RemoteError> {
        let url = self.endpoints.search_url(query, language)?;

        tracing::debug!(url = %url, language = %language, "Sending pictogram search");

        let start = Instant::now();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(RemoteError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, query = %query, "Pictogram search rejected");
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(RemoteError::Transport)?;
        let records: Vec<PictogramRecord> = serde_json::from_slice(&body)
            .map_err(|e| RemoteError::MalformedBody(e.to_string()))?;

        tracing::info!(
            query = %query,
            count = records.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Pictogram search completed"
        );

        Ok(records)
    }
}

#[async_trait]
impl PictogramCatalog for CatalogClient {
    async fn search(&self, query: &str, language: &str) -> Result<Vec<PictogramRecord>, RemoteError> {
        let result = self.fetch(query, language).await;
        if let Err(err) = &result {
            tracing::error!(error = %err, query = %query, "Pictogram search failed");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(language_in_path: bool) -> CatalogEndpoints {
        CatalogEndpoints::new(&CatalogConfig {
            api_url: "https://api.example.org/api/pictograms".to_string(),
            image_url: "https://static.example.org/pictograms/".to_string(),
            language_in_path,
        })
    }

    #[test]
    fn search_url_encodes_query_as_one_segment() {
        let url = endpoints(false).search_url("pomme de terre/frite", "fr").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.org/api/pictograms/search/pomme%20de%20terre%2Ffrite"
        );
    }

    #[test]
    fn search_url_with_language_segment() {
        let url = endpoints(true).search_url("chat", "fr").unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/api/pictograms/fr/search/chat");
    }

    #[test]
    fn search_url_tolerates_trailing_slash() {
        let endpoints = CatalogEndpoints::new(&CatalogConfig {
            api_url: "https://api.example.org/p/".to_string(),
            ..CatalogConfig::default()
        });
        let url = endpoints.search_url("chat", "fr").unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/p/search/chat");
    }

    #[test]
    fn non_hierarchical_base_is_invalid() {
        let endpoints = CatalogEndpoints::new(&CatalogConfig {
            api_url: "mailto:someone@example.org".to_string(),
            ..CatalogConfig::default()
        });
        assert!(matches!(
            endpoints.search_url("chat", "fr"),
            Err(RemoteError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn dot_queries_never_lose_their_segment() {
        for query in [".", ".."] {
            assert!(matches!(
                endpoints(false).search_url(query, "fr"),
                Err(RemoteError::InvalidUrl { .. })
            ));
        }
        let url = endpoints(false).search_url("...", "fr").unwrap();
        assert_eq!(url.as_str(), "https://api.example.org/api/pictograms/search/...");
    }

    #[test]
    fn image_url_template() {
        let url = endpoints(false).image_url(&PictogramId::new("12345"));
        assert_eq!(url, "https://static.example.org/pictograms/12345/12345_500.png");
    }
}
