use crate::catalog::MediaKind;
use crate::error::{AppError, AppResult};
use crate::http::HttpGet;
use serde::de::DeserializeOwned;
use std::sync::Arc;

use super::models::{ListingResponse, TitleDetail};

/// Thin query layer over the TMDB-backed metadata proxy.
///
/// Builds URLs, performs one GET per call through the transport seam and
/// parses the JSON body. Performs no recovery; failures propagate to the
/// caller.
pub struct MetadataClient {
    http: Arc<dyn HttpGet>,
    base_url: String,
}

impl MetadataClient {
    pub fn new(http: Arc<dyn HttpGet>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub async fn search(
        &self,
        kind: MediaKind,
        query: &str,
        page: u32,
    ) -> AppResult<ListingResponse> {
        let url = format!(
            "{}/search/{}?language=en-US&query={}&page={}&include_adult=false",
            self.base_url,
            kind,
            urlencoding::encode(query),
            page
        );

        log::info!("Metadata: searching {} for '{}'", kind, query);
        self.fetch(&url, "search").await
    }

    pub async fn popular(&self, kind: MediaKind, page: u32) -> AppResult<ListingResponse> {
        let url = format!(
            "{}/{}/popular?language=en-US&page={}",
            self.base_url, kind, page
        );

        log::info!("Metadata: fetching popular {} page {}", kind, page);
        self.fetch(&url, "popular").await
    }

    pub async fn latest(&self, kind: MediaKind, page: u32) -> AppResult<ListingResponse> {
        let endpoint = match kind {
            MediaKind::Movie => "movie/now_playing",
            MediaKind::Tv => "tv/airing_today",
        };
        let url = format!(
            "{}/{}?language=en-US&page={}",
            self.base_url, endpoint, page
        );

        log::info!("Metadata: fetching latest {} page {}", kind, page);
        self.fetch(&url, "latest").await
    }

    /// Fetch a detail object from a canonical item URL verbatim.
    pub async fn detail(&self, url: &str) -> AppResult<TitleDetail> {
        log::info!("Metadata: fetching detail {}", url);
        self.fetch(url, "detail").await
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str, what: &str) -> AppResult<T> {
        let body = self.http.get(url).await?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::SerializationError(format!("Failed to parse {} response: {}", what, e))
        })
    }
}
