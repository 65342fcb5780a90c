use crate::catalog::{CatalogPage, ItemDetail, StreamCandidate};
use crate::config::{SourceConfig, SourcePreferences};
use crate::detail::DetailResolver;
use crate::error::AppResult;
use crate::http::{HttpClient, HttpGet};
use crate::listing::ListingAggregator;
use crate::metadata::MetadataClient;
use crate::streams::StreamResolver;
use async_trait::async_trait;
use std::sync::Arc;

use super::{ContentSource, Filter, FilterOption, FilterSelection, Preference, SourceInfo};

/// The XPrime source: TMDB-proxy discovery plus three-backend stream
/// resolution.
pub struct XprimeSource {
    listing: ListingAggregator,
    detail: DetailResolver,
    streams: StreamResolver,
}

impl XprimeSource {
    pub fn new() -> AppResult<Self> {
        let http: Arc<dyn HttpGet> = Arc::new(HttpClient::new()?);
        Ok(Self::with_http(
            http,
            SourceConfig::default(),
            SourcePreferences::default(),
        ))
    }

    /// Build against a custom transport and configuration (test seam).
    pub fn with_http(
        http: Arc<dyn HttpGet>,
        config: SourceConfig,
        prefs: SourcePreferences,
    ) -> Self {
        let meta = Arc::new(MetadataClient::new(
            http.clone(),
            config.metadata_base_url.clone(),
        ));
        Self {
            listing: ListingAggregator::new(meta.clone(), config.clone(), prefs),
            detail: DetailResolver::new(meta),
            streams: StreamResolver::new(http, config),
        }
    }
}

#[async_trait]
impl ContentSource for XprimeSource {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: "XPrime".to_string(),
            lang: "en".to_string(),
            base_url: "https://xprime.tv".to_string(),
            icon_url: "https://xprime.tv/favicon.ico".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    async fn get_popular(&self, page: u32) -> AppResult<CatalogPage> {
        Ok(self.listing.popular(page).await)
    }

    async fn get_latest_updates(&self, page: u32) -> AppResult<CatalogPage> {
        Ok(self.listing.latest(page).await)
    }

    async fn search(
        &self,
        query: &str,
        _page: u32,
        _filters: &[FilterSelection],
    ) -> AppResult<CatalogPage> {
        self.listing.search(query).await
    }

    async fn get_detail(&self, url: &str) -> AppResult<ItemDetail> {
        self.detail.get_detail(url).await
    }

    async fn get_video_list(&self, locator: &str) -> AppResult<Vec<StreamCandidate>> {
        self.streams.get_video_list(locator).await
    }

    fn filter_list(&self) -> Vec<Filter> {
        vec![Filter::Select {
            name: "Audio Language".to_string(),
            key: "audio_lang".to_string(),
            options: vec![
                FilterOption {
                    key: "dub".to_string(),
                    label: "English Dub".to_string(),
                },
                FilterOption {
                    key: "sub".to_string(),
                    label: "Original Sub".to_string(),
                },
                FilterOption {
                    key: "both".to_string(),
                    label: "Both".to_string(),
                },
            ],
            default_value: "dub".to_string(),
        }]
    }

    fn preferences(&self) -> Vec<Preference> {
        vec![
            Preference {
                key: "prefer_dub".to_string(),
                title: "Prefer Dubbed Content".to_string(),
                summary: "Show dubbed versions first when available".to_string(),
                default_value: true,
            },
            Preference {
                key: "dub_fallback".to_string(),
                title: "Sub Fallback".to_string(),
                summary: "Show sub version if dub not available".to_string(),
                default_value: true,
            },
        ]
    }
}
