pub mod models;

use crate::catalog::{MediaKind, StreamCandidate};
use crate::config::SourceConfig;
use crate::error::{AppError, AppResult};
use crate::http::HttpGet;
use crate::locator::StreamLocator;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

use models::{PhoenixResponse, PrimeboxResponse, PrimenetResponse};

/// The three backend resolver services, in merge-priority order. Each is a
/// path segment of the shared stream base URL.
const PRIMEBOX: &str = "primebox";
const PRIMENET: &str = "primenet";
const PHOENIX: &str = "phoenix";

/// Resolves one playable-entry locator into stream candidates by fanning out
/// to the three backend services and merging whatever answers.
///
/// Each branch is failure-isolated: a dead or garbled backend contributes
/// zero candidates and never cancels its siblings. Merge order is fixed
/// (Primebox, Primenet, Phoenix) regardless of arrival order.
pub struct StreamResolver {
    http: Arc<dyn HttpGet>,
    config: SourceConfig,
}

impl StreamResolver {
    pub fn new(http: Arc<dyn HttpGet>, config: SourceConfig) -> Self {
        Self { http, config }
    }

    pub async fn get_video_list(&self, locator: &str) -> AppResult<Vec<StreamCandidate>> {
        let parsed = StreamLocator::parse(locator)?;

        let mut streams = self.resolve(&parsed).await;
        if parsed.dub && streams.is_empty() {
            // Single-level fallback: retry once as the sub variant.
            warn!("No dub streams for '{}', falling back to sub", parsed.title);
            streams = self.resolve(&parsed.as_sub()).await;
        }

        Ok(streams)
    }

    async fn resolve(&self, locator: &StreamLocator) -> Vec<StreamCandidate> {
        let primebox_url = self.backend_url(PRIMEBOX, locator);
        let primenet_url = self.backend_url(PRIMENET, locator);
        let phoenix_url = self.backend_url(PHOENIX, locator);
        let (primebox, primenet, phoenix) = futures::join!(
            self.http.get(&primebox_url),
            self.http.get(&primenet_url),
            self.http.get(&phoenix_url)
        );

        let mut merged = Vec::new();
        merged.extend(self.primebox_candidates(primebox, locator.dub));
        merged.extend(self.primenet_candidates(primenet, locator.dub));
        merged.extend(self.phoenix_candidates(phoenix, locator.dub));
        merged
    }

    /// All three services share one query shape and differ only by the
    /// service segment.
    fn backend_url(&self, service: &str, locator: &StreamLocator) -> String {
        let mut url = format!(
            "{}/{}?name={}&fallback_year={}&id={}&imdb={}",
            self.config.stream_base_url,
            service,
            urlencoding::encode(&locator.title),
            locator.year,
            locator.id,
            locator.imdb_id
        );
        if locator.dub {
            url.push_str("&dub=true&lang=en");
        }
        if locator.kind == MediaKind::Tv {
            if let (Some(season), Some(episode)) = (locator.season, locator.episode) {
                url.push_str(&format!("&season={}&episode={}", season, episode));
            }
        }
        url
    }

    fn primebox_candidates(
        &self,
        body: AppResult<String>,
        is_dub: bool,
    ) -> Vec<StreamCandidate> {
        match parse_body::<PrimeboxResponse>(body) {
            Ok(PrimeboxResponse { streams, subtitles }) => streams
                .into_iter()
                .map(|(quality, url)| StreamCandidate {
                    original_url: url.clone(),
                    url,
                    quality: labeled_quality("Primebox", &quality, is_dub),
                    subtitles: subtitles.clone(),
                    is_dub,
                    headers: None,
                })
                .collect(),
            Err(e) => {
                warn!("Failed to parse Primebox response: {}", e);
                Vec::new()
            }
        }
    }

    fn primenet_candidates(
        &self,
        body: AppResult<String>,
        is_dub: bool,
    ) -> Vec<StreamCandidate> {
        match parse_body::<PrimenetResponse>(body) {
            Ok(data) => match data.url.filter(|url| !url.is_empty()) {
                Some(url) => vec![StreamCandidate {
                    original_url: url.clone(),
                    url,
                    quality: labeled_quality("Primenet", "Auto", is_dub),
                    subtitles: Vec::new(),
                    is_dub,
                    headers: Some(self.origin_headers()),
                }],
                None => Vec::new(),
            },
            Err(e) => {
                warn!("Failed to parse Primenet response: {}", e);
                Vec::new()
            }
        }
    }

    fn phoenix_candidates(
        &self,
        body: AppResult<String>,
        is_dub: bool,
    ) -> Vec<StreamCandidate> {
        match parse_body::<PhoenixResponse>(body) {
            Ok(data) => match data.url.filter(|url| !url.is_empty()) {
                Some(url) => {
                    let subtitles = if data.subs > 0 {
                        data.subtitles
                    } else {
                        Vec::new()
                    };
                    vec![StreamCandidate {
                        original_url: url.clone(),
                        url,
                        quality: labeled_quality("Phoenix", "Auto", is_dub),
                        subtitles,
                        is_dub,
                        headers: Some(self.origin_headers()),
                    }]
                }
                None => Vec::new(),
            },
            Err(e) => {
                warn!("Failed to parse Phoenix response: {}", e);
                Vec::new()
            }
        }
    }

    fn origin_headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("Referer".to_string(), self.config.content_origin.clone()),
            ("Origin".to_string(), self.config.content_origin.clone()),
        ])
    }
}

fn parse_body<T: serde::de::DeserializeOwned>(body: AppResult<String>) -> AppResult<T> {
    body.and_then(|text| serde_json::from_str(&text).map_err(AppError::from))
}

fn labeled_quality(source: &str, quality: &str, is_dub: bool) -> String {
    let suffix = if is_dub { " (Dub)" } else { "" };
    format!("{} - {}{}", source, quality, suffix)
}
