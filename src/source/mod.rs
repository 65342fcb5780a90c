mod xprime;

pub use xprime::XprimeSource;

use crate::catalog::{CatalogPage, ItemDetail, StreamCandidate};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;

/// Static descriptor of a content source, surfaced to the host catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceInfo {
    pub name: String,
    pub lang: String,
    pub base_url: String,
    pub icon_url: String,
    pub version: String,
}

/// One selectable option of a select filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOption {
    pub key: String,
    pub label: String,
}

/// Declarative filter control exposed to the host UI. Data only; the host
/// renders it and hands chosen values back through [`FilterSelection`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    Select {
        name: String,
        key: String,
        options: Vec<FilterOption>,
        default_value: String,
    },
}

/// A filter value chosen by the user, passed into search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterSelection {
    pub key: String,
    pub value: String,
}

/// Declarative boolean preference exposed to the host settings UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preference {
    pub key: String,
    pub title: String,
    pub summary: String,
    pub default_value: bool,
}

/// Capability interface the host framework drives. One concrete type per
/// source; unsupported hooks keep their defaulted `NotImplemented` error.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn info(&self) -> SourceInfo;

    fn supports_latest(&self) -> bool {
        true
    }

    /// Popular titles. Implementations must not fail: upstream errors
    /// collapse to an empty page.
    async fn get_popular(&self, page: u32) -> AppResult<CatalogPage>;

    /// Recently released titles. Same failure policy as
    /// [`get_popular`](Self::get_popular).
    async fn get_latest_updates(&self, page: u32) -> AppResult<CatalogPage>;

    /// Free-text search. Unlike the listing feeds, failures surface.
    async fn search(
        &self,
        query: &str,
        page: u32,
        filters: &[FilterSelection],
    ) -> AppResult<CatalogPage>;

    /// Expand a canonical item URL into its playable entries.
    async fn get_detail(&self, url: &str) -> AppResult<ItemDetail>;

    /// Resolve a playable-entry locator into stream candidates.
    async fn get_video_list(&self, locator: &str) -> AppResult<Vec<StreamCandidate>>;

    /// Request headers for direct media access.
    fn get_headers(&self, _url: &str) -> AppResult<HashMap<String, String>> {
        Err(AppError::NotImplemented(
            "get_headers not supported by this source".to_string(),
        ))
    }

    /// Novel text content.
    async fn get_html_content(&self, _url: &str) -> AppResult<String> {
        Err(AppError::NotImplemented(
            "get_html_content not supported by this source".to_string(),
        ))
    }

    /// Reader-ready cleanup of fetched text content.
    async fn clean_html_content(&self, _html: &str) -> AppResult<String> {
        Err(AppError::NotImplemented(
            "clean_html_content not supported by this source".to_string(),
        ))
    }

    /// Manga chapter pages.
    async fn get_page_list(&self, _url: &str) -> AppResult<Vec<String>> {
        Err(AppError::NotImplemented(
            "get_page_list not supported by this source".to_string(),
        ))
    }

    fn filter_list(&self) -> Vec<Filter>;

    fn preferences(&self) -> Vec<Preference>;
}
