use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Media kind of a catalog entry; doubles as the upstream path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discoverable title as shown in the host catalog.
///
/// `name` carries the `" (Dub)"` suffix for dub variants; `url` is the
/// canonical metadata-detail URL embedding kind, id and the dub flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub url: String,
    pub image_url: String,
    pub description: String,
    pub is_dub: bool,
}

/// Result of a listing or search operation. Item order is significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub list: Vec<CatalogItem>,
    pub has_next_page: bool,
}

impl CatalogPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One playable unit of a title: the movie itself, or a single episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayableEntry {
    pub name: String,
    /// Opaque locator consumed by the stream resolver.
    pub locator: String,
}

/// Detail of a single title, entries latest-first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub entries: Vec<PlayableEntry>,
    pub is_dub: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtitle {
    pub file: String,
    pub label: String,
}

/// One playable stream URL contributed by a backend resolver.
///
/// Order within a resolved list reflects resolver priority, not quality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamCandidate {
    pub url: String,
    pub quality: String,
    pub original_url: String,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
    pub is_dub: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
}
