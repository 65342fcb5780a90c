use serde::{Deserialize, Serialize};

/// Upstream endpoints the source talks to.
///
/// Defaults point at the production services; tests swap them for stub
/// transports instead of overriding the URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// TMDB-backed metadata proxy.
    pub metadata_base_url: String,
    /// Shared base of the three stream-backend services.
    pub stream_base_url: String,
    /// Prefix for poster/backdrop paths returned by the metadata proxy.
    pub image_base_url: String,
    /// Origin sent as `Referer`/`Origin` with Primenet/Phoenix streams.
    pub content_origin: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            metadata_base_url: "https://tmdb.hexa.watch/api/tmdb".to_string(),
            stream_base_url: "https://backend.xprime.tv".to_string(),
            image_base_url: "https://image.tmdb.org/t/p/w500".to_string(),
            content_origin: "https://xprime.tv".to_string(),
        }
    }
}

/// User-facing toggles, read-only during a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePreferences {
    /// Show dubbed variants first in listings and search.
    pub prefer_dub: bool,
    /// Fall back to the sub variant when a dub resolves to no streams.
    pub dub_fallback: bool,
}

impl Default for SourcePreferences {
    fn default() -> Self {
        Self {
            prefer_dub: true,
            dub_fallback: true,
        }
    }
}
