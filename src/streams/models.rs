use crate::catalog::Subtitle;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Primebox returns a quality-label → URL map plus an optional subtitle
/// track list shared by every quality.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimeboxResponse {
    #[serde(default)]
    pub streams: BTreeMap<String, String>,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
}

/// Primenet exposes at most a single auto-quality URL.
#[derive(Debug, Clone, Deserialize)]
pub struct PrimenetResponse {
    #[serde(default)]
    pub url: Option<String>,
}

/// Phoenix: like Primenet, with a subtitle count gating the track list.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoenixResponse {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub subs: u32,
    #[serde(default)]
    pub subtitles: Vec<Subtitle>,
}
