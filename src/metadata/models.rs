use serde::{Deserialize, Serialize};

// Response envelopes

/// Paged listing envelope returned by the metadata proxy for search,
/// popular and latest queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<RawTitle>,
    #[serde(default)]
    pub total_pages: u32,
}

/// One raw catalog record. Movies carry `title`/`release_date`, series
/// carry `name`/`first_air_date`; both share the image and overview fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTitle {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl RawTitle {
    /// `title` with `name` as the series-side fallback.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Poster path with the backdrop as fallback.
    pub fn image_path(&self) -> &str {
        self.poster_path
            .as_deref()
            .or(self.backdrop_path.as_deref())
            .unwrap_or_default()
    }
}

/// Detail object for a single movie or series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleDetail {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub seasons: Vec<Season>,
}

impl TitleDetail {
    /// `name` with `title` as the movie-side fallback. Note the reversed
    /// precedence relative to [`RawTitle::display_title`]; the detail
    /// endpoint favors the series field.
    pub fn display_title(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(default)]
    pub season_number: u32,
    #[serde(default)]
    pub episode_count: u32,
    #[serde(default)]
    pub air_date: Option<String>,
}
