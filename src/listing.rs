use crate::catalog::{CatalogItem, CatalogPage, MediaKind};
use crate::config::{SourceConfig, SourcePreferences};
use crate::error::AppResult;
use crate::metadata::{ListingResponse, MetadataClient, VariantMapper};
use regex::Regex;
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// How many leading raw results get duplicated as dub variants ahead of the
/// full sub list.
const POPULAR_DUB_COUNT: usize = 10;
const LATEST_DUB_COUNT: usize = 8;
const SEARCH_DUB_COUNT: usize = 10;

#[derive(Debug, Clone, Copy)]
enum ListingFeed {
    Popular,
    Latest,
}

impl ListingFeed {
    fn dub_count(self) -> usize {
        match self {
            ListingFeed::Popular => POPULAR_DUB_COUNT,
            ListingFeed::Latest => LATEST_DUB_COUNT,
        }
    }
}

/// Orchestrates parallel metadata queries across both media kinds and merges
/// them into a single catalog page: dub duplicates first (when preferred),
/// then movies and series interleaved pairwise.
pub struct ListingAggregator {
    meta: Arc<MetadataClient>,
    config: SourceConfig,
    prefs: SourcePreferences,
}

impl ListingAggregator {
    pub fn new(meta: Arc<MetadataClient>, config: SourceConfig, prefs: SourcePreferences) -> Self {
        Self {
            meta,
            config,
            prefs,
        }
    }

    /// Popular titles across both kinds. Never fails: any upstream error
    /// collapses to an empty page.
    pub async fn popular(&self, page: u32) -> CatalogPage {
        match self.feed(ListingFeed::Popular, page).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Popular listing failed: {}", e);
                CatalogPage::empty()
            }
        }
    }

    /// Now-playing movies and airing-today series. Same failure policy as
    /// [`popular`](Self::popular).
    pub async fn latest(&self, page: u32) -> CatalogPage {
        match self.feed(ListingFeed::Latest, page).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Latest listing failed: {}", e);
                CatalogPage::empty()
            }
        }
    }

    async fn feed(&self, feed: ListingFeed, page: u32) -> AppResult<CatalogPage> {
        let (movie_resp, tv_resp) = match feed {
            ListingFeed::Popular => futures::join!(
                self.meta.popular(MediaKind::Movie, page),
                self.meta.popular(MediaKind::Tv, page)
            ),
            ListingFeed::Latest => futures::join!(
                self.meta.latest(MediaKind::Movie, page),
                self.meta.latest(MediaKind::Tv, page)
            ),
        };
        let movies = movie_resp?;
        let series = tv_resp?;

        let mut list = Vec::new();
        if self.prefs.prefer_dub {
            let count = feed.dub_count();
            list.extend(self.map_leading_dubs(&movies, MediaKind::Movie, count));
            list.extend(self.map_leading_dubs(&series, MediaKind::Tv, count));
        }

        let movie_items =
            VariantMapper::map_variants(&movies.results, MediaKind::Movie, false, &self.config);
        let series_items =
            VariantMapper::map_variants(&series.results, MediaKind::Tv, false, &self.config);
        list.extend(interleave(movie_items, series_items));

        Ok(CatalogPage {
            list,
            has_next_page: movies.page < movies.total_pages || series.page < series.total_pages,
        })
    }

    fn map_leading_dubs(
        &self,
        response: &ListingResponse,
        kind: MediaKind,
        count: usize,
    ) -> Vec<CatalogItem> {
        let cut = response.results.len().min(count);
        VariantMapper::map_variants(&response.results[..cut], kind, true, &self.config)
    }

    /// Search both kinds for a normalized query and interleave the results.
    /// Single-page; unlike the feeds, errors propagate to the caller.
    pub async fn search(&self, query: &str) -> AppResult<CatalogPage> {
        let cleaned = normalize_query(query);

        let (movies, series) = futures::join!(
            self.request_search(&cleaned, MediaKind::Movie, true),
            self.request_search(&cleaned, MediaKind::Tv, true)
        );

        Ok(CatalogPage {
            list: interleave(movies?, series?),
            has_next_page: false,
        })
    }

    /// One metadata search for one kind. With dub inclusion requested and
    /// the dub preference on, the first [`SEARCH_DUB_COUNT`] raw results are
    /// duplicated as dub variants ahead of the full sub list, so the same
    /// title can appear twice.
    async fn request_search(
        &self,
        query: &str,
        kind: MediaKind,
        include_dub: bool,
    ) -> AppResult<Vec<CatalogItem>> {
        let response = self.meta.search(kind, query, 1).await?;

        let mut results = Vec::new();
        if include_dub && self.prefs.prefer_dub {
            results.extend(self.map_leading_dubs(&response, kind, SEARCH_DUB_COUNT));
        }
        results.extend(VariantMapper::map_variants(
            &response.results,
            kind,
            false,
            &self.config,
        ));
        Ok(results)
    }
}

/// Alternating merge of two ordered lists: `movie[0], series[0], movie[1],
/// series[1], …`. Relative order within each input is preserved; the longer
/// list's tail appears alone.
pub(crate) fn interleave(movies: Vec<CatalogItem>, series: Vec<CatalogItem>) -> Vec<CatalogItem> {
    let mut merged = Vec::with_capacity(movies.len() + series.len());
    let mut movies = movies.into_iter();
    let mut series = series.into_iter();
    loop {
        match (movies.next(), series.next()) {
            (None, None) => break,
            (movie, show) => {
                merged.extend(movie);
                merged.extend(show);
            }
        }
    }
    merged
}

fn season_token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)\bseasons?\b").expect("valid season pattern"))
}

/// Strips standalone "season"/"seasons" tokens and collapses the remaining
/// whitespace: "Naruto Season 2" becomes "Naruto 2".
pub(crate) fn normalize_query(query: &str) -> String {
    let stripped = season_token_pattern().replace_all(query, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CatalogItem {
        CatalogItem {
            name: name.to_string(),
            url: format!("https://meta.example/{}", name),
            image_url: String::new(),
            description: String::new(),
            is_dub: false,
        }
    }

    fn names(items: &[CatalogItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn interleave_alternates_pairwise() {
        let merged = interleave(
            vec![item("m1"), item("m2")],
            vec![item("s1"), item("s2")],
        );
        assert_eq!(names(&merged), ["m1", "s1", "m2", "s2"]);
    }

    #[test]
    fn interleave_keeps_longer_tail() {
        let merged = interleave(
            vec![item("m1")],
            vec![item("s1"), item("s2"), item("s3")],
        );
        assert_eq!(names(&merged), ["m1", "s1", "s2", "s3"]);

        let merged = interleave(vec![item("m1"), item("m2")], Vec::new());
        assert_eq!(names(&merged), ["m1", "m2"]);
    }

    #[test]
    fn interleave_never_drops_items() {
        for (m, s) in [(0usize, 0usize), (1, 0), (0, 1), (5, 2), (2, 5), (4, 4)] {
            let movies: Vec<_> = (0..m).map(|i| item(&format!("m{}", i))).collect();
            let series: Vec<_> = (0..s).map(|i| item(&format!("s{}", i))).collect();
            assert_eq!(interleave(movies, series).len(), m + s);
        }
    }

    #[test]
    fn normalize_query_strips_season_tokens() {
        assert_eq!(normalize_query("Naruto Season 2"), "Naruto 2");
        assert_eq!(normalize_query("Naruto SEASONS 2"), "Naruto 2");
        assert_eq!(normalize_query("season of the witch"), "of the witch");
        assert_eq!(normalize_query("  Bleach  "), "Bleach");
    }

    #[test]
    fn normalize_query_keeps_embedded_words() {
        // Only standalone tokens are stripped.
        assert_eq!(normalize_query("Seasoning World"), "Seasoning World");
        assert_eq!(normalize_query("preseason"), "preseason");
    }
}
