use crate::catalog::{ItemDetail, PlayableEntry};
use crate::error::{AppError, AppResult};
use crate::locator::StreamLocator;
use crate::metadata::MetadataClient;
use regex::Regex;
use std::sync::Arc;
use tracing::debug;

/// Expands a canonical item URL into an ordered list of playable entries:
/// one for a movie, one per non-special episode for a series.
pub struct DetailResolver {
    meta: Arc<MetadataClient>,
    id_pattern: Regex,
}

impl DetailResolver {
    pub fn new(meta: Arc<MetadataClient>) -> Self {
        Self {
            meta,
            id_pattern: Regex::new(r"(?:movie|tv)/(\d+)").expect("valid id pattern"),
        }
    }

    pub async fn get_detail(&self, url: &str) -> AppResult<ItemDetail> {
        let detail = self.meta.detail(url).await?;

        let is_movie = url.contains("movie");
        let is_dub = url.contains("dub=true");

        let id = self
            .id_pattern
            .captures(url)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| AppError::InvalidInput(format!("No numeric id in URL '{}'", url)))?;

        let base_name = detail.display_title().to_string();
        let name = if is_dub {
            format!("{} (Dub)", base_name)
        } else {
            base_name.clone()
        };
        let imdb_id = detail.imdb_id.clone().unwrap_or_default();

        let mut entries = if is_movie {
            let year = release_year(detail.release_date.as_deref(), "release_date")?;
            vec![PlayableEntry {
                name: if is_dub { "Movie (Dub)" } else { "Movie" }.to_string(),
                locator: StreamLocator::movie(base_name, year, id, imdb_id, is_dub).encode(),
            }]
        } else {
            let mut entries = Vec::new();
            for season in &detail.seasons {
                // Season 0 holds specials.
                if season.season_number == 0 {
                    continue;
                }
                let year = release_year(season.air_date.as_deref(), "air_date")?;
                for episode in 1..=season.episode_count {
                    let suffix = if is_dub { " (Dub)" } else { "" };
                    entries.push(PlayableEntry {
                        name: format!("S{} · E{}{}", season.season_number, episode, suffix),
                        locator: StreamLocator::episode(
                            base_name.clone(),
                            year.clone(),
                            id.clone(),
                            imdb_id.clone(),
                            season.season_number,
                            episode,
                            is_dub,
                        )
                        .encode(),
                    });
                }
            }
            entries
        };

        // Latest-first for consumer display.
        entries.reverse();
        debug!("Resolved {} playable entries for '{}'", entries.len(), name);

        Ok(ItemDetail {
            name,
            entries,
            is_dub,
        })
    }
}

/// Year component of an upstream date string ("2019-06-01" → "2019").
/// A missing or empty date is an error; upstream data is not repaired here.
fn release_year(date: Option<&str>, field: &str) -> AppResult<String> {
    date.and_then(|d| d.split('-').next())
        .filter(|year| !year.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidInput(format!("Missing or malformed {}", field)))
}
