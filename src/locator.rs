use crate::catalog::MediaKind;
use crate::error::{AppError, AppResult};

/// Every parameter needed to resolve playable streams for one movie or
/// episode, produced by the detail resolver and consumed by the stream
/// resolver.
///
/// The wire form is slash-delimited and order-sensitive:
///
/// ```text
/// movie/<title>/<year>/<id>/<imdb>[/dub]
/// tv/<title>/<year>/<id>/<imdb>/<season>/<episode>[/dub]
/// ```
///
/// The title segment is percent-encoded. `encode` and `parse` are a closed
/// pair and must stay symmetric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamLocator {
    pub kind: MediaKind,
    pub title: String,
    pub year: String,
    pub id: String,
    pub imdb_id: String,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub dub: bool,
}

impl StreamLocator {
    pub fn movie(title: String, year: String, id: String, imdb_id: String, dub: bool) -> Self {
        Self {
            kind: MediaKind::Movie,
            title,
            year,
            id,
            imdb_id,
            season: None,
            episode: None,
            dub,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn episode(
        title: String,
        year: String,
        id: String,
        imdb_id: String,
        season: u32,
        episode: u32,
        dub: bool,
    ) -> Self {
        Self {
            kind: MediaKind::Tv,
            title,
            year,
            id,
            imdb_id,
            season: Some(season),
            episode: Some(episode),
            dub,
        }
    }

    pub fn encode(&self) -> String {
        let mut parts = vec![
            self.kind.as_str().to_string(),
            urlencoding::encode(&self.title).into_owned(),
            self.year.clone(),
            self.id.clone(),
            self.imdb_id.clone(),
        ];
        if let (Some(season), Some(episode)) = (self.season, self.episode) {
            parts.push(season.to_string());
            parts.push(episode.to_string());
        }
        if self.dub {
            parts.push("dub".to_string());
        }
        parts.join("/")
    }

    pub fn parse(locator: &str) -> AppResult<Self> {
        let parts: Vec<&str> = locator.split('/').collect();

        let kind = match parts.first().copied() {
            Some("movie") => MediaKind::Movie,
            Some("tv") => MediaKind::Tv,
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "Unknown media kind in locator '{}'",
                    locator
                )))
            }
        };

        let required = match kind {
            MediaKind::Movie => 5,
            MediaKind::Tv => 7,
        };
        if parts.len() < required {
            return Err(AppError::InvalidInput(format!(
                "Locator '{}' has {} segments, expected at least {}",
                locator,
                parts.len(),
                required
            )));
        }

        let title = urlencoding::decode(parts[1])
            .map_err(|e| AppError::InvalidInput(format!("Malformed title segment: {}", e)))?
            .into_owned();

        let (season, episode) = match kind {
            MediaKind::Movie => (None, None),
            MediaKind::Tv => {
                let season = parts[5].parse::<u32>().map_err(|_| {
                    AppError::InvalidInput(format!("Malformed season segment '{}'", parts[5]))
                })?;
                let episode = parts[6].parse::<u32>().map_err(|_| {
                    AppError::InvalidInput(format!("Malformed episode segment '{}'", parts[6]))
                })?;
                (Some(season), Some(episode))
            }
        };

        Ok(Self {
            kind,
            title,
            year: parts[2].to_string(),
            id: parts[3].to_string(),
            imdb_id: parts[4].to_string(),
            season,
            episode,
            dub: parts.last().copied() == Some("dub"),
        })
    }

    /// Same locator with the dub flag cleared; the stream resolver's
    /// fallback path.
    pub fn as_sub(&self) -> Self {
        Self {
            dub: false,
            ..self.clone()
        }
    }
}
