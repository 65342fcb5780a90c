//! XPrime content source: discovers movies and series through a TMDB-backed
//! metadata proxy and resolves playable streams by fanning out to three
//! independent backend services, tolerating any subset of them failing.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod listing;
pub mod locator;
pub mod metadata;
pub mod source;
pub mod streams;

pub use catalog::{
    CatalogItem, CatalogPage, ItemDetail, MediaKind, PlayableEntry, StreamCandidate, Subtitle,
};
pub use config::{SourceConfig, SourcePreferences};
pub use error::{AppError, AppResult};
pub use source::{ContentSource, Filter, FilterSelection, Preference, SourceInfo, XprimeSource};
