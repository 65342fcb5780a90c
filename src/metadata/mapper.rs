use crate::catalog::{CatalogItem, MediaKind};
use crate::config::SourceConfig;

use super::models::RawTitle;

/// Maps raw metadata records into uniform catalog items, optionally tagging
/// them as dub variants.
pub struct VariantMapper;

impl VariantMapper {
    /// One catalog item per raw record, in input order. Missing upstream
    /// fields degrade to empty strings; nothing is validated here.
    pub fn map_variants(
        raw: &[RawTitle],
        kind: MediaKind,
        dub: bool,
        config: &SourceConfig,
    ) -> Vec<CatalogItem> {
        raw.iter()
            .map(|entry| {
                let base_name = entry.display_title();
                let name = if dub {
                    format!("{} (Dub)", base_name)
                } else {
                    base_name.to_string()
                };

                CatalogItem {
                    name,
                    url: format!(
                        "{}/{}/{}?dub={}",
                        config.metadata_base_url, kind, entry.id, dub
                    ),
                    image_url: format!("{}{}", config.image_base_url, entry.image_path()),
                    description: entry.overview.clone().unwrap_or_default(),
                    is_dub: dub,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: u64, title: Option<&str>, name: Option<&str>) -> RawTitle {
        RawTitle {
            id,
            title: title.map(String::from),
            name: name.map(String::from),
            overview: Some(format!("overview {}", id)),
            poster_path: Some(format!("/poster{}.jpg", id)),
            backdrop_path: None,
        }
    }

    #[test]
    fn output_length_matches_input_length() {
        let config = SourceConfig::default();
        let raws: Vec<RawTitle> = (0..7).map(|i| raw(i, Some("T"), None)).collect();
        for dub in [false, true] {
            let mapped = VariantMapper::map_variants(&raws, MediaKind::Movie, dub, &config);
            assert_eq!(mapped.len(), raws.len());
        }
        assert!(
            VariantMapper::map_variants(&[], MediaKind::Tv, true, &config).is_empty()
        );
    }

    #[test]
    fn dub_suffix_appears_iff_dub_flag_set() {
        let config = SourceConfig::default();
        let raws = vec![raw(42, None, Some("Dark"))];

        let sub = VariantMapper::map_variants(&raws, MediaKind::Tv, false, &config);
        assert_eq!(sub[0].name, "Dark");
        assert!(!sub[0].is_dub);
        assert!(sub[0].url.ends_with("/tv/42?dub=false"));

        let dub = VariantMapper::map_variants(&raws, MediaKind::Tv, true, &config);
        assert_eq!(dub[0].name, "Dark (Dub)");
        assert!(dub[0].is_dub);
        assert!(dub[0].url.ends_with("/tv/42?dub=true"));
    }

    #[test]
    fn missing_fields_degrade_to_empty_strings() {
        let config = SourceConfig::default();
        let bare = RawTitle {
            id: 9,
            title: None,
            name: None,
            overview: None,
            poster_path: None,
            backdrop_path: None,
        };

        let mapped = VariantMapper::map_variants(&[bare], MediaKind::Movie, false, &config);
        assert_eq!(mapped[0].name, "");
        assert_eq!(mapped[0].description, "");
        assert_eq!(mapped[0].image_url, config.image_base_url);
    }
}
