mod utils;

use primewatch::locator::StreamLocator;
use primewatch::{
    AppError, ContentSource, MediaKind, SourceConfig, SourcePreferences, XprimeSource,
};
use serde_json::json;
use std::sync::Arc;
use utils::StubHttp;

fn source_with(stub: StubHttp) -> XprimeSource {
    XprimeSource::with_http(
        Arc::new(stub),
        SourceConfig::default(),
        SourcePreferences::default(),
    )
}

#[tokio::test]
async fn movie_detail_expands_to_exactly_one_entry() {
    let stub = StubHttp::new().with_json(
        "/movie/550",
        json!({
            "title": "Fight Club",
            "imdb_id": "tt0137523",
            "release_date": "1999-10-15"
        }),
    );
    let source = source_with(stub);

    let detail = source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/movie/550?dub=false")
        .await
        .unwrap();

    assert_eq!(detail.name, "Fight Club");
    assert!(!detail.is_dub);
    assert_eq!(detail.entries.len(), 1);
    assert_eq!(detail.entries[0].name, "Movie");

    let locator = StreamLocator::parse(&detail.entries[0].locator).unwrap();
    assert_eq!(locator.kind, MediaKind::Movie);
    assert_eq!(locator.title, "Fight Club");
    assert_eq!(locator.year, "1999");
    assert_eq!(locator.id, "550");
    assert_eq!(locator.imdb_id, "tt0137523");
    assert!(!locator.dub);
}

#[tokio::test]
async fn dubbed_movie_detail_carries_the_dub_flag_end_to_end() {
    let stub = StubHttp::new().with_json(
        "/movie/550",
        json!({
            "title": "Fight Club",
            "imdb_id": "tt0137523",
            "release_date": "1999-10-15"
        }),
    );
    let source = source_with(stub);

    let detail = source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/movie/550?dub=true")
        .await
        .unwrap();

    assert_eq!(detail.name, "Fight Club (Dub)");
    assert!(detail.is_dub);
    assert_eq!(detail.entries[0].name, "Movie (Dub)");
    assert!(detail.entries[0].locator.ends_with("/dub"));
    assert!(StreamLocator::parse(&detail.entries[0].locator).unwrap().dub);
}

#[tokio::test]
async fn series_detail_skips_specials_and_returns_entries_latest_first() {
    let stub = StubHttp::new().with_json(
        "/tv/70523",
        json!({
            "name": "Dark",
            "imdb_id": "tt5753856",
            "seasons": [
                // Specials are excluded even when their air_date is unusable.
                {"season_number": 0, "episode_count": 2, "air_date": null},
                {"season_number": 1, "episode_count": 2, "air_date": "2017-12-01"},
                {"season_number": 2, "episode_count": 3, "air_date": "2019-06-21"}
            ]
        }),
    );
    let source = source_with(stub);

    let detail = source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/tv/70523?dub=false")
        .await
        .unwrap();

    assert_eq!(detail.entries.len(), 5);
    let names: Vec<&str> = detail.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        ["S2 · E3", "S2 · E2", "S2 · E1", "S1 · E2", "S1 · E1"]
    );

    let newest = StreamLocator::parse(&detail.entries[0].locator).unwrap();
    assert_eq!(newest.kind, MediaKind::Tv);
    assert_eq!(newest.season, Some(2));
    assert_eq!(newest.episode, Some(3));
    assert_eq!(newest.year, "2019");

    let oldest = StreamLocator::parse(&detail.entries[4].locator).unwrap();
    assert_eq!(oldest.season, Some(1));
    assert_eq!(oldest.episode, Some(1));
    assert_eq!(oldest.year, "2017");
}

#[tokio::test]
async fn series_detail_fails_on_a_regular_season_without_air_date() {
    let stub = StubHttp::new().with_json(
        "/tv/999",
        json!({
            "name": "Fragile",
            "imdb_id": "tt0000001",
            "seasons": [
                {"season_number": 1, "episode_count": 4}
            ]
        }),
    );
    let source = source_with(stub);

    let err = source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/tv/999?dub=false")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn detail_rejects_urls_without_a_numeric_id() {
    let stub = StubHttp::new().with_json("/movie/latest", json!({"title": "Whatever"}));
    let source = source_with(stub);

    let err = source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/movie/latest?dub=false")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[tokio::test]
async fn detail_surfaces_metadata_failures() {
    let source = source_with(StubHttp::failing());

    assert!(source
        .get_detail("https://tmdb.hexa.watch/api/tmdb/movie/550?dub=false")
        .await
        .is_err());
}
