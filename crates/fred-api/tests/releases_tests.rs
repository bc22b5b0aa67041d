//! Integration tests for the release endpoints.

mod common;

use chrono::NaiveDate;
use common::{Harness, today};
use fred_api::{
    ListOptions, Realtime, ReleaseDatesOptions, ReleaseTablesOptions, SeriesListOptions,
    TagListOptions,
};

#[tokio::test]
async fn test_list_and_all_dates() {
    let harness = Harness::start().await;
    let releases = harness.client.releases();
    releases.list(&ListOptions::default()).await.unwrap();
    releases.all_dates(&ListOptions::default()).await.unwrap();

    let requests = harness.requests().await;
    assert_eq!(requests[0].path, "/fred/releases");
    assert_eq!(requests[0].param("order_by"), Some("release_id"));
    assert_eq!(requests[1].path, "/fred/releases/dates");
    assert_eq!(requests[1].param("order_by"), Some("release_id"));
    assert_eq!(requests[1].param("limit"), Some("1000"));
}

#[tokio::test]
async fn test_get_release_with_realtime() {
    let harness = Harness::start().await;
    let realtime = Realtime::between(NaiveDate::from_ymd_opt(2013, 8, 13).unwrap(), "2013-08-14");
    harness.client.releases().get(53, &realtime).await.unwrap();

    let request = harness.single_request().await;
    assert_eq!(request.path, "/fred/release");
    assert_eq!(request.param("release_id"), Some("53"));
    assert_eq!(request.param("realtime_start"), Some("2013-08-13"));
    assert_eq!(request.param("realtime_end"), Some("2013-08-14"));
    assert_eq!(request.param("limit"), None);
}

#[tokio::test]
async fn test_dates_flag_defaults_to_false() {
    let harness = Harness::start().await;
    let releases = harness.client.releases();
    releases
        .dates(82, &ReleaseDatesOptions::default())
        .await
        .unwrap();
    releases
        .dates(
            82,
            &ReleaseDatesOptions {
                include_release_dates_with_no_data: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let requests = harness.requests().await;
    assert_eq!(requests[0].path, "/fred/release/dates");
    assert_eq!(
        requests[0].param("include_release_dates_with_no_data"),
        Some("false")
    );
    assert_eq!(
        requests[1].param("include_release_dates_with_no_data"),
        Some("true")
    );
}

#[tokio::test]
async fn test_series_sources_tags_paths() {
    let harness = Harness::start().await;
    let releases = harness.client.releases();
    releases
        .series(51, &SeriesListOptions::default())
        .await
        .unwrap();
    releases.sources(51, &Realtime::default()).await.unwrap();
    releases
        .tags(86, &TagListOptions::default())
        .await
        .unwrap();
    releases
        .related_tags(
            86,
            &TagListOptions {
                tag_names: vec!["sa".to_string(), "foreign".to_string()],
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let requests = harness.requests().await;
    let paths: Vec<&str> = requests.iter().map(|r| r.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "/fred/release/series",
            "/fred/release/sources",
            "/fred/release/tags",
            "/fred/release/related_tags",
        ]
    );
    assert_eq!(requests[1].param("realtime_start"), Some(today().as_str()));
    assert_eq!(requests[3].param("tag_names"), Some("sa;foreign"));
}

#[tokio::test]
async fn test_tables_defaults() {
    let harness = Harness::start().await;
    harness
        .client
        .releases()
        .tables(53, &ReleaseTablesOptions::default())
        .await
        .unwrap();

    let request = harness.single_request().await;
    assert_eq!(request.path, "/fred/release/tables");
    assert_eq!(request.param("element_id"), None);
    assert_eq!(request.param("include_observation_values"), Some("false"));
    assert_eq!(request.param("observation_date"), Some("9999-12-31"));
}

#[tokio::test]
async fn test_tables_with_element() {
    let harness = Harness::start().await;
    let options = ReleaseTablesOptions {
        element_id: Some(12886),
        include_observation_values: true,
        observation_date: Some(NaiveDate::from_ymd_opt(2020, 4, 1).unwrap().into()),
    };
    harness.client.releases().tables(53, &options).await.unwrap();

    let request = harness.single_request().await;
    assert_eq!(request.param("element_id"), Some("12886"));
    assert_eq!(request.param("include_observation_values"), Some("true"));
    assert_eq!(request.param("observation_date"), Some("2020-04-01"));
}
