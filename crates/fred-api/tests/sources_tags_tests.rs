//! Integration tests for the source and tag endpoints.

mod common;

use common::Harness;
use fred_api::{ListOptions, Paging, Realtime, SortOrder, TagListOptions, TagSeriesOptions};

#[tokio::test]
async fn test_sources() {
    let harness = Harness::start().await;
    let sources = harness.client.sources();
    sources.list(&ListOptions::default()).await.unwrap();
    sources.get(1, &Realtime::on("2020-01-01")).await.unwrap();
    sources
        .releases(
            1,
            &ListOptions {
                paging: Paging::default().sort_order(SortOrder::Desc),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let requests = harness.requests().await;
    assert_eq!(requests[0].path, "/fred/sources");
    assert_eq!(requests[0].param("order_by"), Some("source_id"));

    assert_eq!(requests[1].path, "/fred/source");
    assert_eq!(requests[1].param("source_id"), Some("1"));
    assert_eq!(requests[1].param("realtime_start"), Some("2020-01-01"));
    assert_eq!(requests[1].param("realtime_end"), Some("2020-01-01"));

    assert_eq!(requests[2].path, "/fred/source/releases");
    assert_eq!(requests[2].param("order_by"), Some("release_id"));
    assert_eq!(requests[2].param("sort_order"), Some("desc"));
}

#[tokio::test]
async fn test_tags_list_filters() {
    let harness = Harness::start().await;
    harness
        .client
        .tags()
        .list(&TagListOptions {
            tag_names: vec!["gdp".to_string(), "oecd".to_string()],
            tag_group_id: Some("src".to_string()),
            search_text: Some("growth".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let request = harness.single_request().await;
    assert_eq!(request.path, "/fred/tags");
    assert_eq!(request.param("tag_names"), Some("gdp;oecd"));
    assert_eq!(request.param("tag_group_id"), Some("src"));
    assert_eq!(request.param("search_text"), Some("growth"));
    assert_eq!(request.param("order_by"), Some("series_count"));
}

#[tokio::test]
async fn test_related_tags_and_series() {
    let harness = Harness::start().await;
    let tags = harness.client.tags();
    tags.related(&TagListOptions {
        tag_names: vec!["monetary aggregates".to_string(), "weekly".to_string()],
        exclude_tag_names: vec!["discontinued".to_string(), "currency".to_string()],
        ..Default::default()
    })
    .await
    .unwrap();
    tags.series(&TagSeriesOptions {
        tag_names: vec!["slovenia".to_string(), "food".to_string(), "oecd".to_string()],
        tag_group_id: Some("geo".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();

    let requests = harness.requests().await;
    assert_eq!(requests[0].path, "/fred/related_tags");
    assert_eq!(requests[0].param("tag_names"), Some("monetary aggregates;weekly"));
    assert_eq!(
        requests[0].param("exclude_tag_names"),
        Some("discontinued;currency")
    );

    assert_eq!(requests[1].path, "/fred/tags/series");
    assert_eq!(requests[1].param("tag_names"), Some("slovenia;food;oecd"));
    assert_eq!(requests[1].param("order_by"), Some("series_id"));
    assert_eq!(requests[1].param("tag_group_id"), Some("geo"));
    assert_eq!(requests[1].param("filter_variable"), None);
}

#[tokio::test]
async fn test_no_null_tokens_anywhere() {
    let harness = Harness::start().await;
    let client = &harness.client;
    client.tags().list(&TagListOptions::default()).await.unwrap();
    client.tags().series(&TagSeriesOptions::default()).await.unwrap();
    client.sources().list(&ListOptions::default()).await.unwrap();

    for request in harness.requests().await {
        for (name, value) in &request.query {
            assert!(
                !value.is_empty() && value != "None" && value != "null",
                "{name} was sent as {value:?}"
            );
        }
    }
}
