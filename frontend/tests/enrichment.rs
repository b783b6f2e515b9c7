mod common;

use channel_scout::error::RemoteError;
use channel_scout::transcript::aggregator::{fetch_enrichment, FacetKind};
use common::{client, FakeTransport};
use serde_json::json;

const TRANSCRIPT: &str = "/api/get-video-transcript";
const ENHANCED: &str = "/api/enhanced-transcript";
const KEY_MOMENTS: &str = "/api/get-key-moments";
const SEGMENTED: &str = "/api/get-segmented-transcript";

fn all_facets() -> FakeTransport {
    FakeTransport::new()
        .json(
            TRANSCRIPT,
            json!({
                "videoId": "v1",
                "transcript": "hello world",
                "segments": [{ "text": "hello world", "offset": 1500, "duration": 2000 }]
            }),
        )
        .json(ENHANCED, json!({ "videos": [{ "videoId": "v1", "text": "[00:01] hello" }] }))
        .json(KEY_MOMENTS, json!({ "videoId": "v1", "text": "00:01 greeting" }))
        .json(SEGMENTED, json!({ "videoId": "v1", "text": "Part 1: hello" }))
}

#[tokio::test]
async fn all_four_facets_are_requested_with_their_fixed_parameters() {
    let gateway = client(all_facets());

    let bundle = fetch_enrichment(&gateway, "v1").await.unwrap();

    assert_eq!(bundle.video_id, "v1");
    assert_eq!(bundle.available(), FacetKind::all_variants());
    assert_eq!(bundle.basic.as_ref().unwrap().segments[0].offset, 1500);
    assert_eq!(bundle.key_moments.as_ref().unwrap().text, "00:01 greeting");

    let transport = gateway.transport();
    assert_eq!(transport.calls_to(TRANSCRIPT), vec![json!({ "videoId": "v1" })]);
    assert_eq!(
        transport.calls_to(ENHANCED),
        vec![json!({
            "videoIds": ["v1"],
            "format": "timestamped",
            "includeMetadata": true
        })]
    );
    assert_eq!(
        transport.calls_to(KEY_MOMENTS),
        vec![json!({ "videoId": "v1", "maxMoments": 5 })]
    );
    assert_eq!(
        transport.calls_to(SEGMENTED),
        vec![json!({ "videoId": "v1", "segmentCount": 4 })]
    );
}

#[tokio::test]
async fn facets_are_fetched_concurrently() {
    let gateway = client(all_facets().yielding(3));

    fetch_enrichment(&gateway, "v1").await.unwrap();

    assert_eq!(gateway.transport().calls().len(), 4);
    assert_eq!(gateway.transport().peak_in_flight(), 4);
}

#[tokio::test]
async fn one_surviving_facet_is_a_success() {
    let gateway = client(
        FakeTransport::new()
            .reply(TRANSCRIPT, 404, r#"{"error":"Transcript not available"}"#)
            .fail(ENHANCED, RemoteError::NetworkFailure("reset".to_string()))
            .json(KEY_MOMENTS, json!({ "videoId": "v1", "text": "00:10 intro" }))
            .reply(SEGMENTED, 500, ""),
    );

    let bundle = fetch_enrichment(&gateway, "v1").await.unwrap();

    assert_eq!(bundle.available(), vec![FacetKind::KeyMoments]);
    assert!(bundle.basic.is_none());
    assert!(bundle.enhanced.is_none());
    assert!(bundle.segmented.is_none());
}

#[tokio::test]
async fn a_failing_facet_does_not_cancel_the_others() {
    let gateway = client(
        FakeTransport::new()
            .fail(TRANSCRIPT, RemoteError::NetworkFailure("reset".to_string()))
            .json(ENHANCED, json!("plain text transcript"))
            .json(KEY_MOMENTS, json!({ "videoId": "v1", "text": "moments" }))
            .json(SEGMENTED, json!({ "videoId": "v1", "text": "segments" }))
            .yielding(2),
    );

    let bundle = fetch_enrichment(&gateway, "v1").await.unwrap();

    assert_eq!(
        bundle.available(),
        vec![FacetKind::Enhanced, FacetKind::KeyMoments, FacetKind::Segmented]
    );
    assert_eq!(
        bundle.enhanced.unwrap().display_text(),
        "plain text transcript"
    );
}

#[tokio::test]
async fn every_facet_failing_is_a_single_no_content_error() {
    let gateway = client(
        FakeTransport::new()
            .reply(TRANSCRIPT, 404, "")
            .reply(ENHANCED, 500, "")
            .fail(KEY_MOMENTS, RemoteError::NetworkFailure("offline".to_string()))
            .reply(SEGMENTED, 503, "unavailable"),
    );

    let result = fetch_enrichment(&gateway, "v1").await;

    assert_eq!(result, Err(RemoteError::NoContentAvailable("v1".to_string())));
    assert_eq!(gateway.transport().calls().len(), 4);
}
