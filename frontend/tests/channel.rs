mod common;

use channel_scout::channel::api::fetch_channel_overview;
use common::{client, FakeTransport};
use serde_json::json;

const STATS: &str = "/api/get-channel-stats";
const VIDEOS: &str = "/api/analyze-channel-videos";

#[tokio::test]
async fn overview_combines_stats_and_latest_videos() {
    let gateway = client(
        FakeTransport::new()
            .json(STATS, json!({ "channelId": "UC1", "title": "Chan", "subscriberCount": 1000 }))
            .json(
                VIDEOS,
                json!({ "channelId": "UC1", "videoCount": 1, "videos": [{ "videoId": "v1" }] }),
            )
            .yielding(1),
    );

    let overview = fetch_channel_overview(&gateway, "UC1").await.unwrap();

    assert_eq!(overview.stats.subscriber_count, 1000);
    assert_eq!(overview.analysis.videos[0].video_id, "v1");
    assert_eq!(gateway.transport().peak_in_flight(), 2);
    assert_eq!(
        gateway.transport().calls_to(VIDEOS),
        vec![json!({ "channelId": "UC1", "maxResults": 10, "sortBy": "date" })]
    );
}

#[tokio::test]
async fn overview_fails_when_either_request_fails() {
    let gateway = client(
        FakeTransport::new()
            .json(STATS, json!({ "channelId": "UC1" }))
            .reply(VIDEOS, 404, r#"{"error":"Channel not found"}"#),
    );

    let error = fetch_channel_overview(&gateway, "UC1").await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.user_message(), "Channel not found");
}
