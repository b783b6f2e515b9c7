//! JSON bodies sent to the gateway. Field names follow the gateway's
//! camelCase contract; unset optional fields are left out of the body.

use serde::{Deserialize, Serialize};

/// The gateway's own duration buckets: short < 4 min, medium 4-20 min,
/// long > 20 min.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoteDurationHint {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub max_results: u32,
    pub order: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<RemoteDurationHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_after: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoIdRequest {
    pub video_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelIdRequest {
    pub channel_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingRequest {
    pub region_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub max_results: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesRequest {
    pub region_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ChannelVideoSort {
    #[default]
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "viewCount")]
    ViewCount,
    #[serde(rename = "rating")]
    Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelVideosRequest {
    pub channel_id: String,
    pub max_results: u32,
    pub sort_by: ChannelVideoSort,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptRequest {
    pub video_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    Raw,
    Timestamped,
    Merged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentMethod {
    Equal,
    Smart,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptSearch {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_lines: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SegmentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<SegmentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<TranscriptSearch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<SegmentOptions>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedTranscriptRequest {
    pub video_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<TranscriptFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_metadata: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<TranscriptFilters>,
}

impl EnhancedTranscriptRequest {
    /// Timestamped transcript with metadata for a single video.
    pub fn timestamped(video_id: &str) -> Self {
        Self {
            video_ids: vec![video_id.to_string()],
            format: Some(TranscriptFormat::Timestamped),
            include_metadata: Some(true),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMomentsRequest {
    pub video_id: String,
    pub max_moments: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentedTranscriptRequest {
    pub video_id: String,
    pub segment_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentOrder {
    Time,
    #[default]
    Relevance,
}

impl CommentOrder {
    pub fn display_name(self) -> &'static str {
        match self {
            CommentOrder::Time => "Newest",
            CommentOrder::Relevance => "Top",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsRequest {
    pub video_id: String,
    pub max_results: u32,
    pub order: CommentOrder,
    pub include_replies: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl CommentsRequest {
    pub fn new(video_id: &str, max_results: u32) -> Self {
        Self {
            video_id: video_id.to_string(),
            max_results,
            order: CommentOrder::default(),
            include_replies: false,
            page_token: None,
        }
    }
}
