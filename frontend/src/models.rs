use crate::utils::{format_duration_seconds, parse_iso8601_duration};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit JSON `null` as the field's default. Missing fields are
/// already covered by `#[serde(default)]`; JS gateways also emit `null` for
/// `NaN` counts and for lists they did not fill.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A video as returned by search and trending.
///
/// `view_subscriber_ratio` is computed by the gateway as
/// `viewCount / max(subscriberCount, 1)` and is never recomputed here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_title: String,
    pub channel_country: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration_seconds: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriber_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub view_subscriber_ratio: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub tags: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
    pub transcript: Option<String>,
}

impl VideoRecord {
    /// Some gateway builds pass the raw `PT#M#S` token through as `duration`.
    /// Re-render it for display and derive the seconds if they were left out.
    pub fn normalize_duration(mut self) -> Self {
        if self.duration.starts_with('P') {
            let seconds = parse_iso8601_duration(&self.duration);
            if self.duration_seconds == 0 {
                self.duration_seconds = seconds;
            }
            self.duration = format_duration_seconds(self.duration_seconds);
        } else if self.duration.is_empty() {
            self.duration = format_duration_seconds(self.duration_seconds);
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct VideoListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<VideoRecord>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CategoryListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub categories: Vec<VideoCategory>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoStatistics {
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoAnalysisData {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: VideoStatistics,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub channel_title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub analysis_prompt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub data: VideoAnalysisData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelStats {
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subscriber_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub video_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngagementAverages {
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelVideoSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    pub title: Option<String>,
    pub published_at: Option<String>,
    /// Raw ISO-8601 token, e.g. `PT4M13S`.
    pub duration: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub view_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_count: u64,
}

impl ChannelVideoSummary {
    pub fn duration_seconds(&self) -> u64 {
        self.duration
            .as_deref()
            .map(parse_iso8601_duration)
            .unwrap_or(0)
    }

    pub fn display_duration(&self) -> String {
        format_duration_seconds(self.duration_seconds())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelVideoAnalysis {
    #[serde(deserialize_with = "null_as_default")]
    pub channel_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub video_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub averages: EngagementAverages,
    #[serde(deserialize_with = "null_as_default")]
    pub videos: Vec<ChannelVideoSummary>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptSegment {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    /// Milliseconds from the start of the video.
    #[serde(deserialize_with = "null_as_default")]
    pub offset: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoTranscript {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transcript: String,
    #[serde(deserialize_with = "null_as_default")]
    pub segments: Vec<TranscriptSegment>,
}

/// The enhanced transcript endpoint has no fixed shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnhancedTranscript(pub serde_json::Value);

impl EnhancedTranscript {
    pub fn display_text(&self) -> String {
        match &self.0 {
            serde_json::Value::String(text) => text.clone(),
            other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
        }
    }
}

/// Shared shape of the key-moments and segmented-transcript endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranscriptSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    pub metadata: Option<serde_json::Value>,
}

pub type KeyMoments = TranscriptSummary;
pub type SegmentedTranscript = TranscriptSummary;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentReply {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoComment {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
    pub author_channel_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub like_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub published_at: String,
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub replies: Vec<CommentReply>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub results_per_page: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoCommentsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub video_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub total_results: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub comments: Vec<VideoComment>,
    pub next_page_token: Option<String>,
    pub page_info: Option<PageInfo>,
}

/// Error body some gateway routes send alongside a non-2xx status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|message| !message.trim().is_empty())
    }
}
