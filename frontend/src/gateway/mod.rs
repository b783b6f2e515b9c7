pub mod requests;
pub mod transport;

use crate::config::GatewayConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::models::{
    CategoryListResponse, ChannelStats, ChannelVideoAnalysis, EnhancedTranscript, ErrorResponse,
    KeyMoments, SegmentedTranscript, VideoAnalysis, VideoCategory, VideoCommentsResponse,
    VideoListResponse, VideoRecord, VideoTranscript,
};
use requests::{
    CategoriesRequest, ChannelIdRequest, ChannelVideosRequest, CommentsRequest,
    EnhancedTranscriptRequest, KeyMomentsRequest, SearchRequest, SegmentedTranscriptRequest,
    TranscriptRequest, TrendingRequest, VideoIdRequest,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use transport::{BrowserTransport, HttpReply, Transport};

const MAX_ERROR_BODY_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    SearchVideos,
    VideoAnalysis,
    TrendingVideos,
    VideoCategories,
    ChannelStats,
    AnalyzeChannelVideos,
    VideoTranscript,
    EnhancedTranscript,
    KeyMoments,
    SegmentedTranscript,
    VideoComments,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SearchVideos => "/api/search-videos",
            Endpoint::VideoAnalysis => "/api/video-analysis",
            Endpoint::TrendingVideos => "/api/get-trending-videos",
            Endpoint::VideoCategories => "/api/get-video-categories",
            Endpoint::ChannelStats => "/api/get-channel-stats",
            Endpoint::AnalyzeChannelVideos => "/api/analyze-channel-videos",
            Endpoint::VideoTranscript => "/api/get-video-transcript",
            Endpoint::EnhancedTranscript => "/api/enhanced-transcript",
            Endpoint::KeyMoments => "/api/get-key-moments",
            Endpoint::SegmentedTranscript => "/api/get-segmented-transcript",
            Endpoint::VideoComments => "/api/get-video-comments",
        }
    }
}

/// Typed wrapper around the gateway's JSON endpoints.
///
/// Every operation is a single POST. Failures are returned as-is; retrying
/// is up to the caller.
#[derive(Debug, Clone)]
pub struct GatewayClient<T = BrowserTransport> {
    transport: T,
    config: GatewayConfig,
}

impl<T: Transport> GatewayClient<T> {
    pub fn new(transport: T, config: GatewayConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn call<Req, Resp>(&self, endpoint: Endpoint, request: &Req) -> RemoteResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.config.endpoint_url(endpoint.path());
        let body =
            serde_json::to_string(request).map_err(|e| RemoteError::InvalidRequest(e.to_string()))?;

        log::debug!("POST {url}");
        let reply = self.transport.post_json(&url, body).await.map_err(|e| {
            log::error!("{} failed: {e}", endpoint.path());
            e
        })?;

        if !reply.is_success() {
            let error = remote_failure(&reply);
            log::warn!("{} failed: {error}", endpoint.path());
            return Err(error);
        }

        // An empty 2xx body decodes like `{}` so list fields fall back to empty.
        let text = if reply.body.trim().is_empty() {
            "{}"
        } else {
            reply.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| {
            log::error!("{} returned an unreadable body: {e}", endpoint.path());
            RemoteError::InvalidResponse(e.to_string())
        })
    }

    pub async fn search_videos(&self, request: &SearchRequest) -> RemoteResult<Vec<VideoRecord>> {
        let response: VideoListResponse = self.call(Endpoint::SearchVideos, request).await?;
        Ok(normalize(response.items))
    }

    pub async fn analyze_video(&self, video_id: &str) -> RemoteResult<VideoAnalysis> {
        let request = VideoIdRequest {
            video_id: video_id.to_string(),
        };
        self.call(Endpoint::VideoAnalysis, &request).await
    }

    pub async fn trending_videos(&self, request: &TrendingRequest) -> RemoteResult<Vec<VideoRecord>> {
        let response: VideoListResponse = self.call(Endpoint::TrendingVideos, request).await?;
        Ok(normalize(response.items))
    }

    pub async fn video_categories(&self, region_code: &str) -> RemoteResult<Vec<VideoCategory>> {
        let request = CategoriesRequest {
            region_code: region_code.to_string(),
        };
        let response: CategoryListResponse = self.call(Endpoint::VideoCategories, &request).await?;
        Ok(response.categories)
    }

    pub async fn channel_stats(&self, channel_id: &str) -> RemoteResult<ChannelStats> {
        let request = ChannelIdRequest {
            channel_id: channel_id.to_string(),
        };
        self.call(Endpoint::ChannelStats, &request).await
    }

    pub async fn analyze_channel_videos(
        &self,
        request: &ChannelVideosRequest,
    ) -> RemoteResult<ChannelVideoAnalysis> {
        self.call(Endpoint::AnalyzeChannelVideos, request).await
    }

    pub async fn video_transcript(&self, request: &TranscriptRequest) -> RemoteResult<VideoTranscript> {
        self.call(Endpoint::VideoTranscript, request).await
    }

    pub async fn enhanced_transcript(
        &self,
        request: &EnhancedTranscriptRequest,
    ) -> RemoteResult<EnhancedTranscript> {
        self.call(Endpoint::EnhancedTranscript, request).await
    }

    pub async fn key_moments(&self, video_id: &str, max_moments: u32) -> RemoteResult<KeyMoments> {
        let request = KeyMomentsRequest {
            video_id: video_id.to_string(),
            max_moments,
        };
        self.call(Endpoint::KeyMoments, &request).await
    }

    pub async fn segmented_transcript(
        &self,
        video_id: &str,
        segment_count: u32,
    ) -> RemoteResult<SegmentedTranscript> {
        let request = SegmentedTranscriptRequest {
            video_id: video_id.to_string(),
            segment_count,
        };
        self.call(Endpoint::SegmentedTranscript, &request).await
    }

    pub async fn video_comments(&self, request: &CommentsRequest) -> RemoteResult<VideoCommentsResponse> {
        self.call(Endpoint::VideoComments, request).await
    }
}

fn normalize(videos: Vec<VideoRecord>) -> Vec<VideoRecord> {
    videos
        .into_iter()
        .map(VideoRecord::normalize_duration)
        .collect()
}

/// Builds the error for a non-2xx reply, preferring the gateway's own message.
fn remote_failure(reply: &HttpReply) -> RemoteError {
    let status = reply.status;
    let body = reply.body.trim();

    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("Request failed with status: {status}")
            } else {
                body.chars().take(MAX_ERROR_BODY_CHARS).collect()
            }
        });

    RemoteError::RemoteFailure { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: u16, body: &str) -> HttpReply {
        HttpReply {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn remote_failure_uses_the_upstream_error_field() {
        let error = remote_failure(&reply(403, r#"{"error":"quotaExceeded"}"#));
        assert_eq!(
            error,
            RemoteError::RemoteFailure {
                status: 403,
                message: "quotaExceeded".to_string()
            }
        );
    }

    #[test]
    fn remote_failure_falls_back_to_body_then_status() {
        let raw = remote_failure(&reply(502, "Bad Gateway"));
        assert_eq!(raw.status(), Some(502));
        assert_eq!(raw.user_message(), "Bad Gateway");

        let empty = remote_failure(&reply(500, ""));
        assert_eq!(empty.user_message(), "Request failed with status: 500");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let error = remote_failure(&reply(500, &body));
        assert_eq!(error.user_message().len(), MAX_ERROR_BODY_CHARS);
    }

    #[test]
    fn endpoint_paths_are_stable() {
        assert_eq!(Endpoint::SearchVideos.path(), "/api/search-videos");
        assert_eq!(Endpoint::SegmentedTranscript.path(), "/api/get-segmented-transcript");
        assert_eq!(Endpoint::VideoComments.path(), "/api/get-video-comments");
    }
}
