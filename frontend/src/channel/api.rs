use crate::error::RemoteResult;
use crate::gateway::requests::{ChannelVideoSort, ChannelVideosRequest};
use crate::gateway::transport::Transport;
use crate::gateway::GatewayClient;
use crate::models::{ChannelStats, ChannelVideoAnalysis};

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelOverview {
    pub stats: ChannelStats,
    pub analysis: ChannelVideoAnalysis,
}

/// Channel statistics together with its latest videos. Both requests run
/// at once and the overview fails if either of them does.
pub async fn fetch_channel_overview<T: Transport>(
    client: &GatewayClient<T>,
    channel_id: &str,
) -> RemoteResult<ChannelOverview> {
    let request = ChannelVideosRequest {
        channel_id: channel_id.to_string(),
        max_results: client.config().channel_video_count,
        sort_by: ChannelVideoSort::Date,
    };

    let (stats, analysis) = futures::try_join!(
        client.channel_stats(channel_id),
        client.analyze_channel_videos(&request)
    )?;

    Ok(ChannelOverview { stats, analysis })
}
