use crate::error::RemoteResult;
use crate::gateway::requests::TrendingRequest;
use crate::gateway::transport::Transport;
use crate::gateway::GatewayClient;
use crate::models::{VideoCategory, VideoRecord};
use crate::trending::cascade::{CascadeAction, CategoryFetch, TrendingFetch};

pub async fn load_categories<T: Transport>(
    client: &GatewayClient<T>,
    fetch: &CategoryFetch,
) -> RemoteResult<Vec<VideoCategory>> {
    client.video_categories(&fetch.region_code).await
}

pub async fn load_trending<T: Transport>(
    client: &GatewayClient<T>,
    fetch: &TrendingFetch,
) -> RemoteResult<Vec<VideoRecord>> {
    let request = TrendingRequest {
        region_code: fetch.region_code.clone(),
        category_id: fetch.category_id.clone(),
        max_results: client.config().trending_max_results,
    };
    client.trending_videos(&request).await
}

/// Runs a category fetch and wraps the reply for the cascade reducer.
pub async fn run_category_fetch<T: Transport>(
    client: &GatewayClient<T>,
    fetch: CategoryFetch,
) -> CascadeAction {
    CascadeAction::CategoriesLoaded {
        ticket: fetch.ticket,
        result: load_categories(client, &fetch).await,
    }
}

/// Runs a trending fetch and wraps the reply for the cascade reducer.
pub async fn run_trending_fetch<T: Transport>(
    client: &GatewayClient<T>,
    fetch: TrendingFetch,
) -> CascadeAction {
    CascadeAction::TrendingLoaded {
        ticket: fetch.ticket,
        result: load_trending(client, &fetch).await,
    }
}
