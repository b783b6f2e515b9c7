use crate::error::RemoteResult;
use crate::gateway::transport::Transport;
use crate::gateway::GatewayClient;
use crate::models::VideoRecord;
use crate::search::filters::FilterCriteria;
use crate::search::state::{SearchAction, SearchInvocation};
use chrono::{DateTime, Utc};

/// Searches the gateway and re-filters the fresh result with `criteria`.
pub async fn search<T: Transport>(
    client: &GatewayClient<T>,
    query: &str,
    criteria: &FilterCriteria,
) -> RemoteResult<Vec<VideoRecord>> {
    search_at(client, query, criteria, Utc::now()).await
}

/// [`search`] with an explicit clock for the period window.
pub async fn search_at<T: Transport>(
    client: &GatewayClient<T>,
    query: &str,
    criteria: &FilterCriteria,
    now: DateTime<Utc>,
) -> RemoteResult<Vec<VideoRecord>> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let request = criteria.search_request(query, now, client.config());
    let raw = client.search_videos(&request).await?;
    let received = raw.len();
    let videos = criteria.apply(raw);
    log::info!(
        "Search '{}' returned {} videos, {} after local filters",
        request.query,
        received,
        videos.len()
    );
    Ok(videos)
}

/// Runs a dispatched search and wraps the reply for the search reducer.
/// The period window is anchored at the invocation's issue time.
pub async fn run_search<T: Transport>(
    client: &GatewayClient<T>,
    invocation: SearchInvocation,
) -> SearchAction {
    let result = search_at(
        client,
        &invocation.query,
        &invocation.criteria,
        invocation.issued_at,
    )
    .await;
    SearchAction::Loaded {
        ticket: invocation.ticket,
        result,
    }
}
