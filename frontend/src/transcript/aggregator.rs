use crate::error::{RemoteError, RemoteResult};
use crate::gateway::requests::{EnhancedTranscriptRequest, TranscriptRequest};
use crate::gateway::transport::Transport;
use crate::gateway::GatewayClient;
use crate::models::{EnhancedTranscript, KeyMoments, SegmentedTranscript, VideoTranscript};
use crate::settle::{settle_all, Settlement};
use futures::future::{FutureExt, LocalBoxFuture};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Basic,
    Enhanced,
    KeyMoments,
    Segmented,
}

impl FacetKind {
    pub fn display_name(self) -> &'static str {
        match self {
            FacetKind::Basic => "Transcript",
            FacetKind::Enhanced => "Enhanced transcript",
            FacetKind::KeyMoments => "Key moments",
            FacetKind::Segmented => "Segments",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            FacetKind::Basic,
            FacetKind::Enhanced,
            FacetKind::KeyMoments,
            FacetKind::Segmented,
        ]
    }
}

/// One successfully fetched facet.
#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    Basic(VideoTranscript),
    Enhanced(EnhancedTranscript),
    KeyMoments(KeyMoments),
    Segmented(SegmentedTranscript),
}

pub type FacetOutcome = Result<Facet, (FacetKind, RemoteError)>;

/// Whatever enrichment could be fetched for one video. A `None` facet is
/// simply not available.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnrichmentBundle {
    pub video_id: String,
    pub basic: Option<VideoTranscript>,
    pub enhanced: Option<EnhancedTranscript>,
    pub key_moments: Option<KeyMoments>,
    pub segmented: Option<SegmentedTranscript>,
}

impl EnrichmentBundle {
    pub fn has(&self, kind: FacetKind) -> bool {
        match kind {
            FacetKind::Basic => self.basic.is_some(),
            FacetKind::Enhanced => self.enhanced.is_some(),
            FacetKind::KeyMoments => self.key_moments.is_some(),
            FacetKind::Segmented => self.segmented.is_some(),
        }
    }

    pub fn available(&self) -> Vec<FacetKind> {
        FacetKind::all_variants()
            .into_iter()
            .filter(|kind| self.has(*kind))
            .collect()
    }

    fn insert(&mut self, facet: Facet) {
        match facet {
            Facet::Basic(transcript) => self.basic = Some(transcript),
            Facet::Enhanced(transcript) => self.enhanced = Some(transcript),
            Facet::KeyMoments(moments) => self.key_moments = Some(moments),
            Facet::Segmented(segments) => self.segmented = Some(segments),
        }
    }
}

/// Fetches all four transcript facets for `video_id` at once.
///
/// Fails with [`RemoteError::NoContentAvailable`] only when every facet
/// failed; otherwise individual failures are logged and the facet is left
/// empty.
pub async fn fetch_enrichment<T: Transport>(
    client: &GatewayClient<T>,
    video_id: &str,
) -> RemoteResult<EnrichmentBundle> {
    let config = client.config();
    let transcript_request = TranscriptRequest {
        video_id: video_id.to_string(),
        language: None,
    };
    let enhanced_request = EnhancedTranscriptRequest::timestamped(video_id);

    let facets: Vec<LocalBoxFuture<'_, FacetOutcome>> = vec![
        client
            .video_transcript(&transcript_request)
            .map(|result| result.map(Facet::Basic).map_err(|e| (FacetKind::Basic, e)))
            .boxed_local(),
        client
            .enhanced_transcript(&enhanced_request)
            .map(|result| result.map(Facet::Enhanced).map_err(|e| (FacetKind::Enhanced, e)))
            .boxed_local(),
        client
            .key_moments(video_id, config.key_moment_count)
            .map(|result| {
                result
                    .map(Facet::KeyMoments)
                    .map_err(|e| (FacetKind::KeyMoments, e))
            })
            .boxed_local(),
        client
            .segmented_transcript(video_id, config.segment_count)
            .map(|result| {
                result
                    .map(Facet::Segmented)
                    .map_err(|e| (FacetKind::Segmented, e))
            })
            .boxed_local(),
    ];

    assemble_bundle(video_id, settle_all(facets).await)
}

/// Folds settled facet outcomes into a bundle.
pub fn assemble_bundle(
    video_id: &str,
    settlement: Settlement<Facet, (FacetKind, RemoteError)>,
) -> RemoteResult<EnrichmentBundle> {
    if settlement.all_failed() {
        for (kind, error) in settlement.failures() {
            log::debug!("{} failed for {video_id}: {error}", kind.display_name());
        }
        log::warn!("No transcript facet could be loaded for {video_id}");
        return Err(RemoteError::NoContentAvailable(video_id.to_string()));
    }

    let mut bundle = EnrichmentBundle {
        video_id: video_id.to_string(),
        ..Default::default()
    };
    for outcome in settlement.into_outcomes() {
        match outcome {
            Ok(facet) => bundle.insert(facet),
            Err((kind, error)) => {
                log::warn!("{} unavailable for {video_id}: {error}", kind.display_name());
            }
        }
    }
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TranscriptSummary;
    use futures::executor::block_on;
    use futures::future::ready;

    fn failure(kind: FacetKind) -> FacetOutcome {
        Err((kind, RemoteError::NetworkFailure("offline".to_string())))
    }

    #[test]
    fn one_success_is_enough() {
        let outcomes = vec![
            failure(FacetKind::Basic),
            failure(FacetKind::Enhanced),
            Ok(Facet::KeyMoments(TranscriptSummary {
                video_id: "v1".to_string(),
                text: "00:10 intro".to_string(),
                metadata: None,
            })),
            failure(FacetKind::Segmented),
        ];
        let settlement = block_on(settle_all(outcomes.into_iter().map(ready)));
        let bundle = assemble_bundle("v1", settlement).unwrap();
        assert_eq!(bundle.available(), vec![FacetKind::KeyMoments]);
        assert!(bundle.basic.is_none());
        assert!(bundle.enhanced.is_none());
        assert!(bundle.segmented.is_none());
    }

    #[test]
    fn all_failures_collapse_into_one_error() {
        let outcomes = FacetKind::all_variants().into_iter().map(failure);
        let settlement = block_on(settle_all(outcomes.map(ready)));
        assert_eq!(
            assemble_bundle("v1", settlement),
            Err(RemoteError::NoContentAvailable("v1".to_string()))
        );
    }
}
