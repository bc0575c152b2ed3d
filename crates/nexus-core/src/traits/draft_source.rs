use crate::draft::GraphDraft;
use crate::errors::NexusResult;
use crate::models::GenerateRequest;

/// Upstream generator producing a raw draft for a concept.
pub trait IDraftSource: Send + Sync {
    fn draft(&self, request: &GenerateRequest) -> NexusResult<GraphDraft>;
}
