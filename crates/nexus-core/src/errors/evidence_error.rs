/// Reasons an edge fails the evidence check.
///
/// These never abort a run. They become the edge's `check_reason`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvidenceError {
    #[error("missing evidence/explanation")]
    MissingEvidence,

    #[error("empty evidence snippet")]
    EmptySnippet,

    #[error("no endpoint mention")]
    NoEndpointMention,
}
