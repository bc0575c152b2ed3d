use crate::draft::GraphDraft;
use crate::errors::NexusResult;

/// Optional external repair step for drafts local repair could not fix.
pub trait IDraftRepairer: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Return a corrected draft given the unresolved validation errors.
    fn repair(&self, draft: GraphDraft, errors: &[String]) -> NexusResult<GraphDraft>;
}
