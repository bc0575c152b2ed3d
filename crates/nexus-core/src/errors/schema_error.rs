/// Errors raised while turning a raw draft into a graph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    /// Identity fields are missing, so no graph can be built from the draft.
    #[error("draft is not representable as a graph: {}", errors.join("; "))]
    Invalid { errors: Vec<String> },

    /// The draft stayed unrepresentable after every repair step.
    #[error("draft invalid after {fixed} repairs: {} unresolved error(s)", errors.len())]
    Unresolved { errors: Vec<String>, fixed: usize },
}
