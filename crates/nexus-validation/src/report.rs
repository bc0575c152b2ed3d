use nexus_core::draft::GraphDraft;

/// Result of validating a draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Human-readable errors, each prefixed with a field path.
    pub errors: Vec<String>,
}

impl SchemaReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A repaired draft and the number of individual fixes applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairOutcome {
    pub draft: GraphDraft,
    pub fixed: usize,
}

/// Result of the full validate, repair, re-validate cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaOutcome {
    pub draft: GraphDraft,
    /// Errors found on the draft as received.
    pub initial_errors: Vec<String>,
    /// Errors still present after all repair steps.
    pub remaining_errors: Vec<String>,
    pub fixed: usize,
    /// Name of the external repairer, when one was invoked.
    pub external_repairer: Option<String>,
}

impl SchemaOutcome {
    pub fn is_clean(&self) -> bool {
        self.remaining_errors.is_empty()
    }
}
