use nexus_core::errors::EvidenceError;

/// `check_reason` recorded on a passing edge.
pub const PASS_REASON: &str = "Evidence supports the relation.";

/// Outcome of checking one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    Pass { score: f64 },
    Fail { score: f64, reason: EvidenceError },
}

impl Verdict {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Pass { .. })
    }

    pub fn score(&self) -> f64 {
        match *self {
            Self::Pass { score } | Self::Fail { score, .. } => score,
        }
    }

    /// Text stored in the edge's `check_reason`.
    pub fn reason(&self) -> String {
        match self {
            Self::Pass { .. } => PASS_REASON.to_string(),
            Self::Fail { reason, .. } => reason.to_string(),
        }
    }
}
