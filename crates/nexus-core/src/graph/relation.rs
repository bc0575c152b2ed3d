use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The 5 whitelisted relation kinds between concepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    RelatedTo,
    UsedIn,
    IsA,
    Explains,
    Bridges,
}

impl RelationKind {
    /// Total number of relation kinds.
    pub const COUNT: usize = 5;

    /// All variants for iteration.
    pub const ALL: [RelationKind; 5] = [
        Self::RelatedTo,
        Self::UsedIn,
        Self::IsA,
        Self::Explains,
        Self::Bridges,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RelatedTo => "related_to",
            Self::UsedIn => "used_in",
            Self::IsA => "is_a",
            Self::Explains => "explains",
            Self::Bridges => "bridges",
        }
    }

    /// Exact, case-sensitive lookup of a wire name.
    pub fn from_str_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation as it arrives from a draft.
///
/// Upstream producers may emit names outside the whitelist. Those survive as
/// `Unrecognized` until the evidence checker coerces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(untagged)]
pub enum Relation {
    Known(RelationKind),
    Unrecognized(String),
}

impl Relation {
    pub fn parse(s: &str) -> Self {
        match RelationKind::from_str_name(s) {
            Some(kind) => Self::Known(kind),
            None => Self::Unrecognized(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(kind) => kind.as_str(),
            Self::Unrecognized(name) => name,
        }
    }

    pub fn kind(&self) -> Option<RelationKind> {
        match self {
            Self::Known(kind) => Some(*kind),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// The whitelisted kind, with anything unknown read as `related_to`.
    pub fn coerced(&self) -> RelationKind {
        self.kind().unwrap_or(RelationKind::RelatedTo)
    }
}

impl From<RelationKind> for Relation {
    fn from(kind: RelationKind) -> Self {
        Self::Known(kind)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
