//! Edge flag names.

/// Set on the surviving edge of a duplicate group.
pub const DUPLICATE: &str = "duplicate";
/// Set on every edge of a (source, target) pair carrying several relations.
pub const CONFLICT: &str = "conflict";
/// Set when the checker coerces an unknown relation to `related_to`.
pub const DOWNGRADED: &str = "downgraded";
