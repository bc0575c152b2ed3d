//! Individual evidence rules, applied in order by [`crate::EvidenceChecker`].

pub mod hard_rule;
pub mod mention;
pub mod overlap;
pub mod whitelist;
