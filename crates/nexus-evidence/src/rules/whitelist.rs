//! Relation whitelist: anything outside the closed set becomes `related_to`.

use nexus_core::graph::{flags, Edge, Relation, RelationKind};

/// Coerce an unrecognized relation to [`RelationKind::RelatedTo`] and flag
/// the edge as downgraded. Returns true if the edge was downgraded.
pub fn enforce(edge: &mut Edge) -> bool {
    if edge.relation.is_known() {
        return false;
    }
    edge.relation = Relation::Known(RelationKind::RelatedTo);
    edge.add_flag(flags::DOWNGRADED);
    true
}
