pub mod confidence;
pub mod edge;
pub mod flags;
#[allow(clippy::module_inception)]
pub mod graph;
pub mod node;
pub mod relation;
pub mod summary;

pub use confidence::Confidence;
pub use edge::{Edge, EdgeKey, Evidence};
pub use graph::{now_iso8601, Graph, GraphMeta};
pub use node::Node;
pub use relation::{Relation, RelationKind};
pub use summary::CheckerSummary;
