//! SQL for vertices and relationships.

pub mod relation_ops;
pub mod vertex_ops;
