mod config_error;
mod evidence_error;
mod nexus_error;
mod schema_error;
mod storage_error;

pub use config_error::ConfigError;
pub use evidence_error::EvidenceError;
pub use nexus_error::{NexusError, NexusResult};
pub use schema_error::SchemaError;
pub use storage_error::StorageError;
