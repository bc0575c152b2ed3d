//! Configuration system for Nexus.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod checker_config;
pub mod defaults;
pub mod nexus_config;
pub mod normalizer_config;
pub mod observability_config;
pub mod pipeline_config;
pub mod storage_config;

pub use checker_config::CheckerConfig;
pub use nexus_config::{NexusConfig, CONFIG_FILENAME};
pub use normalizer_config::NormalizerConfig;
pub use observability_config::ObservabilityConfig;
pub use pipeline_config::PipelineConfig;
pub use storage_config::StorageConfig;
