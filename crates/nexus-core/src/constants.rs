/// Nexus engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound for subgraph traversal depth.
pub const MAX_SUBGRAPH_DEPTH: usize = 3;

/// Length of a derived edge id, in hex characters.
pub const EDGE_ID_LEN: usize = 12;

/// Maximum length of a generation concept, in characters.
pub const MAX_CONCEPT_CHARS: usize = 80;

/// Bounds of the generation depth accepted in a request.
pub const MIN_GENERATION_DEPTH: usize = 1;
pub const MAX_GENERATION_DEPTH: usize = 3;

/// Bounds of the depth increment accepted by node expansion.
pub const MIN_EXPAND_INCREMENT: usize = 1;
pub const MAX_EXPAND_INCREMENT: usize = 2;

/// Number of schema errors echoed to the job log per stage.
pub const MAX_LOGGED_SCHEMA_ERRORS: usize = 10;
