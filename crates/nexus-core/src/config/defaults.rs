// Single source of truth for all default values.

// Graph model defaults
pub const DEFAULT_NODE_CONFIDENCE: f64 = 0.75;
pub const DEFAULT_EDGE_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_EDGE_CHECKED: bool = true;
pub const DEFAULT_CONCEPT: &str = "Unknown";
pub const DEFAULT_GRAPH_VERSION: &str = "v1";
pub const DEFAULT_ROOT_DOMAIN: &str = "Core";

// Normalizer defaults
pub const DEFAULT_CONFLICT_PENALTY: f64 = 0.8;
pub const DEFAULT_ABBREVIATIONS: [(&str, &str); 4] = [
    ("nn", "neural network"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("kl divergence", "kullback leibler divergence"),
];

// Evidence checker defaults
pub const DEFAULT_STRICT_CHECK: bool = true;
pub const DEFAULT_MENTION_TOKEN_MIN_CHARS: usize = 4;
pub const DEFAULT_MENTION_TOKEN_LIMIT: usize = 4;
pub const DEFAULT_SIGNIFICANT_TOKEN_MIN_CHARS: usize = 6;
pub const DEFAULT_SIGNIFICANT_TOKEN_LIMIT: usize = 12;
pub const DEFAULT_BASE_SCORE: f64 = 0.55;
pub const DEFAULT_OVERLAP_WEIGHT: f64 = 0.07;
pub const DEFAULT_FAIL_MULTIPLIER: f64 = 0.45;
pub const DEFAULT_NO_MENTION_SCORE: f64 = 0.15;
pub const DEFAULT_FALLBACK_EXPLANATION: &str =
    "No supported evidence found; marked as unchecked.";

// Storage defaults
pub const DEFAULT_DB_FILENAME: &str = "nexus.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

// Pipeline defaults
pub const DEFAULT_GENERATION_DEPTH: usize = 2;
pub const DEFAULT_QUERY_DEPTH: usize = 2;
pub const DEFAULT_EXPAND_QUERY_DEPTH: usize = 2;
pub const DEFAULT_EXTERNAL_REPAIR: bool = true;

// Observability defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
