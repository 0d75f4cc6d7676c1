//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage
// =============================================================================

/// Default path of the JSON document backing the store
pub const DEFAULT_DATABASE_PATH: &str = "db.json";

/// Suffix appended to the temporary file used for atomic writes
pub const TEMP_FILE_SUFFIX: &str = "tmp";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "localhost";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Upper bound on the time spent serving a single request
pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

// =============================================================================
// Logging
// =============================================================================

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Log filter used with --verbose
pub const VERBOSE_LOG_FILTER: &str = "debug";
