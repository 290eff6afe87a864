// DoctorDirectory - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DoctorDirectory";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DoctorDirectory";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Data source
// =============================================================================

/// Remote JSON resource holding the practitioner list.
pub const DEFAULT_SOURCE_URL: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

/// Default timeout for the one directory fetch (seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Minimum user-configurable fetch timeout (seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum user-configurable fetch timeout (seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 300;

/// Upper bound on the payload size accepted from the data source.
///
/// Anything larger is treated as a load failure and the directory starts
/// empty, the same as a network error.
pub const MAX_PAYLOAD_BYTES: u64 = 16 * 1024 * 1024; // 16 MB

// =============================================================================
// Display text
// =============================================================================

/// Shown while the one fetch has not resolved yet.
pub const LOADING_MESSAGE: &str = "Loading doctors...";

/// Shown when loading has finished and no record passes the filters.
pub const NO_RESULTS_MESSAGE: &str = "No doctors found.";

/// Shown on a card whose record lists no specialties.
pub const NO_SPECIALTIES_LABEL: &str = "No specialties";

/// Heading for a card whose record has no name.
pub const UNNAMED_LABEL: &str = "(no name)";

/// Placeholder for a missing display-only number (experience, fees).
pub const MISSING_VALUE_LABEL: &str = "n/a";

/// Currency symbol prefixed to the consultation fee.
pub const FEE_CURRENCY_SYMBOL: &str = "\u{20b9}";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
