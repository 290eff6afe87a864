// DoctorDirectory - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The filtering core never fails; these errors belong to the loading,
// configuration, and export edges. Load errors are absorbed into an empty
// directory before they reach the user.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all DoctorDirectory operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DirectoryError {
    /// Fetching or decoding the directory payload failed.
    Fetch(FetchError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Export operation failed.
    Export(ExportError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Fetch error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Fetch errors
// ---------------------------------------------------------------------------

/// Errors raised while reading the one directory payload.
#[derive(Debug)]
pub enum FetchError {
    /// The HTTP request could not be built, sent, or read.
    Http { url: String, source: reqwest::Error },

    /// The server answered with a non-success status code.
    Status { url: String, status: u16 },

    /// A local payload file could not be read.
    Io { path: PathBuf, source: io::Error },

    /// The payload exceeds the accepted size.
    TooLarge { size: u64, max: u64 },

    /// The payload is not valid JSON.
    Decode { source: serde_json::Error },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, source } => write!(f, "Request to '{url}' failed: {source}"),
            Self::Status { url, status } => {
                write!(f, "Request to '{url}' returned HTTP status {status}")
            }
            Self::Io { path, source } => {
                write!(f, "Could not read '{}': {source}", path.display())
            }
            Self::TooLarge { size, max } => write!(
                f,
                "Payload is {size} bytes, exceeds maximum of {max} bytes"
            ),
            Self::Decode { source } => write!(f, "Payload is not valid JSON: {source}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Decode { source } => Some(source),
            _ => None,
        }
    }
}

impl From<FetchError> for DirectoryError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to export operations.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error flushing the export writer.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "Export I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV export error: {source}"),
            Self::Json { source } => write!(f, "JSON export error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for DirectoryError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for DirectoryError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for DoctorDirectory results.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fetch_error_keeps_source_chain() {
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        let err: DirectoryError = FetchError::Io {
            path: PathBuf::from("doctors.json"),
            source: io,
        }
        .into();

        assert!(err.to_string().contains("doctors.json"));
        let fetch = err.source().expect("fetch error is the source");
        assert!(fetch.source().is_some());
    }

    #[test]
    fn test_out_of_range_has_no_source() {
        let err = ConfigError::ValueOutOfRange {
            field: "source.timeout_secs".to_string(),
            value: "0".to_string(),
            expected: "1-300".to_string(),
        };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("source.timeout_secs"));
    }

    #[test]
    fn test_output_errors_share_the_top_level_type() {
        fn write_out(fail_export: bool) -> Result<()> {
            if fail_export {
                Err::<(), _>(ExportError::Io {
                    source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
                })?;
            }
            Err(DirectoryError::Io {
                path: PathBuf::from("<stdout>"),
                operation: "write",
                source: io::Error::new(io::ErrorKind::BrokenPipe, "closed"),
            })
        }

        assert!(matches!(write_out(true), Err(DirectoryError::Export(_))));
        let err = write_out(false).unwrap_err();
        assert!(err.to_string().contains("write on '<stdout>'"), "got {err}");
        assert!(err.source().is_some());
    }
}
