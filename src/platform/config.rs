// DoctorDirectory - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for DoctorDirectory configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/doctordirectory/ or %APPDATA%\DoctorDirectory\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Full path of the default config.toml.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[source]` section.
    pub source: SourceSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[source]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct SourceSection {
    /// URL or file path of the directory payload.
    pub url: Option<String>,
    /// Fetch timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// URL or file path of the directory payload.
    pub source: String,
    /// Fetch timeout in seconds.
    pub fetch_timeout_secs: u64,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: constants::DEFAULT_SOURCE_URL.to_string(),
            fetch_timeout_secs: constants::DEFAULT_FETCH_TIMEOUT_SECS,
            log_level: None,
        }
    }
}

/// Load and validate a config file.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults and a warning;
/// the directory still starts.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(config_path) {
        Ok(raw) => raw,
        Err(e) => {
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::debug!(path = %config_path.display(), "Loaded config.toml");

    let (config, validation_errors) = validate(raw);
    warnings.extend(validation_errors.iter().map(|e| format!("{e}. Using default.")));

    (config, warnings)
}

fn read_raw_config(config_path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })
}

/// Validate each field against named constants, accumulating all errors.
fn validate(raw: RawConfig) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::default();
    let mut errors = Vec::new();

    // -- Source: url --
    if let Some(url) = raw.source.url {
        if url.trim().is_empty() {
            errors.push(ConfigError::ValueOutOfRange {
                field: "source.url".to_string(),
                value: url,
                expected: "a URL or file path".to_string(),
            });
        } else {
            config.source = url;
        }
    }

    // -- Source: timeout_secs --
    if let Some(secs) = raw.source.timeout_secs {
        if (constants::MIN_FETCH_TIMEOUT_SECS..=constants::MAX_FETCH_TIMEOUT_SECS).contains(&secs) {
            config.fetch_timeout_secs = secs;
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "source.timeout_secs".to_string(),
                value: secs.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_FETCH_TIMEOUT_SECS,
                    constants::MAX_FETCH_TIMEOUT_SECS
                ),
            });
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            errors.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
            });
        }
    }

    (config, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(&dir.path().join("config.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let file = write_config(
            "[source]\nurl = \"doctors.json\"\ntimeout_secs = 5\n\n[logging]\nlevel = \"DEBUG\"\n",
        );
        let (config, warnings) = load_config(file.path());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.source, "doctors.json");
        assert_eq!(config.fetch_timeout_secs, 5);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back() {
        let file = write_config("[source]\nurl = \"  \"\ntimeout_secs = 0\n\n[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(file.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("source.timeout_secs")));
    }

    #[test]
    fn test_unparseable_file_warns() {
        let file = write_config("[source\nurl = ");
        let (config, warnings) = load_config(file.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let file = write_config("[ui]\ntheme = \"dark\"\n[source]\nextra = 1\n");
        let (_, warnings) = load_config(file.path());
        assert!(warnings.is_empty());
    }
}
