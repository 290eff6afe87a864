// DoctorDirectory - util/logging.rs
//
// Structured logging with runtime-selectable debug mode.
//
// Activation:
//   - Environment variable: RUST_LOG=debug (or trace)
//   - CLI flag: --debug (sets level to debug)
//   - Config file: [logging] level = "debug"
//
// Output: stderr, so stdout only ever carries the rendered directory.
// Never logs record contents, only counts and criteria shapes.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// `debug_flag` is true when the user passed --debug on the CLI.
/// `config_level` is the level from config.toml (if present).
///
/// Priority: RUST_LOG env var > CLI --debug flag > config level > default "info".
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = resolve_filter(
        std::env::var("RUST_LOG").ok().as_deref(),
        debug_flag,
        config_level,
    );

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&filter))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        filter = %filter,
        "Logging initialised"
    );
}

/// Pick the filter directive according to the documented priority order.
fn resolve_filter(env_value: Option<&str>, debug_flag: bool, config_level: Option<&str>) -> String {
    if let Some(env) = env_value.filter(|v| !v.is_empty()) {
        env.to_string()
    } else if debug_flag {
        "debug".to_string()
    } else if let Some(level) = config_level {
        level.to_string()
    } else {
        super::constants::DEFAULT_LOG_LEVEL.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_wins() {
        assert_eq!(resolve_filter(Some("trace"), true, Some("warn")), "trace");
    }

    #[test]
    fn test_debug_flag_beats_config() {
        assert_eq!(resolve_filter(None, true, Some("warn")), "debug");
    }

    #[test]
    fn test_config_then_default() {
        assert_eq!(resolve_filter(None, false, Some("warn")), "warn");
        assert_eq!(resolve_filter(Some(""), false, None), "info");
    }
}
