// DoctorDirectory - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. The one background directory load
// 4. Applying the requested filters and printing the visible list

use clap::{Parser, ValueEnum};
use doctor_directory::app::load::LoadManager;
use doctor_directory::app::state::DirectoryState;
use doctor_directory::core::export;
use doctor_directory::core::model::ConsultationType;
use doctor_directory::platform::config::{self, PlatformPaths};
use doctor_directory::platform::fetch::DataSource;
use doctor_directory::ui::cards;
use doctor_directory::util::error::{DirectoryError, ExportError};
use doctor_directory::util::{self, constants};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// DoctorDirectory - searchable directory of medical practitioners.
///
/// Loads the practitioner list once, applies the given filters, and prints
/// the matching practitioners in source order.
#[derive(Parser, Debug)]
#[command(name = "DoctorDirectory", version, about)]
struct Cli {
    /// URL or file path of the directory JSON (overrides config.toml).
    #[arg(short = 'S', long = "source")]
    source: Option<String>,

    /// Case-insensitive substring the practitioner name must contain.
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Consultation type: "video", "clinic", or an exact label.
    #[arg(short = 'c', long = "consult", value_parser = parse_consultation)]
    consult: Option<ConsultationType>,

    /// Specialty the practitioner must list. Repeat to require several;
    /// naming the same label twice deselects it.
    #[arg(short = 's', long = "specialty")]
    specialties: Vec<String>,

    /// Output format for the visible list.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the specialty checklist and exit without loading.
    #[arg(long = "list-specialties")]
    list_specialties: bool,

    /// Config file to use instead of the platform default.
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Fetch timeout in seconds (overrides config.toml).
    #[arg(long = "timeout")]
    timeout: Option<u64>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn parse_consultation(input: &str) -> Result<ConsultationType, String> {
    if let Some(exact) = ConsultationType::from_label(input) {
        return Ok(exact);
    }
    match input.to_lowercase().as_str() {
        "video" | "video-consult" | "video consult" => Ok(ConsultationType::VideoConsult),
        "clinic" | "in-clinic" | "in clinic" => Ok(ConsultationType::InClinic),
        _ => Err(format!(
            "unknown consultation type '{input}'; expected \"video\" or \"clinic\""
        )),
    }
}

fn main() {
    let cli = Cli::parse();

    // Config first so its log level can feed logging init
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (app_config, config_warnings) = config::load_config(&config_path);

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "DoctorDirectory starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut state = DirectoryState::new();
    if let Some(ref name) = cli.name {
        state.set_name_query(name.as_str());
    }
    state.set_consultation_type(cli.consult);
    for label in &cli.specialties {
        state.toggle_specialty(label);
    }

    if cli.list_specialties {
        print!("{}", cards::render_catalog(state.criteria()));
        return;
    }

    let timeout_secs = match cli.timeout {
        Some(secs)
            if (constants::MIN_FETCH_TIMEOUT_SECS..=constants::MAX_FETCH_TIMEOUT_SECS)
                .contains(&secs) =>
        {
            secs
        }
        Some(secs) => {
            tracing::warn!(
                timeout = secs,
                using = app_config.fetch_timeout_secs,
                "--timeout out of range; using configured value"
            );
            app_config.fetch_timeout_secs
        }
        None => app_config.fetch_timeout_secs,
    };
    let source = DataSource::parse(cli.source.as_deref().unwrap_or(&app_config.source));

    let mut loader = LoadManager::new();
    loader.start_load(source, Duration::from_secs(timeout_secs));
    while state.is_loading() {
        let pending = loader.poll_progress();
        if !pending.is_empty() {
            for progress in pending {
                state.apply_load_progress(progress);
            }
            continue;
        }
        match loader.wait_progress() {
            Some(progress) => state.apply_load_progress(progress),
            None => {
                tracing::error!("Load worker exited without a result");
                state.complete_load(Default::default());
            }
        }
    }

    if let Err(e) = print_view(&state, cli.format) {
        tracing::error!(error = %e, "Failed to write output");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_view(state: &DirectoryState, format: OutputFormat) -> util::error::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Text => {
            out.write_all(cards::render_view(state).as_bytes())
                .map_err(|e| DirectoryError::Io {
                    path: PathBuf::from("<stdout>"),
                    operation: "write",
                    source: e,
                })?;
        }
        OutputFormat::Json => {
            export::export_json(&state.visible(), &mut out)?;
            writeln!(out).map_err(|e| ExportError::Io { source: e })?;
        }
        OutputFormat::Csv => {
            export::export_csv(&state.visible(), &mut out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_consultation_aliases() {
        assert_eq!(parse_consultation("Video"), Ok(ConsultationType::VideoConsult));
        assert_eq!(parse_consultation("In Clinic"), Ok(ConsultationType::InClinic));
        assert_eq!(parse_consultation("in-clinic"), Ok(ConsultationType::InClinic));
    }

    #[test]
    fn test_parse_consultation_error_echoes_input() {
        let err = parse_consultation("Home VISIT").unwrap_err();
        assert!(err.contains("'Home VISIT'"), "got {err}");
    }
}
