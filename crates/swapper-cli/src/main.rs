//! Menu swapper replay tool - main entry point.
//!
//! Loads the swapper configuration and the on-disk preference file, then
//! replays a JSON scenario of ticks, menu opens and activations against a
//! simulated host, printing the menu after every step.

mod error;
mod scenario;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use swapper_core::{ensure_config_dir, ConfigError, SwapperConfig};
use swapper_engine::{
    Canonicalize, FileBackend, Identity, LogNotifier, PreferenceStore, Swapper, VariationMap,
};

use error::CliError;
use scenario::{replay, Scenario};

// =============================================================================
// Command line
// =============================================================================

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "menu-swapper")]
#[command(about = "Replay menu events against the menu entry swapper")]
#[command(version)]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Preference file (defaults to the config directory)
    #[arg(long)]
    prefs: Option<PathBuf>,

    /// Item variation table (JSON)
    #[arg(long)]
    variations: Option<PathBuf>,
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}

// =============================================================================
// Setup
// =============================================================================

/// `swapper` also matches the `swapper_core` and `swapper_engine` targets.
const DEFAULT_FILTER: &str = "info,menu_swapper=debug,swapper=debug";

/// Initialize the tracing subscriber for structured logging.
///
/// Log levels can be controlled via the `RUST_LOG` environment variable.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Without a config directory both contexts stay enabled.
fn config_or_default(
    loaded: Result<SwapperConfig, ConfigError>,
) -> Result<SwapperConfig, CliError> {
    match loaded {
        Err(ConfigError::NoConfigDir) => {
            tracing::warn!("No config directory, using default config");
            Ok(SwapperConfig::default())
        }
        other => Ok(other?),
    }
}

fn create_swapper(args: &Args) -> Result<Swapper, CliError> {
    let config = config_or_default(SwapperConfig::load())?;
    tracing::info!("Config: {:?}", config);

    let backend = match &args.prefs {
        Some(path) => FileBackend::open(path)?,
        None => {
            ensure_config_dir().map_err(|e| CliError::Config(e.into()))?;
            FileBackend::open_default()?
        }
    };

    let canonicalizer: Arc<dyn Canonicalize> = match &args.variations {
        Some(path) => Arc::new(VariationMap::from_json(&read(path)?)?),
        None => Arc::new(Identity),
    };

    let store = PreferenceStore::new(Arc::new(backend), canonicalizer);
    Ok(Swapper::new(config, Arc::new(store), Arc::new(LogNotifier)))
}

fn run(args: Args) -> Result<(), CliError> {
    let scenario = Scenario::from_json(&read(&args.scenario)?)?;
    let swapper = create_swapper(&args)?;

    swapper.start_up();
    let lines = replay(&swapper, &scenario);
    swapper.shut_down();

    for line in lines? {
        println!("{}", line);
    }
    Ok(())
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    init_tracing();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("menu-swapper").chain(list.iter().copied()))
    }

    #[test]
    fn test_parse_args() {
        let parsed = args(&["scenario.json", "--prefs", "p.toml"]).unwrap();
        assert_eq!(
            parsed,
            Args {
                scenario: PathBuf::from("scenario.json"),
                prefs: Some(PathBuf::from("p.toml")),
                variations: None,
            }
        );
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["a.json", "--prefs"]).is_err());
        assert!(args(&["a.json", "--verbose"]).is_err());
    }

    #[test]
    fn test_config_or_default() {
        assert_eq!(
            config_or_default(Err(ConfigError::NoConfigDir)).unwrap(),
            SwapperConfig::default()
        );

        let disabled = SwapperConfig {
            container_customization: false,
            list_customization: true,
        };
        assert_eq!(config_or_default(Ok(disabled)).unwrap(), disabled);

        assert!(matches!(
            config_or_default(Err(ConfigError::Parse("bad".to_string()))),
            Err(CliError::Config(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn test_default_filter_covers_library_targets() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        for target in ["menu_swapper", "swapper_engine::reorder", "swapper_core::config"] {
            let covered = DEFAULT_FILTER
                .split(',')
                .filter_map(|d| d.split_once('='))
                .any(|(prefix, level)| target.starts_with(prefix) && level == "debug");
            assert!(covered, "{} not at debug", target);
        }
    }

    #[test]
    fn test_run_persists_preferences() {
        let dir = tempfile::tempdir().unwrap();
        let scenario = dir.path().join("scenario.json");
        let prefs = dir.path().join("preferences.toml");
        std::fs::write(
            &scenario,
            r#"{
                "actions": [
                    { "label": "Cancel", "item_id": -1 },
                    { "label": "Withdraw-5", "subject_name": "Coins", "item_id": 995,
                      "kind": "low_priority", "context": "main" },
                    { "label": "Withdraw-1", "subject_name": "Coins", "item_id": 995,
                      "kind": "primary", "context": "main" }
                ],
                "events": [
                    { "type": "open_menu", "shift": true },
                    { "type": "activate", "label": "Swap left click Withdraw-5" }
                ]
            }"#,
        )
        .unwrap();

        run(Args {
            scenario,
            prefs: Some(prefs.clone()),
            variations: None,
        })
        .unwrap();

        let stored = std::fs::read_to_string(&prefs).unwrap();
        assert!(stored.contains("bank_995 = \"1\""));
    }
}
