use anyhow::Result;
use clap::{Arg, Command};
use sandbox_sync::{sync_mappings, AppConfig, MirrorConfig, SyncMode, SyncReport};
use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("Sandbox Sync")
        .version("1.0")
        .about("Mirrors shared source assets into sandbox project trees")
        .arg(
            Arg::new("mode")
                .value_name("MODE")
                .help("Asset variant to sync: tests or vfinals (prompts when omitted)")
                .value_parser(["tests", "vfinals"]),
        )
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .help("Base directory the mapping paths resolve against"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("TOML mapping table replacing the built-in one"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .get_matches();

    // Initialize logging
    initialize_logging(matches.get_one::<String>("log-level").unwrap());

    // Load environment variables
    load_environment();

    // Initialize configuration from command line arguments and environment
    let config = create_app_config(&matches)?;

    // Run the application
    run_application(config)
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Load optional overrides from a .env file
fn load_environment() {
    if dotenvy::dotenv().is_err() {
        info!("No .env file found, using system environment variables");
    }
}

/// Resolve application configuration from CLI arguments, falling back to
/// the SANDBOX_SYNC_ROOT and SANDBOX_SYNC_CONFIG environment variables
fn create_app_config(matches: &clap::ArgMatches) -> Result<AppConfig> {
    let mode = matches
        .get_one::<String>("mode")
        .map(|raw| raw.parse::<SyncMode>().map_err(|e| anyhow::anyhow!(e)))
        .transpose()?;

    let root = matches
        .get_one::<String>("root")
        .cloned()
        .or_else(|| env::var("SANDBOX_SYNC_ROOT").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config_file = matches
        .get_one::<String>("config")
        .cloned()
        .or_else(|| env::var("SANDBOX_SYNC_CONFIG").ok())
        .map(PathBuf::from);

    let log_level = matches.get_one::<String>("log-level").unwrap().clone();

    Ok(AppConfig {
        mode,
        root,
        config_file,
        log_level,
    })
}

/// Main application logic: resolve the mapping table and mode, run the
/// mirror, print the report
fn run_application(config: AppConfig) -> Result<()> {
    info!("Starting sandbox sync");
    info!("Configuration: {:#?}", config);

    let mirror_config = match &config.config_file {
        Some(path) => {
            info!("Loading mapping table from {}", path.display());
            MirrorConfig::from_file(path)?
        }
        None => MirrorConfig::default(),
    };

    let mode = match config.mode {
        Some(mode) => mode,
        None => prompt_mode()?,
    };

    info!("Syncing {} directories under {}", mode, config.root.display());

    let report = sync_mappings(&config.root, mirror_config.mappings_for(mode))?;

    print_sync_report(&report);

    info!("Sync completed successfully");
    Ok(())
}

/// Prompt for the sync mode when no argument was given
fn prompt_mode() -> Result<SyncMode> {
    print!("1 = sync test directories / 2 = sync finalized directories: ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;

    match choice.trim() {
        "1" => Ok(SyncMode::Tests),
        "2" => Ok(SyncMode::VFinals),
        other => anyhow::bail!("invalid choice '{}', expected 1 or 2", other),
    }
}

/// Print the mirror report through the logger
fn print_sync_report(report: &SyncReport) {
    info!("=== SYNC REPORT ===");
    info!("Directories copied: {}", report.copied.len());
    info!("Already present (skipped): {}", report.skipped);
    info!("Missing source roots: {}", report.missing_sources.len());

    for copied in &report.copied {
        info!(
            "  {} -> {}",
            copied.source.display(),
            copied.destination.display()
        );
    }

    if !report.missing_sources.is_empty() {
        warn!("Source roots that were skipped:");
        for source in &report.missing_sources {
            warn!("  {}", source.display());
        }
    }
}
