//! Agenda Maker - command line entry point
//!
//! Reads the submissions CSV and writes `Agenda-<date>.txt`.

use agenda_maker::config::AgendaConfig;
use agenda_maker::observability::init_default_logging;
use agenda_maker::{AgendaPipeline, NoOpProgress, Progress, TerminalProgress};
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::{error, info, warn};

const DEFAULT_CONFIG_PATH: &str = "agenda.toml";

/// Build the board meeting agenda from a CSV of submissions
#[derive(Parser)]
#[command(name = "agenda-maker")]
#[command(about = "Build the board meeting agenda from a CSV of submissions")]
#[command(version)]
struct Cli {
    /// Name of the CSV file to read
    #[arg(long, value_name = "FILE", default_value = "data.csv")]
    file: PathBuf,

    /// Configuration file path (defaults to ./agenda.toml when present)
    #[arg(short, long, value_name = "FILE", env = "AGENDA_CONFIG")]
    config: Option<PathBuf>,

    /// Directory the agenda file is written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Date used in the agenda file name (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    date: Option<NaiveDate>,

    /// Do not print progress lines
    #[arg(short, long)]
    quiet: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    show_config: bool,
}

fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let mut config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if let Some(dir) = cli.output_dir {
        config.output.directory = dir;
    }

    if cli.show_config {
        match toml::to_string_pretty(&config) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                error!("Failed to render configuration: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let progress: Arc<dyn Progress> = if cli.quiet {
        Arc::new(NoOpProgress)
    } else {
        Arc::new(TerminalProgress::stderr())
    };

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let pipeline = AgendaPipeline::with_progress(config, progress);

    match pipeline.run(&cli.file, date) {
        Ok(path) => info!("Agenda written to {}", path.display()),
        Err(e) if e.is_fatal() => {
            error!("Agenda run aborted: {}", e);
            eprintln!("{e}");
            process::exit(1);
        }
        Err(e) => {
            // Output failures are reported without failing the process.
            warn!("Agenda was not written: {}", e);
            println!("{e}");
        }
    }
}

fn load_configuration(
    config_path: Option<&Path>,
) -> Result<AgendaConfig, agenda_maker::config::ConfigError> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            AgendaConfig::load_from_file(path)
        }
        None => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            if path.exists() {
                info!("Loading configuration from: {}", path.display());
                AgendaConfig::load_from_file(path)
            } else {
                Ok(AgendaConfig::default())
            }
        }
    }
}
