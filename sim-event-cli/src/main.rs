//! Simulation Event Query CLI
//!
//! Command-line front end for the sim-event-query library. It runs one
//! configured query over the reference flight simulation events and prints
//! a report. It adds:
//! - TOML configuration files with command-line overrides
//! - Logging setup
//! - Report rendering (TXT/JSON)

use anyhow::Result;
use clap::Parser;
use sim_event_query::fixtures::ReferenceEvents;
use sim_event_query::{EventKind, EventLog, SortOrder};
use std::path::PathBuf;

mod config;
mod report;

use config::{AppConfig, OutputFormat};

/// Sim Event Query - sort, filter, group and total simulation events
#[derive(Parser, Debug)]
#[command(name = "sim-event-cli")]
#[command(about = "Query timestamped simulation events", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Only keep events of this kind (reading, control_input, actuator_command)
    #[arg(short, long, value_name = "KIND")]
    kind: Option<EventKind>,

    /// Only keep events from this source (exact, case-sensitive)
    #[arg(short, long, value_name = "SOURCE")]
    source: Option<String>,

    /// Report the first event strictly after this many seconds
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    after: Option<f64>,

    /// Sort newest first
    #[arg(long)]
    descending: bool,

    /// Keep the events in their original order
    #[arg(long, conflicts_with = "descending")]
    no_sort: bool,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Sim Event Query CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using query library v{}", sim_event_query::VERSION);

    let config = resolve_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let event_log = EventLog::from_source(&ReferenceEvents)?;
    let outcome = event_log.run(&config.query)?;

    let rendered = match config.output.format {
        OutputFormat::Txt => report::render_txt(&outcome, config.output.start_time()?)?,
        OutputFormat::Json => report::render_json(&outcome)?,
    };
    print!("{}", rendered);

    Ok(())
}

/// Merge the optional config file with command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    let query = &mut config.query;
    if let Some(kind) = args.kind {
        query.kind = Some(kind);
    }
    if let Some(source) = &args.source {
        query.source = Some(source.clone());
    }
    if let Some(after) = args.after {
        query.after = Some(after);
    }
    if args.descending {
        query.order = SortOrder::Descending;
    }
    if args.no_sort {
        query.sort = false;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    config.query.validate()?;
    Ok(config)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
