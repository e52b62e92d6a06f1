use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ascii_draw::{load_config, ErrorPolicy, Session};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Draw on an ASCII canvas with C / L / R / B commands, one per line"
)]
struct Args {
    /// Read commands from FILE instead of stdin
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Write renders to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Configuration file (TOML or JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip failing commands instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Log at INFO level
    #[arg(short, long)]
    verbose: bool,

    /// Log at DEBUG level
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Set log level based on flags
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else if args.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Logs go to stderr; stdout carries only renders
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    tracing::debug!("ascii-draw version {}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(args.config.as_deref())?.apply_env()?;
    if args.keep_going {
        config.on_error = ErrorPolicy::Skip;
    }
    tracing::debug!(?config, "Loaded configuration");

    let mut session = Session::new(config);

    let reader: Box<dyn io::BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    let writer: Box<dyn io::Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let summary = session.run(reader, writer)?;
    tracing::info!(
        "Processed {} commands ({} failed)",
        summary.processed,
        summary.failed
    );
    Ok(())
}
