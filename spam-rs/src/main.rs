//! spam-rs: Naive Bayes spam filter
//!
//! Trains on `train/spam` and `train/ham` under the data directory, then
//! prints `<filename> <label>` for every file in `test`, in numeric file
//! name order.
//!
//! # Usage
//!
//! ```bash
//! # Use ./data/
//! spam-rs
//!
//! # Use another data directory
//! spam-rs /srv/corpus
//!
//! # Read settings from a config file, emit JSON lines
//! spam-rs --config spam-rs.toml --format json
//! ```

use clap::Parser;
use spam_rs::config::OutputFormat;
use spam_rs::{pipeline, Config};
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "spam-rs")]
#[command(about = "Classify test messages as spam or ham", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding train/spam, train/ham and test
    data_dir: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is unset (e.g. info, spam_rs=debug)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(ref data_dir) = cli.data_dir {
        config.data.set_base_dir(data_dir)?;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    // Logs go to stderr; stdout carries only the predictions
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting spam-rs v{}", env!("CARGO_PKG_VERSION"));
    info!("Data directory: {}", config.data.base_dir);

    let predictions = pipeline::run(&config).await?;

    let stdout = std::io::stdout();
    pipeline::write_predictions(
        BufWriter::new(stdout.lock()),
        &predictions,
        config.output.format,
    )?;

    Ok(())
}
