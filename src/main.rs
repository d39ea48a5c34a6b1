use cart_engine::application::engine::CartEngine;
use cart_engine::config::{BadgeCount, CartConfig};
use cart_engine::domain::action::CartAction;
use cart_engine::domain::summary::CartSummary;
use cart_engine::error::Result as CartResult;
use cart_engine::interfaces::csv::action_reader::ActionReader;
use cart_engine::interfaces::csv::cart_writer::CartWriter;
use cart_engine::interfaces::json::action_reader::JsonActionReader;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    Csv,
    Jsonl,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of recorded cart actions
    input: PathBuf,

    /// Input format
    #[arg(long, value_enum, default_value_t = InputFormat::Csv)]
    format: InputFormat,

    /// Flat tax rate applied to the subtotal
    #[arg(long, env = "CART_TAX_RATE", default_value = "0.10")]
    tax_rate: Decimal,

    /// Which count the cart badge shows
    #[arg(long, env = "CART_BADGE", value_enum, default_value_t = BadgeCount::Distinct)]
    badge: BadgeCount,

    /// Log every dispatch to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).into_diagnostic()?;

    let config = CartConfig::new(cli.tax_rate, cli.badge).into_diagnostic()?;
    let badge_config = config.clone();
    let mut engine = CartEngine::with_config(config);

    // Watch the published snapshots the way the navbar badge would.
    let mut updates = engine.subscribe();
    let badge_task = tokio::spawn(async move {
        let mut last_badge = 0;
        while updates.changed().await.is_ok() {
            let summary = CartSummary::new(&updates.borrow_and_update(), &badge_config);
            if summary.badge_count != last_badge {
                tracing::info!(badge = summary.badge_count, "cart badge updated");
                last_badge = summary.badge_count;
            }
        }
    });

    let file = File::open(&cli.input).into_diagnostic()?;
    let actions: Box<dyn Iterator<Item = CartResult<CartAction>>> = match cli.format {
        InputFormat::Csv => Box::new(ActionReader::new(file).actions()),
        InputFormat::Jsonl => Box::new(JsonActionReader::new(file).actions()),
    };

    for action in actions {
        match action {
            Ok(action) => {
                engine.dispatch(action);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading action");
            }
        }
        tokio::task::yield_now().await;
    }

    let summary = engine.summary();
    let state = engine.into_state();
    badge_task.await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = CartWriter::new(stdout.lock());
    writer.write_cart(&state, &summary).into_diagnostic()?;

    Ok(())
}
