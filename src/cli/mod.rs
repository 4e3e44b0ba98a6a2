//! CLI interface for edgar-tone
//!
//! Provides subcommands for:
//! - `run`: Full pipeline (fetch, score, returns, backtest)
//! - `fetch`: Download index files and build filing vocabularies
//! - `backtest`: Score cached filings and evaluate strategies
//! - `status`: Show cache contents
//! - `config`: Show current configuration

mod backtest;
mod fetch;
mod run;

pub use backtest::BacktestArgs;
pub use fetch::FetchArgs;
pub use run::RunArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "edgar-tone")]
#[command(about = "Sentiment backtester for SEC 10-Q/10-K filings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline
    Run(RunArgs),
    /// Download index files and build filing vocabularies
    Fetch(FetchArgs),
    /// Score cached filings and evaluate strategies
    Backtest(BacktestArgs),
    /// Show cache contents
    Status,
    /// Show current configuration
    Config,
}
