//! Backtest command: score cached filings, align forward returns and
//! evaluate the strategy grid

use crate::backtest::{format_table, run_grid, write_results_csv};
use crate::config::Config;
use crate::data::CacheLayout;
use crate::dataset::{build_dataset, write_dataset_csv};
use crate::edgar::{Filing, Period};
use crate::prices::{ReturnTable, YahooClient};
use crate::sentiment::{score_vocabulary, FilingScore, LexiconSet};
use crate::telemetry::{record_counter, CounterMetric};
use crate::text::Vocabulary;
use chrono::NaiveDate;
use clap::Args;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// File name of the per-filing dataset CSV
const DATASET_FILE: &str = "sentiment_with_stock_returns.csv";
/// File name of the strategy grid CSV
const STRATEGIES_FILE: &str = "investment_strategies.csv";

#[derive(Args, Debug)]
pub struct BacktestArgs {
    /// Override the configured output directory
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl BacktestArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let filings = super::fetch::discover_cached(config)?;
        score_and_backtest(config, &filings, self.output.as_deref()).await
    }
}

/// Run the scoring, return-alignment and backtest stages over a set of
/// discovered filings
pub async fn score_and_backtest(
    config: &Config,
    filings: &[Filing],
    output_override: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let layout = CacheLayout::new(&config.data.cache_dir);
    let lexicons = LexiconSet::load(&config.lexicon)?;

    // Score every filing with a cached vocabulary
    let mut scores: Vec<FilingScore> = Vec::new();
    for filing in filings {
        let path = layout.vocab_file(&filing.vocab_file_name())?;
        if !path.exists() {
            tracing::debug!(file = %filing.vocab_file_name(), "No cached vocabulary, skipping");
            continue;
        }

        let vocab = Vocabulary::load(&path)?;
        match score_vocabulary(&vocab, &lexicons) {
            Some(sentiment) => scores.push(FilingScore {
                filing: filing.clone(),
                scores: sentiment,
            }),
            None => {
                tracing::warn!(file = %filing.vocab_file_name(), "Empty vocabulary, skipping")
            }
        }
    }
    tracing::info!(scored = scores.len(), "Scored cached filings");

    // Load daily prices for every scored ticker and derive forward returns
    let period = Period::try_from(&config.period)?;
    let start = NaiveDate::from_ymd_opt(period.start_year(), 1, 1).expect("valid date");
    let end = NaiveDate::from_ymd_opt(period.end_year(), 12, 31).expect("valid date");

    let yahoo = YahooClient::new(config.prices.clone());
    let tickers: BTreeSet<&str> = scores.iter().map(|s| s.filing.ticker.as_str()).collect();

    let mut returns = ReturnTable::default();
    for ticker in tickers {
        match yahoo.fetch_daily(ticker, start, end).await {
            Ok(series) => {
                returns.insert_series(&series, &config.returns);
                record_counter(CounterMetric::PriceSeriesLoaded, 1);
            }
            Err(e) => {
                tracing::warn!(ticker, error = %e, "Price history unavailable, skipping ticker")
            }
        }
        tokio::time::sleep(yahoo.request_delay()).await;
    }

    // Assemble and persist the dataset
    let records = build_dataset(&scores, &returns);
    if records.is_empty() {
        anyhow::bail!("No filings with both sentiment changes and forward returns");
    }

    let output_dir = output_override.unwrap_or(&config.data.output_dir);
    std::fs::create_dir_all(output_dir)?;
    write_dataset_csv(&records, output_dir.join(DATASET_FILE))?;

    // Evaluate the strategy grid
    let results = run_grid(&records, &config.backtest);
    write_results_csv(&results, output_dir.join(STRATEGIES_FILE))?;

    println!("{}", format_table(&results, config.backtest.top_strategies));
    Ok(())
}
