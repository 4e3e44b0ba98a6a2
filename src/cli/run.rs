//! Run command: the full pipeline in one shot

use crate::config::Config;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Rebuild vocabularies even when a cached copy exists
    #[arg(long)]
    pub force: bool,

    /// Override the configured output directory
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl RunArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let filings = super::fetch::fetch_filings(config, self.force).await?;
        super::backtest::score_and_backtest(config, &filings, self.output.as_deref()).await
    }
}
