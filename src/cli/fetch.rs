//! Fetch command: download index files and build filing vocabularies

use crate::config::Config;
use crate::data::{write_lines, CacheLayout};
use crate::edgar::{ArchiveClient, EdgarError, Filing, IndexClient, Period};
use crate::telemetry::{record_counter, CounterMetric};
use crate::text::{Tokenizer, Vocabulary};
use crate::universe::Universe;
use clap::Args;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Rebuild vocabularies even when a cached copy exists
    #[arg(long)]
    pub force: bool,
}

impl FetchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        fetch_filings(config, self.force).await?;
        Ok(())
    }
}

/// Discover covered filings from already-cached index files, without
/// touching the network. Errors when an index file is missing.
pub(super) fn discover_cached(config: &Config) -> anyhow::Result<Vec<Filing>> {
    let universe = Universe::load(&config.universe.file)?;
    let period = Period::try_from(&config.period)?;
    let layout = CacheLayout::new(&config.data.cache_dir);

    let index = IndexClient::new(config.edgar.clone(), layout);
    index.scan(&period, &universe)
}

/// Discover covered filings and make sure every one has a cached
/// vocabulary, downloading and tokenizing documents as needed.
///
/// Returns the full list of discovered filings, including those whose
/// vocabulary was already cached.
pub async fn fetch_filings(config: &Config, force: bool) -> anyhow::Result<Vec<Filing>> {
    let universe = Universe::load(&config.universe.file)?;
    let period = Period::try_from(&config.period)?;
    let layout = CacheLayout::new(&config.data.cache_dir);

    let index = IndexClient::new(config.edgar.clone(), layout.clone());
    index.sync(&period).await?;
    let filings = index.scan(&period, &universe)?;

    let archive = ArchiveClient::new(config.edgar.clone());
    let tokenizer = Tokenizer::new();
    let mut bad_filings: Vec<String> = Vec::new();
    let mut built = 0usize;

    for filing in &filings {
        let name = filing.vocab_file_name();
        let path = layout.vocab_file(&name)?;
        if path.exists() && !force {
            tracing::debug!(file = %name, "Vocabulary already cached, skipping");
            continue;
        }

        let document = match archive.fetch_document(&filing.path).await {
            Ok(document) => document,
            Err(e) => {
                tracing::warn!(ticker = %filing.ticker, file = %name, error = %e, "Filing download failed");
                record_counter(CounterMetric::FilingsFailed, 1);
                bad_filings.push(name);
                tokio::time::sleep(archive.request_delay()).await;
                continue;
            }
        };

        let vocab = Vocabulary::from_tokens(tokenizer.tokenize(&document));
        if vocab.is_empty() {
            let err = EdgarError::EmptyFiling(name.clone());
            tracing::warn!(ticker = %filing.ticker, error = %err, "Discarding filing");
            record_counter(CounterMetric::FilingsFailed, 1);
            bad_filings.push(name);
        } else {
            vocab.save(&path)?;
            record_counter(CounterMetric::VocabulariesBuilt, 1);
            built += 1;
            tracing::info!(
                ticker = %filing.ticker,
                file = %name,
                terms = vocab.distinct(),
                "Built vocabulary"
            );
        }

        tokio::time::sleep(archive.request_delay()).await;
    }

    if config.data.backup_enabled {
        let backup = layout.backup_dir()?;
        write_lines(backup.join("bad_filings.txt"), &bad_filings)?;
        write_lines(
            backup.join("sec_filings_url_list.txt"),
            filings.iter().map(|f| {
                format!(
                    "{}|{}|{}|{}",
                    f.vocab_file_name(),
                    f.path,
                    f.date,
                    f.filing_type
                )
            }),
        )?;
    }

    tracing::info!(
        discovered = filings.len(),
        built,
        failed = bad_filings.len(),
        "Filing fetch complete"
    );
    Ok(filings)
}
