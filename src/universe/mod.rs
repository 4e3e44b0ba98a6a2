//! Investment universe membership
//!
//! The universe is a CSV table of eligible companies with `Ticker`,
//! `CIK` and `Company` columns. Filings are only processed for members.

use std::collections::HashMap;
use std::path::Path;

/// CIK-to-ticker membership table
#[derive(Debug, Clone, Default)]
pub struct Universe {
    by_cik: HashMap<u64, String>,
}

impl Universe {
    /// Load the universe from its CSV file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            anyhow::anyhow!("Failed to open universe file {}: {}", path.display(), e)
        })?;

        let mut by_cik = HashMap::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let ticker = record
                .get(0)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| anyhow::anyhow!("Missing ticker in universe row {}", row + 1))?;
            let cik: u64 = record
                .get(1)
                .and_then(|c| c.trim().parse().ok())
                .ok_or_else(|| anyhow::anyhow!("Invalid CIK in universe row {}", row + 1))?;
            by_cik.insert(cik, ticker.to_string());
        }

        if by_cik.is_empty() {
            anyhow::bail!("Universe file {} has no members", path.display());
        }

        tracing::info!(members = by_cik.len(), "Loaded investment universe");
        Ok(Self { by_cik })
    }

    /// Build a universe directly from (CIK, ticker) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u64, String)>) -> Self {
        Self {
            by_cik: pairs.into_iter().collect(),
        }
    }

    /// Ticker of a member company
    pub fn ticker_for(&self, cik: u64) -> Option<&str> {
        self.by_cik.get(&cik).map(String::as_str)
    }

    pub fn contains(&self, cik: u64) -> bool {
        self.by_cik.contains_key(&cik)
    }

    /// Deduplicated tickers in deterministic order
    pub fn tickers(&self) -> Vec<String> {
        let mut tickers: Vec<String> = self.by_cik.values().cloned().collect();
        tickers.sort();
        tickers.dedup();
        tickers
    }

    pub fn len(&self) -> usize {
        self.by_cik.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cik.is_empty()
    }
}
