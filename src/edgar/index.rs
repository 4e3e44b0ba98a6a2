//! Quarterly EDGAR full-index files
//!
//! Downloads `xbrl.idx` per covered quarter into the local cache and
//! scans the cached files for 10-Q/10-K filings of universe members.

use super::{EdgarError, Filing, FilingType, Period};
use crate::config::EdgarConfig;
use crate::data::CacheLayout;
use crate::telemetry::{record_counter, CounterMetric};
use crate::universe::Universe;
use chrono::NaiveDate;
use reqwest::Client;
use std::time::Duration;

/// Client for quarterly index files
pub struct IndexClient {
    config: EdgarConfig,
    layout: CacheLayout,
    client: Client,
}

impl IndexClient {
    pub fn new(config: EdgarConfig, layout: CacheLayout) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            layout,
            client,
        }
    }

    /// Download index files for every covered quarter not already cached
    pub async fn sync(&self, period: &Period) -> anyhow::Result<()> {
        for (year, quarter) in period.quarters() {
            let path = self.layout.index_file(year, quarter)?;
            if path.exists() {
                tracing::debug!(year, quarter, "Index file already cached, skipping");
                continue;
            }

            let url = format!("{}/{}/QTR{}/xbrl.idx", self.config.index_base_url, year, quarter);
            tracing::info!(year, quarter, url = %url, "Downloading index file");

            let response = self
                .client
                .get(&url)
                .header(reqwest::header::USER_AGENT, &self.config.user_agent)
                .send()
                .await?;

            if !response.status().is_success() {
                anyhow::bail!(
                    "EDGAR index download failed for {} QTR{}: {}",
                    year,
                    quarter,
                    response.status()
                );
            }

            let body = response.bytes().await?;
            std::fs::write(&path, &body)?;
            record_counter(CounterMetric::IndexFilesFetched, 1);

            tokio::time::sleep(Duration::from_millis(self.config.request_delay_ms)).await;
        }

        Ok(())
    }

    /// Scan cached index files for 10-Q/10-K filings of universe members
    pub fn scan(&self, period: &Period, universe: &Universe) -> anyhow::Result<Vec<Filing>> {
        let mut filings = Vec::new();

        for (year, quarter) in period.quarters() {
            let path = self.layout.index_file(year, quarter)?;
            if !path.exists() {
                return Err(EdgarError::MissingIndex { year, quarter }.into());
            }

            // Index files are latin-1; decode lossily rather than failing
            let bytes = std::fs::read(&path)?;
            let content = String::from_utf8_lossy(&bytes);

            let mut found = 0usize;
            for line in content.lines() {
                if let Some(filing) = parse_index_line(line, year, quarter, universe) {
                    tracing::debug!(
                        ticker = %filing.ticker,
                        form = %filing.filing_type,
                        date = %filing.date,
                        "Found filing"
                    );
                    filings.push(filing);
                    found += 1;
                }
            }
            tracing::info!(year, quarter, found, "Scanned index file");
        }

        record_counter(CounterMetric::FilingsDiscovered, filings.len() as u64);
        tracing::info!(total = filings.len(), "Filing discovery complete");
        Ok(filings)
    }
}

/// Parse one pipe-delimited index line into a filing
///
/// Layout: `CIK|Company Name|Form Type|Date Filed|Filename`.
/// Returns None for header lines, other form types and non-members.
fn parse_index_line(
    line: &str,
    year: i32,
    quarter: u8,
    universe: &Universe,
) -> Option<Filing> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() < 5 {
        return None;
    }

    let filing_type = FilingType::from_form(fields[2].trim())?;
    let cik: u64 = fields[0].trim().parse().ok()?;
    let ticker = universe.ticker_for(cik)?.to_string();
    let date = NaiveDate::parse_from_str(fields[3].trim(), "%Y-%m-%d").ok()?;
    let path = fields[4].trim().to_string();

    Some(Filing {
        cik,
        ticker,
        filing_type,
        date,
        year,
        quarter,
        path,
    })
}
