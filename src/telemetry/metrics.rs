//! Pipeline counters

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Quarterly index files downloaded
    IndexFilesFetched,
    /// 10-Q/10-K filings found in index files
    FilingsDiscovered,
    /// Vocabularies built and cached
    VocabulariesBuilt,
    /// Filings that failed to download or parse
    FilingsFailed,
    /// Price series loaded
    PriceSeriesLoaded,
    /// Dataset rows assembled
    RecordsAssembled,
}

impl CounterMetric {
    fn name(&self) -> &'static str {
        match self {
            Self::IndexFilesFetched => "edgartone_index_files_fetched",
            Self::FilingsDiscovered => "edgartone_filings_discovered",
            Self::VocabulariesBuilt => "edgartone_vocabularies_built",
            Self::FilingsFailed => "edgartone_filings_failed",
            Self::PriceSeriesLoaded => "edgartone_price_series_loaded",
            Self::RecordsAssembled => "edgartone_records_assembled",
        }
    }
}

/// Increment a pipeline counter
pub fn record_counter(metric: CounterMetric, value: u64) {
    metrics::counter!(metric.name()).increment(value);
    tracing::debug!(metric = metric.name(), value, "Recording counter");
}
