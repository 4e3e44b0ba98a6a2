//! CSV output for the assembled dataset

use super::FilingRecord;
use rust_decimal::Decimal;
use std::path::Path;

/// Column order of the dataset CSV
const HEADER: &[&str] = &[
    "Ticker",
    "CIK",
    "Filing Type",
    "Year",
    "Quarter",
    "Filing Date",
    "Pos",
    "Neg",
    "Unc",
    "Lit",
    "Pos Qtrly Pct Chng",
    "Neg Qtrly Pct Chng",
    "Unc Qtrly Pct Chng",
    "Lit Qtrly Pct Chng",
    "Pos Yearly Pct Chng",
    "Neg Yearly Pct Chng",
    "Unc Yearly Pct Chng",
    "Lit Yearly Pct Chng",
    "Fwd-1-Week Return",
    "Fwd-1-Month Return",
    "Fwd-1-Qtr Return",
];

/// Write the sentiment/return dataset to a CSV file
pub fn write_dataset_csv(records: &[FilingRecord], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;

    writer.write_record(HEADER)?;
    for record in records {
        writer.write_record([
            record.ticker.clone(),
            record.cik.to_string(),
            record.filing_type.to_string(),
            record.year.to_string(),
            record.quarter.to_string(),
            record.date.to_string(),
            record.scores.positive.to_string(),
            record.scores.negative.to_string(),
            record.scores.uncertain.to_string(),
            record.scores.litigious.to_string(),
            opt(record.quarterly_change.positive),
            opt(record.quarterly_change.negative),
            opt(record.quarterly_change.uncertain),
            opt(record.quarterly_change.litigious),
            opt(record.yearly_change.positive),
            opt(record.yearly_change.negative),
            opt(record.yearly_change.uncertain),
            opt(record.yearly_change.litigious),
            opt(record.forward.week),
            opt(record.forward.month),
            opt(record.forward.quarter),
        ])?;
    }
    writer.flush()?;

    tracing::info!(records = records.len(), path = %path.display(), "Wrote dataset CSV");
    Ok(())
}

fn opt(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
