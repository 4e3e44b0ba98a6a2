//! Sentiment/return dataset assembly
//!
//! Joins filing scores with forward returns, attaches the scores of the
//! previous quarter and previous year, and derives percent changes.

mod writer;

pub use writer::write_dataset_csv;

use crate::edgar::FilingType;
use crate::prices::{ForwardReturns, ReturnTable};
use crate::sentiment::{FilingScore, SentimentChanges, SentimentKind, SentimentScores};
use crate::telemetry::{record_counter, CounterMetric};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// One fully assembled analysis row
#[derive(Debug, Clone)]
pub struct FilingRecord {
    pub ticker: String,
    pub cik: u64,
    pub filing_type: FilingType,
    pub year: i32,
    pub quarter: u8,
    pub date: NaiveDate,
    pub scores: SentimentScores,
    /// Percent changes vs the previous quarter's filing
    pub quarterly_change: SentimentChanges,
    /// Percent changes vs the previous year's filing
    pub yearly_change: SentimentChanges,
    pub forward: ForwardReturns,
}

impl FilingRecord {
    /// The percent change selected by a strategy
    pub fn change(&self, kind: SentimentKind, period: ChangePeriod) -> Option<Decimal> {
        match period {
            ChangePeriod::Quarterly => self.quarterly_change.get(kind),
            ChangePeriod::Yearly => self.yearly_change.get(kind),
        }
    }
}

/// Which score change a strategy reacts to
///
/// Yearly changes compare like with like: 10-Ks against 10-Ks, which
/// mitigates the seasonality of annual versus quarterly reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangePeriod {
    Quarterly,
    Yearly,
}

impl ChangePeriod {
    pub const ALL: [ChangePeriod; 2] = [ChangePeriod::Quarterly, ChangePeriod::Yearly];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Quarterly => "Qtrly",
            Self::Yearly => "Yearly",
        }
    }
}

impl std::fmt::Display for ChangePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Join scored filings with forward returns and attach score history
///
/// - Filings without price data on their filing date drop (inner join).
/// - Filings without a previous-quarter filing drop (inner join).
/// - Previous-year scores are attached when available (left join).
///
/// When a company files twice in the same index quarter, the first
/// filing wins the history lookup.
pub fn build_dataset(scores: &[FilingScore], returns: &ReturnTable) -> Vec<FilingRecord> {
    // Inner join with forward returns on (ticker, filing date)
    let matched: Vec<(&FilingScore, ForwardReturns)> = scores
        .iter()
        .filter_map(|score| {
            returns
                .get(&score.filing.ticker, score.filing.date)
                .map(|fwd| (score, *fwd))
        })
        .collect();

    // Score history per (cik, year, quarter), first filing wins
    let mut history: HashMap<(u64, i32, u8), SentimentScores> = HashMap::new();
    for (score, _) in &matched {
        history
            .entry((score.filing.cik, score.filing.year, score.filing.quarter))
            .or_insert(score.scores);
    }

    let mut records = Vec::new();
    for (score, forward) in matched {
        let filing = &score.filing;

        let prev_quarter_key = if filing.quarter == 1 {
            (filing.cik, filing.year - 1, 4)
        } else {
            (filing.cik, filing.year, filing.quarter - 1)
        };
        // No previous quarter on record means no quarterly change; the
        // row drops, matching the inner-join semantics of the dataset
        let Some(prev_quarter) = history.get(&prev_quarter_key) else {
            tracing::debug!(
                ticker = %filing.ticker,
                year = filing.year,
                quarter = filing.quarter,
                "No previous-quarter filing, dropping row"
            );
            continue;
        };

        let prev_year = history.get(&(filing.cik, filing.year - 1, filing.quarter));

        records.push(FilingRecord {
            ticker: filing.ticker.clone(),
            cik: filing.cik,
            filing_type: filing.filing_type,
            year: filing.year,
            quarter: filing.quarter,
            date: filing.date,
            scores: score.scores,
            quarterly_change: changes(&score.scores, Some(prev_quarter)),
            yearly_change: changes(&score.scores, prev_year),
            forward,
        });
    }

    record_counter(CounterMetric::RecordsAssembled, records.len() as u64);
    tracing::info!(records = records.len(), "Assembled sentiment/return dataset");
    records
}

fn changes(current: &SentimentScores, previous: Option<&SentimentScores>) -> SentimentChanges {
    let Some(previous) = previous else {
        return SentimentChanges::default();
    };
    SentimentChanges {
        positive: pct_change(current.positive, previous.positive),
        negative: pct_change(current.negative, previous.negative),
        uncertain: pct_change(current.uncertain, previous.uncertain),
        litigious: pct_change(current.litigious, previous.litigious),
    }
}

/// Percent change, undefined when the base is zero
fn pct_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    Some((Decimal::from(100) * (current / previous - Decimal::ONE)).round_dp(2))
}
