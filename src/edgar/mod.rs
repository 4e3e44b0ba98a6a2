//! EDGAR filing discovery
//!
//! Quarterly full-index download, 10-Q/10-K filtering and filing
//! document retrieval.

mod archive;
mod index;

pub use archive::ArchiveClient;
pub use index::IndexClient;

use crate::config::PeriodConfig;
use chrono::NaiveDate;
use thiserror::Error;

/// Filing discovery errors
#[derive(Debug, Error)]
pub enum EdgarError {
    /// Quarterly index file expected in the cache but absent
    #[error("index file for {year} QTR{quarter} is not cached; run `fetch` first")]
    MissingIndex { year: i32, quarter: u8 },
    /// Filing document yielded no usable text
    #[error("filing {0} produced an empty vocabulary")]
    EmptyFiling(String),
}

/// SEC report type covered by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilingType {
    TenQ,
    TenK,
}

impl FilingType {
    /// Parse the form-type column of an index line
    pub fn from_form(form: &str) -> Option<Self> {
        match form {
            "10-Q" => Some(Self::TenQ),
            "10-K" => Some(Self::TenK),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TenQ => "10-Q",
            Self::TenK => "10-K",
        }
    }
}

impl std::fmt::Display for FilingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 10-Q or 10-K filing discovered in the quarterly index
#[derive(Debug, Clone)]
pub struct Filing {
    /// SEC Central Index Key of the filer
    pub cik: u64,
    /// Ticker of the filer, from the investment universe
    pub ticker: String,
    pub filing_type: FilingType,
    /// Date the report was filed
    pub date: NaiveDate,
    /// Index year the filing was found in
    pub year: i32,
    /// Index quarter the filing was found in
    pub quarter: u8,
    /// Archive-relative path of the filing document
    pub path: String,
}

impl Filing {
    /// Name of the cached term-frequency vocabulary for this filing
    pub fn vocab_file_name(&self) -> String {
        format!("CIK{}-{}-QTR{}.json", self.cik, self.year, self.quarter)
    }
}

/// Inclusive year/quarter range of covered filings
#[derive(Debug, Clone, Copy)]
pub struct Period {
    start_year: i32,
    start_quarter: u8,
    end_year: i32,
    end_quarter: u8,
}

impl Period {
    pub fn new(
        start_year: i32,
        start_quarter: u8,
        end_year: i32,
        end_quarter: u8,
    ) -> anyhow::Result<Self> {
        if !(1..=4).contains(&start_quarter) || !(1..=4).contains(&end_quarter) {
            anyhow::bail!("quarters must be between 1 and 4");
        }
        let period = Self {
            start_year,
            start_quarter,
            end_year,
            end_quarter,
        };
        if ordinal(start_year, start_quarter) > ordinal(end_year, end_quarter) {
            anyhow::bail!("period start is after period end");
        }
        Ok(period)
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Whether a year/quarter pair falls inside the period
    pub fn contains(&self, year: i32, quarter: u8) -> bool {
        let ord = ordinal(year, quarter);
        ord >= ordinal(self.start_year, self.start_quarter)
            && ord <= ordinal(self.end_year, self.end_quarter)
    }

    /// All covered (year, quarter) pairs in chronological order
    pub fn quarters(&self) -> Vec<(i32, u8)> {
        let mut out = Vec::new();
        for year in self.start_year..=self.end_year {
            for quarter in 1..=4u8 {
                if self.contains(year, quarter) {
                    out.push((year, quarter));
                }
            }
        }
        out
    }
}

impl TryFrom<&PeriodConfig> for Period {
    type Error = anyhow::Error;

    fn try_from(config: &PeriodConfig) -> anyhow::Result<Self> {
        Self::new(
            config.start_year,
            config.start_quarter,
            config.end_year,
            config.end_quarter,
        )
    }
}

fn ordinal(year: i32, quarter: u8) -> i32 {
    10 * year + i32::from(quarter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filing_type_from_form() {
        assert_eq!(FilingType::from_form("10-Q"), Some(FilingType::TenQ));
        assert_eq!(FilingType::from_form("10-K"), Some(FilingType::TenK));
        assert_eq!(FilingType::from_form("8-K"), None);
        assert_eq!(FilingType::from_form("10-K/A"), None);
    }

    #[test]
    fn test_filing_type_display() {
        assert_eq!(FilingType::TenQ.to_string(), "10-Q");
        assert_eq!(FilingType::TenK.to_string(), "10-K");
    }

    #[test]
    fn test_vocab_file_name() {
        let filing = Filing {
            cik: 63908,
            ticker: "MCD".to_string(),
            filing_type: FilingType::TenQ,
            date: NaiveDate::from_ymd_opt(2018, 5, 1).unwrap(),
            year: 2018,
            quarter: 2,
            path: "edgar/data/63908/0000063908-18-000021.txt".to_string(),
        };
        assert_eq!(filing.vocab_file_name(), "CIK63908-2018-QTR2.json");
    }

    #[test]
    fn test_period_contains_bounds() {
        let period = Period::new(2016, 2, 2018, 3).unwrap();
        assert!(!period.contains(2016, 1));
        assert!(period.contains(2016, 2));
        assert!(period.contains(2017, 4));
        assert!(period.contains(2018, 3));
        assert!(!period.contains(2018, 4));
    }

    #[test]
    fn test_period_quarters() {
        let period = Period::new(2019, 3, 2020, 2).unwrap();
        assert_eq!(
            period.quarters(),
            vec![(2019, 3), (2019, 4), (2020, 1), (2020, 2)]
        );
    }

    #[test]
    fn test_period_single_quarter() {
        let period = Period::new(2020, 2, 2020, 2).unwrap();
        assert_eq!(period.quarters(), vec![(2020, 2)]);
    }

    #[test]
    fn test_period_invalid_quarter() {
        assert!(Period::new(2020, 0, 2020, 4).is_err());
        assert!(Period::new(2020, 1, 2020, 5).is_err());
    }

    #[test]
    fn test_period_inverted() {
        assert!(Period::new(2020, 3, 2020, 1).is_err());
        assert!(Period::new(2021, 1, 2020, 4).is_err());
    }
}
