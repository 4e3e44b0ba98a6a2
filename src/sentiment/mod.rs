//! Filing sentiment scoring
//!
//! Loughran-McDonald word lists and the four tone scores derived from
//! term frequencies.

mod lexicon;
mod score;

pub use lexicon::{Lexicon, LexiconSet};
pub use score::{score_vocabulary, FilingScore, SentimentScores};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four scored tone dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentKind {
    Positive,
    Negative,
    Uncertain,
    Litigious,
}

impl SentimentKind {
    pub const ALL: [SentimentKind; 4] = [
        SentimentKind::Positive,
        SentimentKind::Negative,
        SentimentKind::Uncertain,
        SentimentKind::Litigious,
    ];

    /// Short column label used in CSV outputs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Pos",
            Self::Negative => "Neg",
            Self::Uncertain => "Unc",
            Self::Litigious => "Lit",
        }
    }
}

impl std::fmt::Display for SentimentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-kind percent changes against an earlier filing's scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentChanges {
    pub positive: Option<Decimal>,
    pub negative: Option<Decimal>,
    pub uncertain: Option<Decimal>,
    pub litigious: Option<Decimal>,
}

impl SentimentChanges {
    pub fn get(&self, kind: SentimentKind) -> Option<Decimal> {
        match kind {
            SentimentKind::Positive => self.positive,
            SentimentKind::Negative => self.negative,
            SentimentKind::Uncertain => self.uncertain,
            SentimentKind::Litigious => self.litigious,
        }
    }
}
