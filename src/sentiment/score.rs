//! Sentiment scoring of filing vocabularies

use super::{LexiconSet, SentimentKind};
use crate::edgar::Filing;
use crate::text::Vocabulary;
use rust_decimal::Decimal;

/// The four tone scores of one filing
///
/// Each score is the share of matching terms in the total term count,
/// expressed as a percentage rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScores {
    pub positive: Decimal,
    pub negative: Decimal,
    pub uncertain: Decimal,
    pub litigious: Decimal,
}

impl SentimentScores {
    pub fn get(&self, kind: SentimentKind) -> Decimal {
        match kind {
            SentimentKind::Positive => self.positive,
            SentimentKind::Negative => self.negative,
            SentimentKind::Uncertain => self.uncertain,
            SentimentKind::Litigious => self.litigious,
        }
    }
}

/// A scored filing
#[derive(Debug, Clone)]
pub struct FilingScore {
    pub filing: Filing,
    pub scores: SentimentScores,
}

/// Score a vocabulary against the four word lists
///
/// Returns None for an empty vocabulary, which cannot be scored.
pub fn score_vocabulary(vocab: &Vocabulary, lexicons: &LexiconSet) -> Option<SentimentScores> {
    let total = vocab.total();
    if total == 0 {
        return None;
    }

    let mut positive = 0u64;
    let mut negative = 0u64;
    let mut uncertain = 0u64;
    let mut litigious = 0u64;

    for (term, count) in vocab.iter() {
        if lexicons.positive.contains(term) {
            positive += count;
        }
        if lexicons.negative.contains(term) {
            negative += count;
        }
        if lexicons.uncertain.contains(term) {
            uncertain += count;
        }
        if lexicons.litigious.contains(term) {
            litigious += count;
        }
    }

    Some(SentimentScores {
        positive: percentage(positive, total),
        negative: percentage(negative, total),
        uncertain: percentage(uncertain, total),
        litigious: percentage(litigious, total),
    })
}

fn percentage(hits: u64, total: u64) -> Decimal {
    (Decimal::from(100) * Decimal::from(hits) / Decimal::from(total)).round_dp(2)
}
