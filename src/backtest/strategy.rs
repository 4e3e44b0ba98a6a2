//! Strategy grid evaluation
//!
//! A strategy goes long where the selected sentiment change exceeds the
//! long threshold and short where it falls below the short threshold,
//! holding for a week, a month or a quarter. Either leg can be
//! disabled, giving long-only and short-only variants.

use crate::config::BacktestConfig;
use crate::dataset::{ChangePeriod, FilingRecord};
use crate::sentiment::SentimentKind;
use rust_decimal::Decimal;

/// One cell of the strategy grid
#[derive(Debug, Clone, Copy)]
pub struct StrategySpec {
    pub kind: SentimentKind,
    pub period: ChangePeriod,
    /// Go long when the change is above this; None disables the leg
    pub long_threshold: Option<Decimal>,
    /// Go short when the change is below this; None disables the leg
    pub short_threshold: Option<Decimal>,
}

/// Bets and average forward returns of one leg
///
/// A disabled leg, or an enabled leg that selects no filings, is all
/// zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegStats {
    pub bets: usize,
    pub week: Decimal,
    pub month: Decimal,
    pub quarter: Decimal,
}

/// Evaluated strategy
#[derive(Debug, Clone)]
pub struct StrategyResult {
    pub spec: StrategySpec,
    pub long: LegStats,
    pub short: LegStats,
    pub total_bets: usize,
    pub week: Decimal,
    pub month: Decimal,
    pub quarter: Decimal,
}

/// Evaluate the whole strategy grid
///
/// Results are sorted by combined average quarterly return descending.
pub fn run_grid(records: &[FilingRecord], config: &BacktestConfig) -> Vec<StrategyResult> {
    let mut long_thresholds: Vec<Option<Decimal>> =
        config.long_thresholds.iter().copied().map(Some).collect();
    long_thresholds.push(None);
    let mut short_thresholds: Vec<Option<Decimal>> =
        config.short_thresholds.iter().copied().map(Some).collect();
    short_thresholds.push(None);

    let mut results = Vec::new();
    for kind in SentimentKind::ALL {
        for period in ChangePeriod::ALL {
            for &long_threshold in &long_thresholds {
                for &short_threshold in &short_thresholds {
                    let spec = StrategySpec {
                        kind,
                        period,
                        long_threshold,
                        short_threshold,
                    };
                    results.push(evaluate(records, spec));
                }
            }
        }
    }

    results.sort_by(|a, b| b.quarter.cmp(&a.quarter));
    tracing::info!(strategies = results.len(), "Strategy grid evaluated");
    results
}

/// Evaluate one strategy over the dataset
pub fn evaluate(records: &[FilingRecord], spec: StrategySpec) -> StrategyResult {
    let long = match spec.long_threshold {
        Some(threshold) => leg_stats(records, spec, |change| change > threshold, false),
        None => LegStats::default(),
    };
    let short = match spec.short_threshold {
        Some(threshold) => leg_stats(records, spec, |change| change < threshold, true),
        None => LegStats::default(),
    };

    StrategyResult {
        spec,
        total_bets: long.bets + short.bets,
        week: (long.week + short.week).round_dp(2),
        month: (long.month + short.month).round_dp(2),
        quarter: (long.quarter + short.quarter).round_dp(2),
        long,
        short,
    }
}

fn leg_stats(
    records: &[FilingRecord],
    spec: StrategySpec,
    select: impl Fn(Decimal) -> bool,
    invert: bool,
) -> LegStats {
    let selected: Vec<&FilingRecord> = records
        .iter()
        .filter(|r| r.change(spec.kind, spec.period).is_some_and(&select))
        .collect();

    if selected.is_empty() {
        return LegStats::default();
    }

    let sign = if invert { Decimal::NEGATIVE_ONE } else { Decimal::ONE };
    LegStats {
        bets: selected.len(),
        week: sign * mean(selected.iter().filter_map(|r| r.forward.week)),
        month: sign * mean(selected.iter().filter_map(|r| r.forward.month)),
        quarter: sign * mean(selected.iter().filter_map(|r| r.forward.quarter)),
    }
}

/// Mean of the present values, rounded to two decimals; zero when empty
fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let mut sum = Decimal::ZERO;
    let mut count = 0u32;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 {
        return Decimal::ZERO;
    }
    (sum / Decimal::from(count)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edgar::FilingType;
    use crate::prices::ForwardReturns;
    use crate::sentiment::{SentimentChanges, SentimentScores};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn record(qtrly_pos: Option<Decimal>, week: Decimal, quarter: Decimal) -> FilingRecord {
        FilingRecord {
            ticker: "MCD".to_string(),
            cik: 63908,
            filing_type: FilingType::TenQ,
            year: 2018,
            quarter: 2,
            date: NaiveDate::from_ymd_opt(2018, 5, 1).unwrap(),
            scores: SentimentScores::default(),
            quarterly_change: SentimentChanges {
                positive: qtrly_pos,
                ..Default::default()
            },
            yearly_change: SentimentChanges::default(),
            forward: ForwardReturns {
                week: Some(week),
                month: Some((week + quarter) / dec!(2)),
                quarter: Some(quarter),
            },
        }
    }

    fn spec(long: Option<Decimal>, short: Option<Decimal>) -> StrategySpec {
        StrategySpec {
            kind: SentimentKind::Positive,
            period: ChangePeriod::Quarterly,
            long_threshold: long,
            short_threshold: short,
        }
    }

    #[test]
    fn test_long_leg_selection() {
        let records = vec![
            record(Some(dec!(6)), dec!(2.00), dec!(8.00)),
            record(Some(dec!(4)), dec!(1.00), dec!(3.00)),
            record(Some(dec!(10)), dec!(4.00), dec!(10.00)),
        ];
        let result = evaluate(&records, spec(Some(dec!(5)), None));

        assert_eq!(result.long.bets, 2);
        assert_eq!(result.long.week, dec!(3.00));
        assert_eq!(result.long.quarter, dec!(9.00));
        assert_eq!(result.short, LegStats::default());
        assert_eq!(result.total_bets, 2);
        assert_eq!(result.quarter, dec!(9.00));
    }

    #[test]
    fn test_short_leg_negates() {
        let records = vec![
            record(Some(dec!(-8)), dec!(-3.00), dec!(-6.00)),
            record(Some(dec!(2)), dec!(1.00), dec!(1.00)),
        ];
        let result = evaluate(&records, spec(None, Some(dec!(-5))));

        assert_eq!(result.short.bets, 1);
        assert_eq!(result.short.week, dec!(3.00));
        assert_eq!(result.short.quarter, dec!(6.00));
        assert_eq!(result.quarter, dec!(6.00));
    }

    #[test]
    fn test_combined_legs() {
        let records = vec![
            record(Some(dec!(10)), dec!(2.00), dec!(4.00)),
            record(Some(dec!(-10)), dec!(-1.00), dec!(-2.00)),
        ];
        let result = evaluate(&records, spec(Some(dec!(5)), Some(dec!(-5))));

        assert_eq!(result.total_bets, 2);
        assert_eq!(result.week, dec!(3.00)); // 2.00 long + 1.00 negated short
        assert_eq!(result.quarter, dec!(6.00));
    }

    #[test]
    fn test_empty_selection_is_zero() {
        // No record crosses the threshold; the leg must not carry values
        // from any other strategy evaluation
        let records = vec![record(Some(dec!(1)), dec!(2.00), dec!(4.00))];
        let result = evaluate(&records, spec(Some(dec!(50)), None));

        assert_eq!(result.long, LegStats::default());
        assert_eq!(result.total_bets, 0);
        assert_eq!(result.quarter, dec!(0));
    }

    #[test]
    fn test_undefined_change_excluded() {
        let records = vec![
            record(None, dec!(9.00), dec!(9.00)),
            record(Some(dec!(10)), dec!(1.00), dec!(2.00)),
        ];
        let result = evaluate(&records, spec(Some(dec!(5)), None));

        assert_eq!(result.long.bets, 1);
        assert_eq!(result.long.week, dec!(1.00));
    }

    #[test]
    fn test_both_legs_disabled() {
        let records = vec![record(Some(dec!(10)), dec!(1.00), dec!(2.00))];
        let result = evaluate(&records, spec(None, None));
        assert_eq!(result.total_bets, 0);
        assert_eq!(result.quarter, dec!(0));
    }

    #[test]
    fn test_missing_forward_return_excluded_from_mean() {
        let mut with_gap = record(Some(dec!(10)), dec!(2.00), dec!(4.00));
        with_gap.forward.quarter = None;
        let records = vec![with_gap, record(Some(dec!(10)), dec!(2.00), dec!(6.00))];
        let result = evaluate(&records, spec(Some(dec!(5)), None));

        assert_eq!(result.long.bets, 2);
        // Quarter mean over the single present value
        assert_eq!(result.long.quarter, dec!(6.00));
    }

    #[test]
    fn test_run_grid_size_and_order() {
        let records = vec![
            record(Some(dec!(10)), dec!(2.00), dec!(4.00)),
            record(Some(dec!(-10)), dec!(-1.00), dec!(-2.00)),
        ];
        let config = BacktestConfig::default();
        let results = run_grid(&records, &config);

        // 4 kinds x 2 periods x 5 long x 5 short
        assert_eq!(results.len(), 200);
        // Sorted by combined quarterly return descending
        for pair in results.windows(2) {
            assert!(pair[0].quarter >= pair[1].quarter);
        }
    }
}
