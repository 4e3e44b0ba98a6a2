//! Lagged forward returns from daily price series
//!
//! A position is entered `execution_lag_days` trading days after the
//! filing date and held for the horizon, so every return is computed
//! between two lagged closes.

use super::DailySeries;
use crate::config::ReturnsConfig;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Forward returns at the three horizons, as percentages
///
/// A horizon is absent when the series ends before the exit date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardReturns {
    pub week: Option<Decimal>,
    pub month: Option<Decimal>,
    pub quarter: Option<Decimal>,
}

/// Forward returns for every (ticker, trading day) pair
#[derive(Debug, Default)]
pub struct ReturnTable {
    map: HashMap<(String, NaiveDate), ForwardReturns>,
}

impl ReturnTable {
    /// Add the forward returns of one ticker's series
    pub fn insert_series(&mut self, series: &DailySeries, config: &ReturnsConfig) {
        for (date, fwd) in forward_returns(series, config) {
            self.map.insert((series.ticker.clone(), date), fwd);
        }
    }

    /// Forward returns for a ticker on a given trading day
    pub fn get(&self, ticker: &str, date: NaiveDate) -> Option<&ForwardReturns> {
        self.map.get(&(ticker.to_string(), date))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Compute per-day forward returns for one series
///
/// For day index `i`, entry is at `i + lag` and exit at `i + lag + h`;
/// the return is `100 * (close[exit] / close[entry] - 1)` rounded to
/// two decimals.
pub fn forward_returns(
    series: &DailySeries,
    config: &ReturnsConfig,
) -> Vec<(NaiveDate, ForwardReturns)> {
    let n = series.len();
    let lag = config.execution_lag_days;

    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let fwd = ForwardReturns {
            week: horizon_return(series, i + lag, config.week_horizon_days),
            month: horizon_return(series, i + lag, config.month_horizon_days),
            quarter: horizon_return(series, i + lag, config.quarter_horizon_days),
        };
        out.push((series.dates[i], fwd));
    }
    out
}

fn horizon_return(series: &DailySeries, entry: usize, horizon: usize) -> Option<Decimal> {
    let exit = entry + horizon;
    if exit >= series.len() {
        return None;
    }
    let entry_close = series.closes[entry];
    if entry_close.is_zero() {
        return None;
    }
    let ret = Decimal::from(100) * (series.closes[exit] / entry_close - Decimal::ONE);
    Some(ret.round_dp(2))
}
