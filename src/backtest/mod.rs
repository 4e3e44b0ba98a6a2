//! Threshold strategy backtesting
//!
//! Grid search over sentiment kind, change period and long/short
//! thresholds, with average forward returns per leg and combined.

mod report;
mod strategy;

pub use report::{format_table, write_results_csv};
pub use strategy::{run_grid, LegStats, StrategyResult, StrategySpec};
