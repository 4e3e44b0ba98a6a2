//! Backtest reporting: CSV output and CLI summary table

use super::StrategyResult;
use rust_decimal::Decimal;
use std::path::Path;

/// Column order of the strategy results CSV
const HEADER: &[&str] = &[
    "Sentiment Type",
    "Sentiment Score Change",
    "Pct Change to Invest Long",
    "Pct Change to Invest Short",
    "# Long Bets",
    "Avg Long Weekly Return",
    "Avg Long Monthly Return",
    "Avg Long Qtrly Return",
    "# Short Bets",
    "Avg Short Weekly Return",
    "Avg Short Monthly Return",
    "Avg Short Qtrly Return",
    "# All Bets",
    "Avg Strategy Weekly Return",
    "Avg Strategy Monthly Return",
    "Avg Strategy Qtrly Return",
];

/// Write the full strategy grid to a CSV file
pub fn write_results_csv(results: &[StrategyResult], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;

    writer.write_record(HEADER)?;
    for result in results {
        writer.write_record([
            result.spec.kind.label().to_string(),
            result.spec.period.label().to_string(),
            threshold(result.spec.long_threshold),
            threshold(result.spec.short_threshold),
            result.long.bets.to_string(),
            result.long.week.to_string(),
            result.long.month.to_string(),
            result.long.quarter.to_string(),
            result.short.bets.to_string(),
            result.short.week.to_string(),
            result.short.month.to_string(),
            result.short.quarter.to_string(),
            result.total_bets.to_string(),
            result.week.to_string(),
            result.month.to_string(),
            result.quarter.to_string(),
        ])?;
    }
    writer.flush()?;

    tracing::info!(strategies = results.len(), path = %path.display(), "Wrote strategy results CSV");
    Ok(())
}

fn threshold(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Format the top strategies as a table for CLI output
pub fn format_table(results: &[StrategyResult], top: usize) -> String {
    let mut out = String::new();
    out.push_str(
        "\n══════════════════════════════════════════════════════════════════\n\
         TOP SENTIMENT STRATEGIES (by avg quarterly return)\n\
         ══════════════════════════════════════════════════════════════════\n\
         Kind  Change  Long   Short  Bets  Avg W%   Avg M%   Avg Q%\n\
         ──────────────────────────────────────────────────────────────────\n",
    );

    for result in results.iter().take(top) {
        out.push_str(&format!(
            "{:<5} {:<7} {:>5} {:>6} {:>5} {:>7} {:>8} {:>8}\n",
            result.spec.kind.label(),
            result.spec.period.label(),
            result
                .spec
                .long_threshold
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            result
                .spec
                .short_threshold
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            result.total_bets,
            result.week,
            result.month,
            result.quarter,
        ));
    }

    out.push_str("══════════════════════════════════════════════════════════════════\n");
    out
}
