//! Configuration types for edgar-tone

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub edgar: EdgarConfig,
    pub universe: UniverseConfig,
    pub period: PeriodConfig,
    pub lexicon: LexiconConfig,
    #[serde(default)]
    pub returns: ReturnsConfig,
    #[serde(default)]
    pub prices: PricesConfig,
    #[serde(default)]
    pub backtest: BacktestConfig,
    pub data: DataConfig,
    pub telemetry: TelemetryConfig,
}

/// EDGAR access configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EdgarConfig {
    /// Archive base URL for filing documents
    #[serde(default = "default_archive_url")]
    pub base_url: String,

    /// Base URL for quarterly full-index files
    #[serde(default = "default_index_url")]
    pub index_base_url: String,

    /// User-Agent sent to EDGAR; the SEC requires contact details
    pub user_agent: String,

    /// Delay between consecutive EDGAR requests
    #[serde(default = "default_edgar_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_archive_url() -> String {
    "https://www.sec.gov/Archives".to_string()
}
fn default_index_url() -> String {
    "https://www.sec.gov/Archives/edgar/full-index".to_string()
}
fn default_edgar_delay_ms() -> u64 {
    1000
}

/// Investment universe configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UniverseConfig {
    /// CSV file with Ticker, CIK and Company columns
    pub file: PathBuf,
}

/// Covered filing period, inclusive on both ends
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodConfig {
    pub start_year: i32,
    pub start_quarter: u8,
    pub end_year: i32,
    pub end_quarter: u8,
}

/// Sentiment word list configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    /// Directory holding the four word list files
    pub dir: PathBuf,

    #[serde(default = "default_positive_file")]
    pub positive: String,
    #[serde(default = "default_negative_file")]
    pub negative: String,
    #[serde(default = "default_uncertain_file")]
    pub uncertain: String,
    #[serde(default = "default_litigious_file")]
    pub litigious: String,
}

fn default_positive_file() -> String {
    "positive.csv".to_string()
}
fn default_negative_file() -> String {
    "negative.csv".to_string()
}
fn default_uncertain_file() -> String {
    "uncertain.csv".to_string()
}
fn default_litigious_file() -> String {
    "litigious.csv".to_string()
}

/// Forward return configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnsConfig {
    /// Trading days between the filing date and position entry,
    /// mitigates look-ahead bias
    #[serde(default = "default_execution_lag")]
    pub execution_lag_days: usize,

    /// Forward horizon for the 1-week return, in trading days
    #[serde(default = "default_week_horizon")]
    pub week_horizon_days: usize,

    /// Forward horizon for the 1-month return, in trading days
    #[serde(default = "default_month_horizon")]
    pub month_horizon_days: usize,

    /// Forward horizon for the 1-quarter return, in trading days
    #[serde(default = "default_quarter_horizon")]
    pub quarter_horizon_days: usize,
}

fn default_execution_lag() -> usize {
    1
}
fn default_week_horizon() -> usize {
    5
}
fn default_month_horizon() -> usize {
    22
}
fn default_quarter_horizon() -> usize {
    65
}

impl Default for ReturnsConfig {
    fn default() -> Self {
        Self {
            execution_lag_days: 1,
            week_horizon_days: 5,
            month_horizon_days: 22,
            quarter_horizon_days: 65,
        }
    }
}

/// Daily price source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PricesConfig {
    /// Base URL of the Yahoo chart API
    #[serde(default = "default_prices_url")]
    pub base_url: String,

    /// User-Agent for price requests
    #[serde(default = "default_prices_user_agent")]
    pub user_agent: String,

    /// Delay between consecutive price requests
    #[serde(default = "default_prices_delay_ms")]
    pub request_delay_ms: u64,
}

fn default_prices_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}
fn default_prices_user_agent() -> String {
    "Mozilla/5.0".to_string()
}
fn default_prices_delay_ms() -> u64 {
    100
}

impl Default for PricesConfig {
    fn default() -> Self {
        Self {
            base_url: default_prices_url(),
            user_agent: default_prices_user_agent(),
            request_delay_ms: default_prices_delay_ms(),
        }
    }
}

/// Strategy grid configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BacktestConfig {
    /// Minimum percent change in a sentiment score to go long
    #[serde(default = "default_long_thresholds")]
    pub long_thresholds: Vec<Decimal>,

    /// Maximum percent change in a sentiment score to go short
    #[serde(default = "default_short_thresholds")]
    pub short_thresholds: Vec<Decimal>,

    /// Number of strategies shown in the CLI summary table
    #[serde(default = "default_top_strategies")]
    pub top_strategies: usize,
}

fn default_long_thresholds() -> Vec<Decimal> {
    vec![
        Decimal::from(3),
        Decimal::from(5),
        Decimal::from(10),
        Decimal::from(25),
    ]
}
fn default_short_thresholds() -> Vec<Decimal> {
    vec![
        Decimal::from(-3),
        Decimal::from(-5),
        Decimal::from(-10),
        Decimal::from(-25),
    ]
}
fn default_top_strategies() -> usize {
    10
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            long_thresholds: default_long_thresholds(),
            short_thresholds: default_short_thresholds(),
            top_strategies: default_top_strategies(),
        }
    }
}

/// Cache and output layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Root directory for index files and cached vocabularies
    pub cache_dir: PathBuf,

    /// Directory for the CSV outputs
    pub output_dir: PathBuf,

    /// Back up the bad-filings list and the discovered filing list
    #[serde(default = "default_true")]
    pub backup_enabled: bool,
}

fn default_true() -> bool {
    true
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub metrics_port: u16,
    pub log_level: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants the TOML schema cannot express
    pub fn validate(&self) -> anyhow::Result<()> {
        let p = &self.period;
        if !(1..=4).contains(&p.start_quarter) || !(1..=4).contains(&p.end_quarter) {
            anyhow::bail!("quarters must be between 1 and 4");
        }
        if 10 * p.start_year + i32::from(p.start_quarter)
            > 10 * p.end_year + i32::from(p.end_quarter)
        {
            anyhow::bail!(
                "period start {}Q{} is after period end {}Q{}",
                p.start_year,
                p.start_quarter,
                p.end_year,
                p.end_quarter
            );
        }
        Ok(())
    }
}
