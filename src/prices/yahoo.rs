//! Yahoo chart API client for daily price history
//!
//! Fetches daily adjusted closes per ticker over the covered period.
//! Uses the v8 chart endpoint, which returns parallel timestamp and
//! adjclose arrays.

use super::DailySeries;
use crate::config::PricesConfig;
use chrono::{NaiveDate, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::time::Duration;

/// Client for daily adjusted-close history
pub struct YahooClient {
    config: PricesConfig,
    client: Client,
}

impl YahooClient {
    pub fn new(config: PricesConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Fetch the daily adjusted-close series for one ticker
    pub async fn fetch_daily(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<DailySeries> {
        let url = format!("{}/v8/finance/chart/{}", self.config.base_url, ticker);
        let period1 = start
            .and_hms_opt(0, 0, 0)
            .expect("valid time")
            .and_utc()
            .timestamp();
        let period2 = end
            .and_hms_opt(23, 59, 59)
            .expect("valid time")
            .and_utc()
            .timestamp();

        tracing::debug!(ticker, url = %url, "Fetching price history");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
                ("events", "div,split".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Chart API error for {}: {}", ticker, response.status());
        }

        let chart: ChartResponse = response.json().await?;
        let series = convert_chart(ticker, chart)?;

        tracing::info!(ticker, days = series.len(), "Loaded price history");
        Ok(series)
    }

    /// Configured delay between consecutive price requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.config.request_delay_ms)
    }
}

/// Top-level chart API response
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    adjclose: Option<Vec<AdjClose>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    adjclose: Vec<Option<f64>>,
}

/// Convert the chart response into a daily series
///
/// Days with a missing adjusted close (halts, bad data) are dropped so
/// the series stays a contiguous list of priced trading days.
fn convert_chart(ticker: &str, response: ChartResponse) -> anyhow::Result<DailySeries> {
    if let Some(error) = response.chart.error {
        anyhow::bail!(
            "Chart API error for {}: {} - {}",
            ticker,
            error.code,
            error.description
        );
    }

    let result = response
        .chart
        .result
        .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
        .ok_or_else(|| anyhow::anyhow!("No chart data for {}", ticker))?;

    let timestamps = result.timestamp.unwrap_or_default();
    let adjcloses = result
        .indicators
        .adjclose
        .and_then(|mut a| if a.is_empty() { None } else { Some(a.remove(0)) })
        .map(|a| a.adjclose)
        .unwrap_or_default();

    let mut dates = Vec::with_capacity(timestamps.len());
    let mut closes = Vec::with_capacity(timestamps.len());
    for (ts, close) in timestamps.iter().zip(adjcloses.iter()) {
        let Some(value) = close else { continue };
        if !value.is_finite() {
            continue;
        }
        let Some(decimal) = Decimal::from_f64(*value) else {
            continue;
        };
        let date = Utc
            .timestamp_opt(*ts, 0)
            .single()
            .map(|dt| dt.date_naive());
        if let Some(date) = date {
            dates.push(date);
            closes.push(decimal);
        }
    }

    if dates.is_empty() {
        anyhow::bail!("Empty price history for {}", ticker);
    }

    Ok(DailySeries {
        ticker: ticker.to_string(),
        dates,
        closes,
    })
}
