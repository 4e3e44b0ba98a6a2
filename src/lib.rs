//! edgar-tone: Sentiment backtester for SEC 10-Q/10-K filings
//!
//! This library provides the core components for:
//! - Quarterly EDGAR full-index downloads with on-disk caching
//! - 10-Q/10-K filing discovery for an investment universe
//! - Filing text extraction and term-frequency vocabularies
//! - Loughran-McDonald sentiment scoring (Pos/Neg/Unc/Lit)
//! - Daily price history and lagged forward returns
//! - Sentiment/return dataset assembly with quarterly and yearly changes
//! - Threshold strategy grid backtesting
//! - CSV outputs, structured logging and pipeline counters

pub mod backtest;
pub mod cli;
pub mod config;
pub mod data;
pub mod dataset;
pub mod edgar;
pub mod prices;
pub mod sentiment;
pub mod telemetry;
pub mod text;
pub mod universe;
