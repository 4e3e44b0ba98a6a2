//! Offline end-to-end test of the analysis pipeline
//!
//! Exercises index scanning, scoring, dataset assembly and the strategy
//! grid against fixture files, without touching the network.

use chrono::NaiveDate;
use edgar_tone::backtest::run_grid;
use edgar_tone::config::{BacktestConfig, ReturnsConfig};
use edgar_tone::data::CacheLayout;
use edgar_tone::dataset::{build_dataset, write_dataset_csv};
use edgar_tone::prices::{DailySeries, ReturnTable};
use edgar_tone::sentiment::{score_vocabulary, FilingScore, Lexicon, LexiconSet};
use edgar_tone::text::{Tokenizer, Vocabulary};
use rust_decimal_macros::dec;

fn lexicons() -> LexiconSet {
    LexiconSet {
        positive: Lexicon::from_words(["gain", "strong"]),
        negative: Lexicon::from_words(["loss", "impair"]),
        uncertain: Lexicon::from_words(["uncertain", "pending"]),
        litigious: Lexicon::from_words(["lawsuit", "litigation"]),
    }
}

/// A price series long enough for week and month horizons but not the
/// quarter horizon, rising 1% per day
fn series(ticker: &str, start: NaiveDate, days: usize) -> DailySeries {
    let mut dates = Vec::new();
    let mut closes = Vec::new();
    let mut close = dec!(100);
    for i in 0..days {
        dates.push(start + chrono::Days::new(i as u64));
        closes.push(close);
        close = close * dec!(1.01);
    }
    DailySeries {
        ticker: ticker.to_string(),
        dates,
        closes,
    }
}

#[test]
fn test_tokenize_score_and_cache_round_trip() {
    let temp = tempfile::TempDir::new().unwrap();
    let layout = CacheLayout::new(temp.path());

    let tokenizer = Tokenizer::new();
    let document = "<html><body><p>A strong gain despite the pending \
                    lawsuit; the loss was uncertain.</p></body></html>";
    let vocab = Vocabulary::from_tokens(tokenizer.tokenize(document));
    assert!(vocab.count("gain") == 1);
    assert!(vocab.count("the") == 0); // stop word

    let path = layout.vocab_file("CIK1-2018-QTR2.json").unwrap();
    vocab.save(&path).unwrap();
    let reloaded = Vocabulary::load(&path).unwrap();
    assert_eq!(reloaded.total(), vocab.total());

    let scores = score_vocabulary(&reloaded, &lexicons()).unwrap();
    assert!(scores.positive > dec!(0));
    assert!(scores.litigious > dec!(0));
}

#[test]
fn test_dataset_and_grid_from_fixtures() {
    let tokenizer = Tokenizer::new();
    let lexicons = lexicons();

    // Two consecutive quarterly filings for the same company, so the
    // second one has a previous-quarter reference
    let q1_text = "gain gain strong results pending";
    let q2_text = "gain loss loss impair lawsuit pending uncertain";

    let filings = [
        edgar_tone::edgar::Filing {
            cik: 63908,
            ticker: "MCD".to_string(),
            filing_type: edgar_tone::edgar::FilingType::TenQ,
            date: NaiveDate::from_ymd_opt(2018, 2, 15).unwrap(),
            year: 2018,
            quarter: 1,
            path: "edgar/data/63908/a.txt".to_string(),
        },
        edgar_tone::edgar::Filing {
            cik: 63908,
            ticker: "MCD".to_string(),
            filing_type: edgar_tone::edgar::FilingType::TenQ,
            date: NaiveDate::from_ymd_opt(2018, 5, 15).unwrap(),
            year: 2018,
            quarter: 2,
            path: "edgar/data/63908/b.txt".to_string(),
        },
    ];

    let mut scores = Vec::new();
    for (filing, text) in filings.iter().zip([q1_text, q2_text]) {
        let vocab = Vocabulary::from_tokens(tokenizer.tokenize_plain(text));
        let sentiment = score_vocabulary(&vocab, &lexicons).unwrap();
        scores.push(FilingScore {
            filing: filing.clone(),
            scores: sentiment,
        });
    }

    // Daily closes covering both filing dates and all horizons
    let mut returns = ReturnTable::default();
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
    returns.insert_series(&series("MCD", start, 365), &ReturnsConfig::default());

    let records = build_dataset(&scores, &returns);
    // Q1 has no previous quarter on record and drops
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.quarter, 2);
    // Q1 scored positive terms, so the quarterly change has a base;
    // there is no 2017 filing, so yearly changes stay empty
    assert!(record.quarterly_change.positive.is_some());
    assert!(record.yearly_change.positive.is_none());
    assert!(record.forward.week.is_some());

    let temp = tempfile::TempDir::new().unwrap();
    let csv_path = temp.path().join("dataset.csv");
    write_dataset_csv(&records, &csv_path).unwrap();
    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert!(content.starts_with("Ticker,CIK,Filing Type"));
    assert_eq!(content.lines().count(), 2);

    let results = run_grid(&records, &BacktestConfig::default());
    // 4 kinds x 2 periods x (4 + 1) x (4 + 1)
    assert_eq!(results.len(), 200);
    // Sorted by combined quarterly return, best first
    for pair in results.windows(2) {
        assert!(pair[0].quarter >= pair[1].quarter);
    }
}
