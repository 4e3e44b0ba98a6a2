//! Filing tokenizer
//!
//! Strips SGML/HTML markup from raw filing documents and yields
//! lowercase alphabetic tokens, dropping short tokens and stop words.

use regex::Regex;
use scraper::Html;
use std::collections::HashSet;

/// Words too generic to carry tone in regulatory filings
const STOP_WORDS: &[&str] = &[
    "the", "and", "our", "their", "he", "she", "they", "for", "are", "that", "this", "which",
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "company", "fiscal", "other", "gaap", "financial", "with",
    "tax", "from", "billion", "million", "operations", "assets", "not", "including", "value",
    "consolidated", "such", "year", "have", "related", "certain", "statements", "total", "term",
    "these", "share", "rate", "business", "could", "information", "amounts", "was", "any", "will",
    "its", "were", "over", "has", "also", "years", "when", "each", "those", "used", "date", "than",
    "then", "though", "although",
];

/// Minimum token length kept after stripping
const MIN_TOKEN_LEN: usize = 3;

/// Turns raw filing markup into scoring tokens
pub struct Tokenizer {
    non_alpha: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            non_alpha: Regex::new("[^a-zA-Z]+").expect("valid regex"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Tokenize a raw filing document
    ///
    /// Markup is stripped first, then every non-alphabetic run becomes a
    /// token boundary. Tokens shorter than three characters and stop
    /// words are dropped.
    pub fn tokenize(&self, raw: &str) -> Vec<String> {
        let document = Html::parse_document(raw);
        let text: String = document
            .root_element()
            .text()
            .collect::<Vec<_>>()
            .join(" ");

        self.tokenize_plain(&text)
    }

    /// Tokenize already-extracted plain text
    pub fn tokenize_plain(&self, text: &str) -> Vec<String> {
        let cleaned = self.non_alpha.replace_all(text, " ").to_lowercase();
        cleaned
            .split_whitespace()
            .filter(|word| word.len() >= MIN_TOKEN_LEN && !self.stop_words.contains(word))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
