//! Term-frequency vocabularies
//!
//! One vocabulary per filing, cached on disk as JSON so scoring can be
//! rerun without re-downloading documents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Term-to-count map for one filing
///
/// Backed by an ordered map so the JSON cache is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary(BTreeMap<String, u64>);

impl Vocabulary {
    /// Count tokens into a vocabulary
    pub fn from_tokens(tokens: impl IntoIterator<Item = String>) -> Self {
        let mut counts = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Total token occurrences across all terms
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Occurrences of one term
    pub fn count(&self, term: &str) -> u64 {
        self.0.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms
    pub fn distinct(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(term, count)| (term.as_str(), *count))
    }

    /// Write the vocabulary to its JSON cache file
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer(file, self)?;
        Ok(())
    }

    /// Read a vocabulary back from its JSON cache file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
