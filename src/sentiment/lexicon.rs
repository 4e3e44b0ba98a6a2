//! Loughran-McDonald sentiment word lists
//!
//! One CSV file per tone, one word per row, first column only.

use crate::config::LexiconConfig;
use std::collections::HashSet;
use std::path::Path;

/// One sentiment word list
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    /// Load a word list from its CSV file, lowercasing every entry
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                anyhow::anyhow!("Failed to open word list {}: {}", path.display(), e)
            })?;

        let mut words = HashSet::new();
        for record in reader.records() {
            let record = record?;
            if let Some(word) = record.get(0) {
                let word = word.trim().to_lowercase();
                if !word.is_empty() {
                    words.insert(word);
                }
            }
        }

        if words.is_empty() {
            anyhow::bail!("Word list {} is empty", path.display());
        }

        Ok(Self { words })
    }

    /// Build a lexicon from words directly
    pub fn from_words(words: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            words: words.into_iter().map(|w| w.into().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// All four tone word lists
#[derive(Debug, Clone)]
pub struct LexiconSet {
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub uncertain: Lexicon,
    pub litigious: Lexicon,
}

impl LexiconSet {
    /// Load the four configured word lists
    pub fn load(config: &LexiconConfig) -> anyhow::Result<Self> {
        let set = Self {
            positive: Lexicon::load(config.dir.join(&config.positive))?,
            negative: Lexicon::load(config.dir.join(&config.negative))?,
            uncertain: Lexicon::load(config.dir.join(&config.uncertain))?,
            litigious: Lexicon::load(config.dir.join(&config.litigious))?,
        };
        tracing::info!(
            positive = set.positive.len(),
            negative = set.negative.len(),
            uncertain = set.uncertain.len(),
            litigious = set.litigious.len(),
            "Loaded sentiment word lists"
        );
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lexicon_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"GAIN\nGROWTH\nprofit\n").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 3);
        assert!(lexicon.contains("gain"));
        assert!(lexicon.contains("profit"));
        assert!(!lexicon.contains("loss"));
    }

    #[test]
    fn test_lexicon_lowercases() {
        let lexicon = Lexicon::from_words(["LAWSUIT", "Litigation"]);
        assert!(lexicon.contains("lawsuit"));
        assert!(lexicon.contains("litigation"));
        assert!(!lexicon.contains("LAWSUIT"));
    }

    #[test]
    fn test_lexicon_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(Lexicon::load(file.path()).is_err());
    }

    #[test]
    fn test_lexicon_missing_file() {
        assert!(Lexicon::load("/nonexistent/positive.csv").is_err());
    }

    #[test]
    fn test_lexicon_set_load() {
        let dir = tempfile::TempDir::new().unwrap();
        for (name, words) in [
            ("positive.csv", "gain\ngrowth\n"),
            ("negative.csv", "loss\ndecline\n"),
            ("uncertain.csv", "maybe\napproximate\n"),
            ("litigious.csv", "lawsuit\nplaintiff\n"),
        ] {
            std::fs::write(dir.path().join(name), words).unwrap();
        }

        let config = LexiconConfig {
            dir: dir.path().to_path_buf(),
            positive: "positive.csv".to_string(),
            negative: "negative.csv".to_string(),
            uncertain: "uncertain.csv".to_string(),
            litigious: "litigious.csv".to_string(),
        };

        let set = LexiconSet::load(&config).unwrap();
        assert!(set.positive.contains("gain"));
        assert!(set.negative.contains("decline"));
        assert!(set.uncertain.contains("maybe"));
        assert!(set.litigious.contains("plaintiff"));
    }
}
