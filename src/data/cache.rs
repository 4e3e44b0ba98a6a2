//! On-disk cache layout
//!
//! Everything the pipeline downloads is cached so reruns only fetch
//! what is missing:
//!
//! ```text
//! <cache_dir>/
//!   sec_index_files/<year>/xbrl-index-<year>-QTR<q>.txt
//!   selected_filings/CIK<cik>-<year>-QTR<q>.json
//!   back_up/
//! ```

use std::path::{Path, PathBuf};

/// Root of the pipeline cache
#[derive(Debug, Clone)]
pub struct CacheLayout {
    root: PathBuf,
}

/// Counts of cached artifacts, for the `status` command
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStatus {
    pub index_files: usize,
    pub vocabularies: usize,
    pub bad_filings: usize,
}

impl CacheLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of a quarterly index file, creating its year directory
    pub fn index_file(&self, year: i32, quarter: u8) -> anyhow::Result<PathBuf> {
        let dir = self.root.join("sec_index_files").join(year.to_string());
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join(format!("xbrl-index-{}-QTR{}.txt", year, quarter)))
    }

    /// Path of a cached vocabulary file, creating the filings directory
    pub fn vocab_file(&self, name: &str) -> anyhow::Result<PathBuf> {
        let dir = self.root.join("selected_filings");
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join(name))
    }

    /// Backup directory for intermediate results
    pub fn backup_dir(&self) -> anyhow::Result<PathBuf> {
        let dir = self.root.join("back_up");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    /// Count cached artifacts
    pub fn status(&self) -> anyhow::Result<CacheStatus> {
        let mut status = CacheStatus::default();

        let index_root = self.root.join("sec_index_files");
        if index_root.is_dir() {
            for year_dir in std::fs::read_dir(&index_root)? {
                let year_dir = year_dir?;
                if year_dir.path().is_dir() {
                    status.index_files += std::fs::read_dir(year_dir.path())?.count();
                }
            }
        }

        let filings = self.root.join("selected_filings");
        if filings.is_dir() {
            status.vocabularies = std::fs::read_dir(&filings)?.count();
        }

        let bad = self.root.join("back_up").join("bad_filings.txt");
        if bad.is_file() {
            status.bad_filings = std::fs::read_to_string(&bad)?
                .lines()
                .filter(|l| !l.is_empty())
                .count();
        }

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_file_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = CacheLayout::new(temp.path());

        let path = layout.index_file(2018, 3).unwrap();
        assert!(path.ends_with("sec_index_files/2018/xbrl-index-2018-QTR3.txt"));
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_vocab_file_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = CacheLayout::new(temp.path());

        let path = layout.vocab_file("CIK63908-2018-QTR2.json").unwrap();
        assert!(path.ends_with("selected_filings/CIK63908-2018-QTR2.json"));
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn test_status_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = CacheLayout::new(temp.path());

        let status = layout.status().unwrap();
        assert_eq!(status.index_files, 0);
        assert_eq!(status.vocabularies, 0);
        assert_eq!(status.bad_filings, 0);
    }

    #[test]
    fn test_status_counts() {
        let temp = tempfile::TempDir::new().unwrap();
        let layout = CacheLayout::new(temp.path());

        std::fs::write(layout.index_file(2018, 1).unwrap(), "x").unwrap();
        std::fs::write(layout.index_file(2018, 2).unwrap(), "x").unwrap();
        std::fs::write(layout.index_file(2019, 1).unwrap(), "x").unwrap();
        std::fs::write(layout.vocab_file("CIK1-2018-QTR1.json").unwrap(), "{}").unwrap();
        std::fs::write(
            layout.backup_dir().unwrap().join("bad_filings.txt"),
            "CIK2-2018-QTR1.json\nCIK3-2018-QTR2.json\n",
        )
        .unwrap();

        let status = layout.status().unwrap();
        assert_eq!(status.index_files, 3);
        assert_eq!(status.vocabularies, 1);
        assert_eq!(status.bad_filings, 2);
    }
}
