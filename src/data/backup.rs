//! Line-based backups of intermediate results

use std::io::Write;
use std::path::Path;

/// Write one item per line, replacing any previous backup
pub fn write_lines<I, S>(path: impl AsRef<Path>, lines: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();
    let mut file = std::fs::File::create(path)
        .map_err(|e| anyhow::anyhow!("Failed to create backup {}: {}", path.display(), e))?;
    for line in lines {
        writeln!(file, "{}", line.as_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_lines() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("bad_filings.txt");

        write_lines(&path, ["a.json", "b.json"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a.json\nb.json\n");
    }

    #[test]
    fn test_write_lines_replaces() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("list.txt");

        write_lines(&path, ["old"]).unwrap();
        write_lines(&path, ["new"]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_empty() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("empty.txt");

        write_lines(&path, Vec::<String>::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
