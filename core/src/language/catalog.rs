use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::{parse_line, Line};

const SHORT_NAME_KEY: &str = "currentlanguageshort";

/// A language file found on disk.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LanguageFileInfo {
    pub path: PathBuf,
    pub name: Option<String>,
    pub short_name: Option<String>,
}

/// Lists the `.ini` language files of a directory, sorted by file name.
///
/// Only the header and `currentlanguageshort` are read; a file that fails to
/// load is left out.
pub fn scan_language_files(dir: &Path) -> std::io::Result<Vec<LanguageFileInfo>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "ini"))
        .collect();
    files.sort();

    let mut found = Vec::new();
    for path in files {
        match read_identity(&path) {
            Ok(info) => found.push(info),
            Err(e) => warn!("Skipping language file {:?}: {}", path, e),
        }
    }
    Ok(found)
}

fn read_identity(path: &Path) -> anyhow::Result<LanguageFileInfo> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);

    let mut name = None;
    let mut short_name = None;
    for (i, line) in text.lines().enumerate() {
        let line = if i == 0 { line.trim_start_matches('\u{feff}') } else { line };
        match parse_line(line, i + 1)? {
            Line::Header(header) => name = Some(header.to_string()),
            Line::Assignment { key, value } if key == SHORT_NAME_KEY => short_name = Some(value.to_string()),
            _ => {}
        }
    }

    Ok(LanguageFileInfo { path: path.to_path_buf(), name, short_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::ResourceTable;
    use tempfile::TempDir;

    #[test]
    fn test_scan_reads_headers_and_skips_broken_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("german.ini"), "[Deutsch]\ncurrentlanguageshort=de\n").unwrap();
        std::fs::write(dir.path().join("broken.ini"), "[Kaputt\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "[Ignored]\n").unwrap();
        std::fs::write(dir.path().join("bare.ini"), "genericok=Ok\n").unwrap();

        let found = scan_language_files(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].path, dir.path().join("bare.ini"));
        assert_eq!(found[0].name, None);
        assert_eq!(found[1].name.as_deref(), Some("Deutsch"));
        assert_eq!(found[1].short_name.as_deref(), Some("de"));

        let mut table = ResourceTable::new();
        table.load_from_file(&found[1].path).unwrap();
        assert_eq!(table.language_name(), "Deutsch");
    }
}
