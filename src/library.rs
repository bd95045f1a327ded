//! Song sheet library for curated .txt chord sheets.
//!
//! Scans a directory (recursively) of plain-text song sheets named by title
//! and provides lookup by exact or fuzzy title match, so a song leader can
//! transpose a sheet without remembering its filename.

use std::path::PathBuf;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use walkdir::WalkDir;

use crate::constants::library::MIN_TITLE_SCORE;

/// A single song sheet loaded from disk.
#[derive(Debug, Clone)]
pub struct SheetEntry {
    /// Display title, taken from the file stem.
    pub title: String,
    /// Lowercased title for case-insensitive matching.
    title_lower: String,
    /// Raw sheet text, untransposed.
    pub text: String,
}

/// Lazily loaded song sheet directory index.
pub struct SheetLibrary {
    sheet_dir: PathBuf,
    entries: Vec<SheetEntry>,
    loaded: bool,
}

impl SheetLibrary {
    /// Create a new library backed by the given directory path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            sheet_dir: path,
            entries: Vec::new(),
            loaded: false,
        }
    }

    /// Look up a sheet by title, returning (title, raw text).
    ///
    /// Checks exact/substring matches first, then falls back to fuzzy
    /// matching with a minimum quality threshold.
    pub fn lookup(&mut self, query: &str) -> Option<(String, String)> {
        self.ensure_loaded();

        if self.entries.is_empty() {
            return None;
        }

        let query_lower = query.to_lowercase();

        // Exact or substring match wins outright
        for entry in &self.entries {
            if entry.title_lower == query_lower
                || query_lower.contains(&entry.title_lower)
                || entry.title_lower.contains(&query_lower)
            {
                return Some((entry.title.clone(), entry.text.clone()));
            }
        }

        let matcher = SkimMatcherV2::default();
        let best = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = matcher.fuzzy_match(&entry.title, query)?;
                (score >= MIN_TITLE_SCORE).then_some((score, entry))
            })
            .max_by_key(|(score, _)| *score);

        best.map(|(_, entry)| (entry.title.clone(), entry.text.clone()))
    }

    /// Titles of every indexed sheet, in scan order.
    pub fn titles(&mut self) -> Vec<String> {
        self.ensure_loaded();
        self.entries.iter().map(|e| e.title.clone()).collect()
    }

    fn ensure_loaded(&mut self) {
        if !self.loaded {
            self.load();
        }
    }

    fn load(&mut self) {
        self.loaded = true;

        if !self.sheet_dir.is_dir() {
            tracing::warn!("Song sheet directory {} not found", self.sheet_dir.display());
            return;
        }

        for entry in WalkDir::new(&self.sheet_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            let path = entry.path();
            if !path.is_file() || path.extension().is_none_or(|e| e != "txt") {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let title = stem.trim().to_string();
            if title.is_empty() {
                continue;
            }

            let text = match fs_err::read_to_string(path) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Skipping unreadable sheet {}: {e}", path.display());
                    continue;
                }
            };

            self.entries.push(SheetEntry {
                title_lower: title.to_lowercase(),
                title,
                text,
            });
        }

        tracing::info!(
            "Indexed {} song sheets from {}",
            self.entries.len(),
            self.sheet_dir.display()
        );
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::fs;

    fn library_with(files: &[(&str, &str)]) -> (tempfile::TempDir, SheetLibrary) {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(format!("{name}.txt")), content).unwrap();
        }
        let lib = SheetLibrary::new(dir.path().to_path_buf());
        (dir, lib)
    }

    #[test]
    fn exact_title_lookup() {
        let (_dir, mut lib) = library_with(&[("Amazing Grace", "G C D\nAmazing grace")]);
        let (title, text) = lib.lookup("Amazing Grace").unwrap();
        assert_eq!(title, "Amazing Grace");
        assert!(text.starts_with("G C D"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let (_dir, mut lib) = library_with(&[("Amazing Grace", "G")]);
        assert!(lib.lookup("amazing grace").is_some());
    }

    #[test]
    fn substring_match_wins() {
        let (_dir, mut lib) = library_with(&[("Amazing Grace", "G"), ("Grace Alone", "C")]);
        let (title, _) = lib.lookup("Grace Alone (My Hope)").unwrap();
        assert_eq!(title, "Grace Alone");
    }

    #[test]
    fn fuzzy_match_tolerates_typos() {
        let (_dir, mut lib) = library_with(&[("How Great Thou Art", "C F G")]);
        assert!(lib.lookup("hw great thou art").is_some());
    }

    #[test]
    fn missing_directory_loads_gracefully() {
        let mut lib = SheetLibrary::new(PathBuf::from("/tmp/nonexistent_sheet_dir_chordsheet_test"));
        assert!(lib.lookup("Anything").is_none());
        assert!(lib.titles().is_empty());
    }

    #[test]
    fn non_txt_files_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.md"), "not a sheet").unwrap();
        fs::write(dir.path().join("Doxology.txt"), "G D Em C").unwrap();
        let mut lib = SheetLibrary::new(dir.path().to_path_buf());
        assert_eq!(lib.titles(), vec!["Doxology".to_string()]);
    }

    #[test]
    fn nested_directories_are_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("hymns")).unwrap();
        fs::write(dir.path().join("hymns/Be Thou My Vision.txt"), "D A Bm G").unwrap();
        let mut lib = SheetLibrary::new(dir.path().to_path_buf());
        assert!(lib.lookup("Be Thou My Vision").is_some());
    }
}
