use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read dictionary {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to dictionary {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// In-memory word set backed by a flat UTF-8 word list, one word per line.
pub struct Dictionary {
    words: HashSet<String>,
    path: PathBuf,
}

impl Dictionary {
    /// Load a dictionary from a word-list file.
    ///
    /// Lines are trimmed and blank lines discarded. A missing file is
    /// reported as `NotFound` so the caller can degrade to an empty
    /// dictionary rather than abort the session.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DictionaryError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DictionaryError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            words,
            path: path.to_path_buf(),
        })
    }

    /// Create an empty dictionary that will persist to `path` on `add`.
    pub fn empty(path: &Path) -> Self {
        Self {
            words: HashSet::new(),
            path: path.to_path_buf(),
        }
    }

    /// Check if a word exists in the dictionary. Exact code-point match;
    /// Ethiopic has no case to fold.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Add a word to the in-memory set and append it to the backing file.
    ///
    /// Empty input (after trimming) and re-adding an existing word are
    /// no-ops. The in-memory insert always takes effect first: a
    /// `WriteFailed` error means the word is usable for the rest of the
    /// session but was not persisted.
    pub fn add(&mut self, word: &str) -> Result<(), DictionaryError> {
        let word = word.trim();
        if word.is_empty() || !self.words.insert(word.to_string()) {
            return Ok(());
        }

        self.append_to_file(word)
            .map_err(|source| DictionaryError::WriteFailed {
                path: self.path.clone(),
                source,
            })
    }

    fn append_to_file(&self, word: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        write!(file, "\n{}", word)
    }

    /// Iterate over every word, for the suggestion scan. Iteration order is
    /// unspecified; ranking applies its own tie-break.
    pub fn all_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_trims_and_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "ሰላም\n\n  ዓለም  \n\nማይ\n").unwrap();

        let dict = Dictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("ሰላም"));
        assert!(dict.contains("ዓለም"));
        assert!(!dict.contains("  ዓለም  "));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");

        match Dictionary::load(&path) {
            Err(DictionaryError::NotFound { .. }) => {}
            other => panic!("expected NotFound, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_add_persists_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "ሰላም").unwrap();

        let mut dict = Dictionary::load(&path).unwrap();
        dict.add("ዓለም").unwrap();
        dict.add("ዓለም").unwrap();
        dict.add("   ").unwrap();
        assert_eq!(dict.len(), 2);

        // Re-adding did not duplicate the file entry either.
        let reloaded = Dictionary::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.contains("ዓለም"));
    }

    #[test]
    fn test_add_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.txt");

        let mut dict = Dictionary::empty(&path);
        dict.add("ማይ").unwrap();

        let reloaded = Dictionary::load(&path).unwrap();
        assert!(reloaded.contains("ማይ"));
    }

    #[test]
    fn test_add_survives_write_failure() {
        let dir = tempdir().unwrap();
        // The backing path is a directory, so the append must fail.
        let mut dict = Dictionary::empty(dir.path());

        let result = dict.add("ሰላም");
        assert!(matches!(result, Err(DictionaryError::WriteFailed { .. })));
        // In-memory state is still authoritative for the session.
        assert!(dict.contains("ሰላም"));
    }
}
