//! Batch corpus ingestion: scan a text corpus for unseen Tigrigna words and
//! append them to the dictionary file. Purely additive; existing entries are
//! never rewritten or removed.

use crate::checker::dictionary::Dictionary;
use crate::checker::tokenizer;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct IngestReport {
    pub total_words: usize,
    pub new_words: usize,
}

/// Scan a corpus file (or a directory of `.txt` files) and append every
/// unseen multi-character word to the dictionary, lexically sorted, in a
/// single append operation.
pub fn ingest_corpus(corpus: &Path, dictionary_path: &Path) -> Result<IngestReport> {
    let dictionary = match Dictionary::load(dictionary_path) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("Warning: {}; ingesting into a new dictionary", e);
            Dictionary::empty(dictionary_path)
        }
    };
    println!(
        "Loaded {} words from existing dictionary",
        dictionary.len().to_string().yellow()
    );

    let files = corpus_files(corpus)?;
    if files.is_empty() {
        anyhow::bail!("No corpus files found at: {}", corpus.display());
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:30}] {pos}/{len} {msg}")
            .unwrap(),
    );

    let mut total_words = 0;
    let mut new_words = BTreeSet::new();

    for file in &files {
        pb.set_message(file.display().to_string());
        let content = fs::read_to_string(file)
            .with_context(|| format!("Failed to read corpus file: {}", file.display()))?;

        for word in tokenizer::tokenize(&content) {
            total_words += 1;
            // Single characters are too noisy to be worth learning.
            if word.chars().count() > 1 && !dictionary.contains(&word) {
                new_words.insert(word);
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if !new_words.is_empty() {
        append_sorted(dictionary_path, &new_words)?;
        println!(
            "{} Added {} new words to the dictionary",
            "✓".green().bold(),
            new_words.len().to_string().green()
        );
    } else {
        println!("No new words to add to the dictionary");
    }

    Ok(IngestReport {
        total_words,
        new_words: new_words.len(),
    })
}

fn corpus_files(corpus: &Path) -> Result<Vec<PathBuf>> {
    if corpus.is_file() {
        return Ok(vec![corpus.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(corpus) {
        let entry = entry.context("Failed to walk corpus directory")?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Append the sorted block in one write. The leading newline guards against
/// an unterminated last line; the loader discards the blank line it may
/// leave behind.
fn append_sorted(dictionary_path: &Path, words: &BTreeSet<String>) -> Result<()> {
    let mut block = String::from("\n");
    for word in words {
        block.push_str(word);
        block.push('\n');
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(dictionary_path)
        .with_context(|| {
            format!(
                "Failed to open dictionary for append: {}",
                dictionary_path.display()
            )
        })?;
    file.write_all(block.as_bytes()).with_context(|| {
        format!(
            "Failed to append to dictionary: {}",
            dictionary_path.display()
        )
    })?;

    Ok(())
}

/// Print dictionary location and size.
pub fn show_info(dictionary_path: &Path) -> Result<()> {
    if !dictionary_path.exists() {
        println!(
            "{} Dictionary not found at: {}",
            "✗".red().bold(),
            dictionary_path.display()
        );
        println!(
            "Run {} to build one from a corpus.",
            "tigspell dict ingest <CORPUS>".cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(dictionary_path)?;

    println!("{}", "Dictionary".bold());
    println!("  Path: {}", dictionary_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Format: flat word list (UTF-8, one word per line)");

    match Dictionary::load(dictionary_path) {
        Ok(dict) => println!("  Words: {}", dict.len().to_string().yellow()),
        Err(e) => println!("  {}: {}", "Error loading dictionary".red(), e),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ingest_appends_sorted_difference() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("words.txt");
        let corpus_path = dir.path().join("corpus.txt");
        fs::write(&dict_path, "ሰላም\n").unwrap();
        // ዓለም is new, ሰላም is known, ሀ is a single character.
        fs::write(&corpus_path, "ሰላም ዓለም hello ሀ ማይ ዓለም").unwrap();

        let report = ingest_corpus(&corpus_path, &dict_path).unwrap();
        assert_eq!(report.total_words, 5);
        assert_eq!(report.new_words, 2);

        let dict = Dictionary::load(&dict_path).unwrap();
        assert!(dict.contains("ሰላም"));
        assert!(dict.contains("ዓለም"));
        assert!(dict.contains("ማይ"));
        assert!(!dict.contains("ሀ"));

        // New words land after the existing entries, lexically sorted.
        let content = fs::read_to_string(&dict_path).unwrap();
        let lines: Vec<&str> = content.lines().filter(|l| !l.is_empty()).collect();
        assert_eq!(lines, vec!["ሰላም", "ማይ", "ዓለም"]);
    }

    #[test]
    fn test_ingest_is_idempotent() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("words.txt");
        let corpus_path = dir.path().join("corpus.txt");
        fs::write(&corpus_path, "ሰላም ዓለም").unwrap();

        let first = ingest_corpus(&corpus_path, &dict_path).unwrap();
        assert_eq!(first.new_words, 2);

        let second = ingest_corpus(&corpus_path, &dict_path).unwrap();
        assert_eq!(second.new_words, 0);

        let dict = Dictionary::load(&dict_path).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_ingest_directory_of_text_files() {
        let dir = tempdir().unwrap();
        let dict_path = dir.path().join("words.txt");
        let corpus_dir = dir.path().join("corpus");
        fs::create_dir(&corpus_dir).unwrap();
        fs::write(corpus_dir.join("a.txt"), "ሰላም").unwrap();
        fs::write(corpus_dir.join("b.txt"), "ዓለም").unwrap();
        fs::write(corpus_dir.join("skip.md"), "ማይ").unwrap();

        let report = ingest_corpus(&corpus_dir, &dict_path).unwrap();
        assert_eq!(report.new_words, 2);

        let dict = Dictionary::load(&dict_path).unwrap();
        assert!(dict.contains("ሰላም"));
        assert!(dict.contains("ዓለም"));
        assert!(!dict.contains("ማይ"));
    }

    #[test]
    fn test_missing_corpus_is_an_error() {
        let dir = tempdir().unwrap();
        let result = ingest_corpus(&dir.path().join("absent"), &dir.path().join("words.txt"));
        assert!(result.is_err());
    }
}
