pub mod dictionary;
pub mod distance;
pub mod keyboard;
pub mod suggestions;
pub mod tokenizer;

use crate::{CheckResult, Config, Statistics};
use dictionary::Dictionary;
use std::collections::HashSet;

pub struct SpellChecker {
    dictionary: Dictionary,
    max_distance: usize,
    max_suggestions: usize,
}

impl SpellChecker {
    /// Build a checker from configuration, loading the dictionary eagerly.
    ///
    /// A missing or unreadable word list degrades to an empty dictionary
    /// with a warning; the session stays usable.
    pub fn new(config: &Config) -> Self {
        let path = config.dictionary_path();
        let dictionary = match Dictionary::load(&path) {
            Ok(dict) => dict,
            Err(e) => {
                eprintln!("Warning: {}; starting with an empty dictionary", e);
                Dictionary::empty(&path)
            }
        };

        Self {
            dictionary,
            max_distance: config.max_distance,
            max_suggestions: config.max_suggestions,
        }
    }

    /// Check a text, producing one verdict per token in order.
    ///
    /// Duplicate words are checked independently. Input with no Tigrigna
    /// words yields an empty sequence, never an error.
    pub fn check(&self, text: &str) -> Vec<CheckResult> {
        tokenizer::tokenize(text)
            .into_iter()
            .map(|word| {
                let is_correct = self.dictionary.contains(&word);
                let suggestions = if is_correct {
                    Vec::new()
                } else {
                    suggestions::suggest(
                        &word,
                        &self.dictionary,
                        self.max_distance,
                        self.max_suggestions,
                    )
                };

                CheckResult {
                    word,
                    is_correct,
                    suggestions,
                }
            })
            .collect()
    }

    /// Compute word counts for a text. Uses the same tokenizer as `check`,
    /// so the two always agree on word boundaries.
    pub fn statistics(&self, text: &str) -> Statistics {
        let words = tokenizer::tokenize(text);
        let unique: HashSet<&str> = words.iter().map(String::as_str).collect();

        let misspelled: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|word| !self.dictionary.contains(word))
            .collect();
        let unique_misspelled: HashSet<&str> = misspelled.iter().copied().collect();

        Statistics {
            total_words: words.len(),
            unique_words: unique.len(),
            misspelled_words: misspelled.len(),
            unique_misspelled: unique_misspelled.len(),
        }
    }

    /// Add a word to the dictionary for the rest of the session. A failed
    /// append is logged; the in-memory addition still holds.
    pub fn add_word(&mut self, word: &str) {
        if let Err(e) = self.dictionary.add(word) {
            eprintln!("Warning: {}", e);
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
