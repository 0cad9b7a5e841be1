pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;

pub use checker::SpellChecker;
pub use config::Config;

use serde::{Deserialize, Serialize};

/// Verdict for a single token, one per token in tokenization order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub word: String,
    pub is_correct: bool,
    pub suggestions: Vec<String>,
}

/// Aggregate counts over one checked text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_words: usize,
    pub unique_words: usize,
    pub misspelled_words: usize,
    pub unique_misspelled: usize,
}
