use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the word-list file. Defaults to the data directory.
    pub dictionary: Option<PathBuf>,

    #[serde(default = "default_max_distance")]
    pub max_distance: usize,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_distance() -> usize {
    2
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: None,
            max_distance: default_max_distance(),
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        dictionary: Option<PathBuf>,
        max_distance: Option<usize>,
        max_suggestions: Option<usize>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".tigspell.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(path) = dictionary {
            config.dictionary = Some(path);
        }
        if let Some(distance) = max_distance {
            config.max_distance = distance;
        }
        if let Some(suggestions) = max_suggestions {
            config.max_suggestions = suggestions;
        }

        // Make sure the dictionary's parent directory exists so that adding
        // words can create the file. The file itself is not created here;
        // loading degrades gracefully when it is absent.
        if let Some(parent) = config.dictionary_path().parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create dictionary directory")?;
            }
        }

        Ok(config)
    }

    /// Resolve the effective word-list path.
    pub fn dictionary_path(&self) -> PathBuf {
        self.dictionary
            .clone()
            .or_else(Self::default_dictionary_path)
            .unwrap_or_else(|| PathBuf::from("tigrigna_words.txt"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.max_distance != default_max_distance() {
            self.max_distance = other.max_distance;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tigspell").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_dictionary_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "tigspell").map(|dirs| dirs.data_dir().join("tigrigna_words.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.max_suggestions, 5);
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config::default();
        let override_config = Config {
            dictionary: Some(PathBuf::from("custom.txt")),
            max_suggestions: 3,
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.dictionary, Some(PathBuf::from("custom.txt")));
        assert_eq!(merged.max_suggestions, 3);
        assert_eq!(merged.max_distance, 2);
    }

    #[test]
    fn test_explicit_dictionary_wins() {
        let config = Config {
            dictionary: Some(PathBuf::from("words.txt")),
            ..Default::default()
        };
        assert_eq!(config.dictionary_path(), PathBuf::from("words.txt"));
    }
}
