/// Runtime configuration: word bank override and seeding
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Words the game draws from when no override is configured.
pub const DEFAULT_WORDS: [&str; 18] = [
    "array",
    "object",
    "modulo",
    "boolean",
    "float",
    "integer",
    "number",
    "function",
    "class",
    "index",
    "callback",
    "iterator",
    "constructor",
    "undefined",
    "null",
    "string",
    "prototype",
    "generator",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("word bank is empty")]
    EmptyWordBank,
    #[error("word {0:?} must be non-empty lowercase a-z")]
    InvalidWord(String),
}

/// A validated, immutable list of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(ConfigError::EmptyWordBank);
        }
        if let Some(bad) = words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(|c| c.is_ascii_lowercase()))
        {
            return Err(ConfigError::InvalidWord(bad.clone()));
        }
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

/// On-disk config file shape.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    words: Option<Vec<String>>,
}

/// Everything the session needs to know before the first round.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    pub word_bank: WordBank,
    /// Fixed seed for word selection; `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_json(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let word_bank = match file.words {
            Some(words) => WordBank::new(words)?,
            None => WordBank::default(),
        };
        Ok(Self {
            word_bank,
            seed: None,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
