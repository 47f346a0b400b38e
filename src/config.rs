//! Configuration loading from wordle_assistant.toml
//!
//! ## Example
//!
//! ```toml
//! word-length = 5
//! symbols = "colors"
//! mode = "frequency"
//! top-n = 10
//! dictionary = "data/words.txt"
//! common-words = "data/common_words.txt"
//! max-rounds = 6
//!
//! [weights]
//! letter = 0.3
//! position = 0.4
//! pair = 0.2
//! uniqueness = 0.1
//! ```
//!
//! Every key is optional. Relative paths are taken from the file's directory.

use crate::core::{DEFAULT_WORD_LENGTH, SymbolTable, Word};
use crate::error::ConfigError;
use crate::solver::{RankingMode, ScoreWeights};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name searched for by `Config::load`
pub const CONFIG_FILE: &str = "wordle_assistant.toml";

/// Default number of suggestions shown
pub const DEFAULT_TOP_N: usize = 10;

/// Default auto-play round limit
pub const DEFAULT_MAX_ROUNDS: usize = 6;

/// Assistant configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// File this config was read from, if any
    pub source: Option<PathBuf>,
    pub word_length: usize,
    pub symbols: SymbolTable,
    /// Ranking mode name, checked against the known modes
    pub mode: String,
    pub top_n: usize,
    /// Dictionary file; the embedded list is used when unset
    pub dictionary: Option<PathBuf>,
    /// Common-word file; the embedded list is used when unset
    pub common_words: Option<PathBuf>,
    pub max_rounds: usize,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            word_length: DEFAULT_WORD_LENGTH,
            symbols: SymbolTable::default(),
            mode: "frequency".to_string(),
            top_n: DEFAULT_TOP_N,
            dictionary: None,
            common_words: None,
            max_rounds: DEFAULT_MAX_ROUNDS,
            weights: ScoreWeights::default(),
        }
    }
}

/// Runtime settings shared by the shell and the terminal UI
#[derive(Debug, Clone)]
pub struct Settings {
    pub symbols: SymbolTable,
    pub top_n: usize,
    pub max_rounds: usize,
    pub weights: ScoreWeights,
    /// Used when switching to the common-word mode
    pub common_words: Vec<Word>,
    pub mode: RankingMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbols: SymbolTable::default(),
            top_n: DEFAULT_TOP_N,
            max_rounds: DEFAULT_MAX_ROUNDS,
            weights: ScoreWeights::default(),
            common_words: Vec::new(),
            mode: RankingMode::default(),
        }
    }
}

/// Raw config as deserialized from TOML
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawConfig {
    word_length: Option<usize>,
    symbols: Option<String>,
    mode: Option<String>,
    top_n: Option<usize>,
    dictionary: Option<PathBuf>,
    common_words: Option<PathBuf>,
    max_rounds: Option<usize>,
    weights: Option<ScoreWeights>,
}

impl Config {
    /// Load `wordle_assistant.toml` from the directory, or defaults if absent
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read, parsed or
    /// validated.
    pub fn load(directory: &Path) -> Result<Self, ConfigError> {
        let path = directory.join(CONFIG_FILE);
        if path.exists() {
            Self::load_file(&path)
        } else {
            log::debug!("no {CONFIG_FILE} in {}, using defaults", directory.display());
            Ok(Self::default())
        }
    }

    /// Load a specific config file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Self::from_raw(raw, Some(path.to_path_buf()))
    }

    /// Parse config text with no backing file
    ///
    /// # Errors
    /// Returns `ConfigError` if the text is not valid config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<string>"),
            source,
        })?;
        Self::from_raw(raw, None)
    }

    fn from_raw(raw: RawConfig, source: Option<PathBuf>) -> Result<Self, ConfigError> {
        let base = source
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        let defaults = Self::default();

        let config = Self {
            word_length: raw.word_length.unwrap_or(defaults.word_length),
            symbols: match raw.symbols {
                Some(name) => SymbolTable::from_name(&name)?,
                None => defaults.symbols,
            },
            mode: raw.mode.unwrap_or(defaults.mode),
            top_n: raw.top_n.unwrap_or(defaults.top_n),
            dictionary: raw.dictionary.map(resolve),
            common_words: raw.common_words.map(resolve),
            max_rounds: raw.max_rounds.unwrap_or(defaults.max_rounds),
            weights: raw.weights.unwrap_or(defaults.weights),
            source,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and the mode name
    ///
    /// # Errors
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::Zero {
                name: "word-length",
            });
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::Zero { name: "max-rounds" });
        }
        self.weights.validate()?;
        RankingMode::from_name(&self.mode, self.weights, Vec::new())?;
        Ok(())
    }

    /// Runtime settings for this config with the given common-word list
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownMode` if the mode name is not recognised.
    pub fn settings(&self, common_words: Vec<Word>) -> Result<Settings, ConfigError> {
        let mode = RankingMode::from_name(&self.mode, self.weights, common_words.clone())?;
        Ok(Settings {
            symbols: self.symbols,
            top_n: self.top_n,
            max_rounds: self.max_rounds,
            weights: self.weights,
            common_words,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.symbols, SymbolTable::ARITHMETIC);
        assert_eq!(config.mode, "frequency");
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.max_rounds, DEFAULT_MAX_ROUNDS);
        assert_eq!(config.weights, ScoreWeights::default());
        assert!(config.dictionary.is_none());
    }

    #[test]
    fn kebab_case_keys() {
        let config = Config::from_toml_str(
            r#"
            word-length = 6
            symbols = "colors"
            mode = "common"
            top-n = 3
            max-rounds = 4

            [weights]
            letter = 1.0
            uniqueness = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.word_length, 6);
        assert_eq!(config.symbols, SymbolTable::COLORS);
        assert_eq!(config.mode, "common");
        assert_eq!(config.top_n, 3);
        assert_eq!(config.max_rounds, 4);
        assert!((config.weights.letter - 1.0).abs() < f64::EPSILON);
        // Missing weights keep their defaults
        assert!((config.weights.position - 0.4).abs() < f64::EPSILON);
        assert!(config.weights.uniqueness.abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            Config::from_toml_str("mode = \"entropy\""),
            Err(ConfigError::UnknownMode(_))
        ));
        assert!(matches!(
            Config::from_toml_str("symbols = \"xx\""),
            Err(ConfigError::Symbols(_))
        ));
        assert!(matches!(
            Config::from_toml_str("max-rounds = 0"),
            Err(ConfigError::Zero { name: "max-rounds" })
        ));
        assert!(matches!(
            Config::from_toml_str("[weights]\npair = -1.0"),
            Err(ConfigError::InvalidWeight { name: "pair", .. })
        ));
        assert!(matches!(
            Config::from_toml_str("unknown-key = 1"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn settings_carry_mode_and_common_words() {
        let config = Config::from_toml_str("mode = \"common\"\ntop-n = 4").unwrap();
        let common = vec![Word::new("crane").unwrap()];
        let settings = config.settings(common).unwrap();
        assert_eq!(settings.mode.name(), "common");
        assert_eq!(settings.top_n, 4);
        assert_eq!(settings.common_words.len(), 1);
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = std::env::temp_dir().join(format!("wordle_assistant_cfg_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config::load(&dir).unwrap();
        assert!(config.source.is_none());
        std::fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn load_resolves_relative_paths() {
        let dir = std::env::temp_dir().join(format!(
            "wordle_assistant_cfg_rel_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "dictionary = \"words.txt\"\n").unwrap();

        let config = Config::load(&dir).unwrap();
        assert_eq!(config.dictionary, Some(dir.join("words.txt")));
        assert_eq!(config.source, Some(dir.join(CONFIG_FILE)));
        std::fs::remove_dir_all(dir).ok();
    }
}
