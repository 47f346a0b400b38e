//! Error types shared across the crate

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Malformed feedback text such as `"crane -+=--"`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected \"<word> <code>\" separated by a single space")]
    MissingSeparator,

    #[error("invalid guess word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("feedback code must be exactly {expected} symbols, got {actual}")]
    CodeLength { expected: usize, actual: usize },

    #[error("unrecognized feedback symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
}

/// A well-formed guess that is not in the active dictionary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{word}' is not in the dictionary")]
pub struct InvalidWordError {
    pub word: String,
}

/// Invalid feedback symbol table definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("symbol table needs exactly 3 symbols (absent, present, correct), got {0}")]
    WrongCount(usize),

    #[error("symbol '{0}' is used for more than one outcome")]
    Duplicate(char),

    #[error("symbol '{0}' cannot be used in feedback codes")]
    Reserved(char),
}

/// Configuration file or value errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid symbols: {0}")]
    Symbols(#[from] SymbolError),

    #[error("unknown ranking mode '{0}' (expected 'frequency' or 'common')")]
    UnknownMode(String),

    #[error("weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("{name} must be at least 1")]
    Zero { name: &'static str },
}

/// Word list file errors
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {path} has no valid {word_length}-letter words")]
    Empty { path: PathBuf, word_length: usize },
}
