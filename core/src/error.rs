//! Error types for table loading and configuration.
//!
//! Table loading is fail-fast: the first bad row aborts the whole build, so a
//! `LoadError` always means no table exists. Unknown characters met during a
//! conversion are not errors and never surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Failure while building a [`crate::CharacterTable`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset could not be interpreted as delimited rows.
    #[error("malformed dataset at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The pronunciation source knows nothing about a listed character.
    #[error("no pronunciation for character '{character}' (line {line})")]
    NoPronunciation { line: usize, character: String },

    /// A character is listed on more than one row.
    #[error("character '{character}' listed twice (line {line})")]
    DuplicateCharacter { line: usize, character: String },

    /// An on-disk dataset could not be read.
    #[error("failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub(crate) fn parse<R: Into<String>>(line: usize, reason: R) -> Self {
        LoadError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Failure while reading or writing a TOML configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
