//! Character table
//!
//! An immutable, ordered list of [`CharacterEntry`] records built once from a
//! comma-delimited dataset:
//!
//! ```text
//! # comment
//! 的,1
//! 一,2
//! ```
//!
//! Column 0 is the character, column 1 its frequency rank. Fields are trimmed;
//! blank lines and comment lines are skipped. Pronunciations are not part of
//! the dataset, they come from a [`PronunciationSource`] at build time.
//!
//! The build is all-or-nothing: any bad row aborts it. There is no keyed
//! access; matching code scans `iter()` linearly.

use std::path::Path;

use ahash::AHashSet;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::LoadError;
use crate::pronunciation::{normalize_readings, PronunciationSource};

/// One known character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterEntry {
    pub character: String,
    /// Relative usage frequency. Informational only; nothing ranks by it.
    pub frequency: i64,
    /// Normalized, de-duplicated readings. Never empty.
    pub pronunciations: Vec<String>,
}

impl CharacterEntry {
    pub fn is_heteronym(&self) -> bool {
        self.pronunciations.len() > 1
    }
}

/// Immutable character table in dataset order.
#[derive(Debug, Clone, Default)]
pub struct CharacterTable {
    entries: Vec<CharacterEntry>,
}

impl CharacterTable {
    /// Build a table from dataset text.
    pub fn build(
        dataset: &str,
        source: &dyn PronunciationSource,
        config: &Config,
    ) -> Result<Self, LoadError> {
        let mut entries = Vec::new();
        let mut seen = AHashSet::new();
        let mut expected_fields: Option<usize> = None;
        let mut skipped = 0usize;

        for (idx, raw) in dataset.lines().enumerate() {
            let line = idx + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with(config.comment_marker) {
                skipped += 1;
                continue;
            }

            let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
            if fields.len() < 2 {
                return Err(LoadError::parse(
                    line,
                    format!("expected at least 2 fields, found {}", fields.len()),
                ));
            }
            match expected_fields {
                None => expected_fields = Some(fields.len()),
                Some(n) if n != fields.len() => {
                    return Err(LoadError::parse(
                        line,
                        format!("expected {} fields, found {}", n, fields.len()),
                    ));
                }
                Some(_) => {}
            }

            let character = fields[0];
            if character.chars().count() != 1 {
                return Err(LoadError::parse(
                    line,
                    format!("expected a single character, found '{}'", character),
                ));
            }
            let frequency: i64 = fields[1].parse().map_err(|_| {
                LoadError::parse(line, format!("cannot convert '{}' to a number", fields[1]))
            })?;

            if !seen.insert(character.to_string()) {
                return Err(LoadError::DuplicateCharacter {
                    line,
                    character: character.to_string(),
                });
            }

            let pronunciations = normalize_readings(source.pronunciations(character));
            if pronunciations.is_empty() {
                return Err(LoadError::NoPronunciation {
                    line,
                    character: character.to_string(),
                });
            }

            entries.push(CharacterEntry {
                character: character.to_string(),
                frequency,
                pronunciations,
            });
        }

        let table = Self { entries };
        debug!(skipped, "skipped blank and comment lines");
        info!(
            entries = table.len(),
            heteronyms = table.iter().filter(|e| e.is_heteronym()).count(),
            "character table loaded"
        );
        Ok(table)
    }

    /// Build from raw bytes, rejecting invalid UTF-8 with the offending line.
    pub fn from_bytes(
        dataset: &[u8],
        source: &dyn PronunciationSource,
        config: &Config,
    ) -> Result<Self, LoadError> {
        let text = std::str::from_utf8(dataset).map_err(|e| {
            let line = dataset[..e.valid_up_to()]
                .iter()
                .filter(|&&b| b == b'\n')
                .count()
                + 1;
            LoadError::parse(line, "invalid UTF-8")
        })?;
        Self::build(text, source, config)
    }

    /// Read and build a dataset file.
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        source: &dyn PronunciationSource,
        config: &Config,
    ) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| LoadError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read dataset");
        Self::from_bytes(&bytes, source, config)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CharacterEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CharacterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a CharacterTable {
    type Item = &'a CharacterEntry;
    type IntoIter = std::slice::Iter<'a, CharacterEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
