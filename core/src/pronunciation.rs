//! Pronunciation lookup seam.
//!
//! The character table does not know how to pronounce characters by itself;
//! it asks a [`PronunciationSource`]. The `ponemonic` crate provides one backed
//! by the `pinyin` crate, and [`StaticPronunciations`] covers tests and small
//! hand-written tables.

use std::collections::HashMap;

use ahash::AHashSet;
use unicode_normalization::UnicodeNormalization;

/// Something that can list the toneless pinyin readings of a character.
pub trait PronunciationSource: Send + Sync {
    /// Readings of `character`, in the source's preferred order.
    ///
    /// An unknown character yields an empty vector. Implementations need not
    /// normalize or de-duplicate; callers run the result through
    /// [`normalize_readings`].
    fn pronunciations(&self, character: &str) -> Vec<String>;
}

/// Canonical form of a single reading: NFC, trimmed, lowercase, `ü` as `v`.
pub fn normalize_syllable(raw: &str) -> String {
    raw.trim()
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ü' { 'v' } else { c })
        .collect()
}

/// Normalize every reading, drop empties and de-duplicate keeping first-seen order.
pub fn normalize_readings<I, S>(readings: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = AHashSet::new();
    let mut out = Vec::new();
    for raw in readings {
        let syllable = normalize_syllable(raw.as_ref());
        if !syllable.is_empty() && seen.insert(syllable.clone()) {
            out.push(syllable);
        }
    }
    out
}

/// In-memory pronunciation source.
#[derive(Debug, Clone, Default)]
pub struct StaticPronunciations {
    map: HashMap<String, Vec<String>>,
}

impl StaticPronunciations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with<S: AsRef<str>>(mut self, character: &str, readings: &[S]) -> Self {
        self.insert(character, readings);
        self
    }

    /// Add readings for a character, appending to any already present.
    pub fn insert<S: AsRef<str>>(&mut self, character: &str, readings: &[S]) {
        self.map
            .entry(character.to_string())
            .or_default()
            .extend(readings.iter().map(|r| r.as_ref().to_string()));
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl PronunciationSource for StaticPronunciations {
    fn pronunciations(&self, character: &str) -> Vec<String> {
        self.map.get(character).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_folds_case_and_umlaut() {
        assert_eq!(normalize_syllable(" LÜ "), "lv");
        assert_eq!(normalize_syllable("nüe"), "nve");
        assert_eq!(normalize_syllable("Zhong"), "zhong");
    }

    #[test]
    fn normalize_composes_decomposed_umlaut() {
        // u + combining diaeresis
        assert_eq!(normalize_syllable("lu\u{0308}"), "lv");
    }

    #[test]
    fn readings_are_deduplicated_in_order() {
        let out = normalize_readings(["hao", "HAO", "", "hao ", "xing"]);
        assert_eq!(out, vec!["hao", "xing"]);
    }

    #[test]
    fn static_source_returns_inserted_readings() {
        let src = StaticPronunciations::new()
            .with("行", &["xing", "hang"])
            .with("国", &["guo"]);
        assert_eq!(src.pronunciations("行"), vec!["xing", "hang"]);
        assert_eq!(src.pronunciations("国"), vec!["guo"]);
        assert!(src.pronunciations("无").is_empty());
        assert_eq!(src.len(), 2);
    }
}
