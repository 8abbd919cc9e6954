//! Consonant-digit codec.
//!
//! Every initial consonant is bound to a digit (several consonants share a
//! digit). A character encodes to one digit per reading; a digit decodes to
//! the characters whose readings start with any of its consonants.
//!
//! Scan order matters. A reading's digit comes from the first consonant in
//! [`CONSONANT_DIGITS`] order that prefixes the reading. The consonant is the
//! needle and the reading the haystack, so "zh" and "z" never collide for a
//! "zhong"-style reading as long as "zh" comes first.

use std::fmt;
use std::sync::Arc;

use phf::phf_ordered_map;

use crate::pronunciation::{normalize_readings, PronunciationSource};
use crate::resolver::PinyinResolver;

/// Number of digits in the code alphabet.
pub const DIGIT_COUNT: usize = 10;

/// Initial consonant → digit, in scan order.
pub static CONSONANT_DIGITS: phf::OrderedMap<&'static str, u8> = phf_ordered_map! {
    "b" => 8, "p" => 4, "m" => 5, "f" => 8,
    "d" => 9, "t" => 2, "n" => 2, "l" => 6,
    "g" => 7, "k" => 3, "h" => 3, "j" => 9,
    "q" => 7, "x" => 0, "zh" => 0, "ch" => 6,
    "sh" => 4, "r" => 1, "z" => 0, "c" => 6, "s" => 4,
    "y" => 1, "w" => 5,
};

/// Digit bound to an initial consonant, if it is one.
pub fn consonant_digit(consonant: &str) -> Option<u8> {
    CONSONANT_DIGITS.get(consonant).copied()
}

/// First consonant (in scan order) that prefixes `pinyin`.
pub fn initial_consonant(pinyin: &str) -> Option<&'static str> {
    CONSONANT_DIGITS
        .keys()
        .copied()
        .find(|c| pinyin.starts_with(*c))
}

/// Digit for a single reading, e.g. `b` → 8, `ban` → 8.
///
/// Readings without a known initial ("a", "er", "ou") fall back to 0.
pub fn pinyin_to_digit(pinyin: &str) -> u8 {
    initial_consonant(pinyin)
        .and_then(consonant_digit)
        .unwrap_or(0)
}

/// One consonant line of a decoded digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsonantRow {
    pub consonant: &'static str,
    /// Every character the consonant prefix resolves to, concatenated.
    pub characters: String,
}

/// Decoding of one input character of a digit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitGroup {
    Digit { digit: u8, rows: Vec<ConsonantRow> },
    /// Anything that is not an ASCII digit passes through untouched.
    Literal(char),
}

/// Encodes characters to digits and decodes digits to candidate characters.
#[derive(Clone)]
pub struct DigitCodec {
    resolver: PinyinResolver,
    source: Arc<dyn PronunciationSource>,
    reverse: [Vec<&'static str>; DIGIT_COUNT],
}

impl DigitCodec {
    /// Build the codec, computing the digit → consonants index up front.
    pub fn new(resolver: PinyinResolver, source: Arc<dyn PronunciationSource>) -> Self {
        let mut reverse: [Vec<&'static str>; DIGIT_COUNT] = Default::default();
        for (&consonant, &digit) in CONSONANT_DIGITS.entries() {
            reverse[usize::from(digit)].push(consonant);
        }
        Self {
            resolver,
            source,
            reverse,
        }
    }

    /// Consonants bound to `digit` (taken modulo 10), in scan order.
    pub fn digit_to_consonants(&self, digit: usize) -> &[&'static str] {
        &self.reverse[digit % DIGIT_COUNT]
    }

    /// One digit per reading of `character`; empty when it has no reading.
    pub fn character_to_digits(&self, character: &str) -> Vec<u8> {
        normalize_readings(self.source.pronunciations(character))
            .iter()
            .map(|py| pinyin_to_digit(py))
            .collect()
    }

    /// Digits for every character of `text`, one list per character.
    pub fn text_to_digits(&self, text: &str) -> Vec<Vec<u8>> {
        let mut buf = [0u8; 4];
        text.chars()
            .map(|c| self.character_to_digits(c.encode_utf8(&mut buf)))
            .collect()
    }

    /// Decode a digit string into candidate characters per consonant.
    pub fn digits_to_groups(&self, digits: &str) -> Vec<DigitGroup> {
        digits
            .chars()
            .map(|c| match c {
                '0'..='9' => {
                    let digit = c as u8 - b'0';
                    let rows = self
                        .digit_to_consonants(usize::from(digit))
                        .iter()
                        .map(|&consonant| ConsonantRow {
                            consonant,
                            characters: self.resolver.resolve(consonant).joined(),
                        })
                        .collect();
                    DigitGroup::Digit { digit, rows }
                }
                _ => DigitGroup::Literal(c),
            })
            .collect()
    }
}

impl fmt::Debug for DigitCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitCodec")
            .field("entries", &self.resolver.table().len())
            .field("reverse", &self.reverse)
            .finish()
    }
}
