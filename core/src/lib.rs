//! ponemonic-core
//!
//! Character table, pinyin resolution and the consonant-digit codec shared by
//! the `ponemonic` tools.
//!
//! The engine converts between three representations of Chinese text:
//! toneless pinyin, the characters themselves, and a digit code derived from
//! each reading's initial consonant.
//!
//! Public API:
//! - `CharacterTable` - immutable (character, frequency, readings) records
//! - `PronunciationSource` - lookup seam used to fill in readings at load time
//! - `PinyinResolver` / `Resolution` - exact and prefix matching
//! - `DigitCodec` - consonant ↔ digit encoding and decoding
//! - `classify` / `InputKind` - routes raw input to a conversion
//! - `Converter` - every conversion behind one handle
//! - `Config` - table loading options (TOML)

pub mod classifier;
pub use classifier::{classify, InputKind};

pub mod codec;
pub use codec::{
    consonant_digit, initial_consonant, pinyin_to_digit, ConsonantRow, DigitCodec, DigitGroup,
    CONSONANT_DIGITS, DIGIT_COUNT,
};

pub mod config;
pub use config::Config;

pub mod converter;
pub use converter::Converter;

pub mod error;
pub use error::{ConfigError, LoadError};

pub mod format;

pub mod pronunciation;
pub use pronunciation::{
    normalize_readings, normalize_syllable, PronunciationSource, StaticPronunciations,
};

pub mod resolver;
pub use resolver::{PinyinResolver, Resolution};

pub mod table;
pub use table::{CharacterEntry, CharacterTable};
