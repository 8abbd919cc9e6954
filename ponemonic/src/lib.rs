//! ponemonic crate root
//!
//! Pinyin, Chinese character and consonant-digit conversions over a bundled
//! table of the 6763 GB2312 hanzi, with readings taken from the `pinyin`
//! crate dictionary.
//!
//! ```no_run
//! let converter = ponemonic::bundled()?;
//! assert_eq!(converter.characters_to_digit_string("中"), "0");
//! print!("{}", converter.classify_and_convert("zhong guo"));
//! # Ok::<(), ponemonic::LoadError>(())
//! ```
//!
//! Public API exported here:
//! - `open` / `bundled` from `engine`
//! - `PinyinCrateSource` from `source`
//! - `PonemonicConfig` from `config`
//! - the core types from `ponemonic_core`

pub mod config;
pub mod engine;
pub mod source;

pub use ponemonic_core::{
    classify, CharacterEntry, CharacterTable, Config, ConfigError, Converter, DigitCodec,
    InputKind, LoadError, PinyinResolver, PronunciationSource, Resolution, StaticPronunciations,
};

pub use config::PonemonicConfig;
pub use engine::{bundled, open, BUNDLED_DATASET};
pub use source::PinyinCrateSource;
