//! Converter construction.
//!
//! Builds a `ponemonic_core::Converter` over the bundled GB2312 table (or a
//! dataset file named in the config), with pronunciations from the `pinyin`
//! crate. Construction is the only fallible step; all conversions afterwards
//! are infallible.

use std::sync::Arc;

use ponemonic_core::{CharacterTable, Converter, LoadError, PronunciationSource};
use tracing::info;

use crate::config::PonemonicConfig;
use crate::source::PinyinCrateSource;

/// The 6763 GB2312 hanzi, one `character,rank` row each.
pub const BUNDLED_DATASET: &str = include_str!("../data/chinese_character_frequency_6763.csv");

/// Build a converter as described by `config`.
pub fn open(config: &PonemonicConfig) -> Result<Converter, LoadError> {
    let source: Arc<dyn PronunciationSource> = Arc::new(PinyinCrateSource::new(config.heteronym));

    let table = match &config.base().dataset_path {
        Some(path) => {
            info!(path = %path.display(), "loading dataset override");
            CharacterTable::from_path(path, source.as_ref(), config.base())?
        }
        None => CharacterTable::build(BUNDLED_DATASET, source.as_ref(), config.base())?,
    };

    Ok(Converter::new(table, source))
}

/// Build a converter over the bundled table with default options.
pub fn bundled() -> Result<Converter, LoadError> {
    open(&PonemonicConfig::default())
}
