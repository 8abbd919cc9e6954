//! High-level conversion API.
//!
//! `Converter` owns the shared table handle, the resolver and the codec, and
//! exposes every conversion as a `&str -> String` (or list) call. It is built
//! once at startup and is read-only afterwards.

use std::sync::Arc;

use tracing::debug;

use crate::classifier::{classify, InputKind};
use crate::codec::DigitCodec;
use crate::format;
use crate::pronunciation::PronunciationSource;
use crate::resolver::{PinyinResolver, Resolution};
use crate::table::CharacterTable;

#[derive(Debug, Clone)]
pub struct Converter {
    resolver: PinyinResolver,
    codec: DigitCodec,
}

impl Converter {
    /// Wire a loaded table to the source it was built with.
    pub fn new(table: CharacterTable, source: Arc<dyn PronunciationSource>) -> Self {
        Self::from_shared(Arc::new(table), source)
    }

    pub fn from_shared(table: Arc<CharacterTable>, source: Arc<dyn PronunciationSource>) -> Self {
        let resolver = PinyinResolver::new(table);
        let codec = DigitCodec::new(resolver.clone(), source);
        Self { resolver, codec }
    }

    pub fn table(&self) -> &CharacterTable {
        self.resolver.table()
    }

    pub fn resolver(&self) -> &PinyinResolver {
        &self.resolver
    }

    pub fn codec(&self) -> &DigitCodec {
        &self.codec
    }

    /// Exact and prefix matches for one syllable.
    pub fn resolve(&self, syllable: &str) -> Resolution {
        self.resolver.resolve(syllable)
    }

    /// Characters for one syllable, exact matches first.
    pub fn pinyin_to_characters(&self, syllable: &str) -> Vec<String> {
        self.resolver.resolve(syllable).candidates()
    }

    /// Report for a space/comma separated syllable list.
    pub fn pinyin_list_report(&self, list: &str) -> String {
        let entries: Vec<String> = format::split_syllables(list)
            .into_iter()
            .map(|py| self.resolver.resolve(py).joined())
            .collect();
        format::render_pinyin_report(&entries)
    }

    /// Bracketed candidate report for a digit string.
    pub fn number_report(&self, digits: &str) -> String {
        format::render_digit_report(&self.codec.digits_to_groups(digits))
    }

    pub fn character_to_digits(&self, character: &str) -> Vec<u8> {
        self.codec.character_to_digits(character)
    }

    /// Compact digit string for Chinese text.
    pub fn characters_to_digit_string(&self, text: &str) -> String {
        format::render_digit_string(&self.codec.text_to_digits(text))
    }

    /// Diagnostic dump of the digit → consonants mapping.
    pub fn consonant_table(&self) -> String {
        format::render_consonant_table(&self.codec)
    }

    /// Classify `raw` and run the matching conversion.
    pub fn classify_and_convert(&self, raw: &str) -> String {
        let input = raw.trim();
        let kind = classify(input);
        debug!(%kind, input, "dispatching input");
        match kind {
            InputKind::Numeric => self.number_report(input),
            InputKind::PinyinLike => self.pinyin_list_report(input),
            InputKind::ChineseLike => self.characters_to_digit_string(input),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pronunciation::StaticPronunciations;

    fn converter() -> Converter {
        let src = StaticPronunciations::new()
            .with("天", &["tian"])
            .with("安", &["an"])
            .with("门", &["men"])
            .with("你", &["ni"])
            .with("好", &["hao"])
            .with("行", &["xing", "hang"]);
        let table = CharacterTable::build(
            "天,1\n安,2\n门,3\n你,4\n好,5\n行,6\n",
            &src,
            &Config::default(),
        )
        .unwrap();
        Converter::new(table, Arc::new(src))
    }

    #[test]
    fn chinese_input_encodes_to_digits() {
        let c = converter();
        assert_eq!(c.classify_and_convert(" 天安门 "), "205");
        assert_eq!(c.classify_and_convert("行"), "[03]");
    }

    #[test]
    fn pinyin_input_builds_list_report() {
        let c = converter();
        assert_eq!(c.classify_and_convert("ni hao"), "你\n\n--------\n好\n");
        assert_eq!(c.classify_and_convert("h"), "好行\n");
    }

    #[test]
    fn numeric_input_builds_digit_report() {
        let c = converter();
        let out = c.classify_and_convert("2");
        assert_eq!(out, "[2[\n  t -> 天\n  n -> 你\n]]\n\n");
    }

    #[test]
    fn mixed_input_is_numeric() {
        let c = converter();
        let out = c.classify_and_convert("a2");
        assert!(out.starts_with("[[a]]\n\n[2["));
    }

    #[test]
    fn pinyin_to_characters_orders_exact_first() {
        let c = converter();
        assert_eq!(c.pinyin_to_characters("ni"), vec!["你"]);
        assert_eq!(c.pinyin_to_characters("xing"), vec!["行"]);
        assert!(c.pinyin_to_characters("").is_empty());
    }

    #[test]
    fn consonant_table_lists_all_digits() {
        let table = converter().consonant_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0 = [x zh z]");
        assert_eq!(lines[1], "1 = [r y]");
        for (d, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{} = [", d)));
        }
    }
}
