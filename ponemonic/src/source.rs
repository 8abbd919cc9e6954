// Pronunciation source backed by the `pinyin` crate dictionary.
//
// In heteronym mode every reading of a character is reported (tones are
// stripped, so several toned readings may collapse into one; the table
// de-duplicates them). Otherwise only the dictionary's first reading is kept.

use pinyin::{ToPinyin, ToPinyinMulti};
use ponemonic_core::PronunciationSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinyinCrateSource {
    heteronym: bool,
}

impl PinyinCrateSource {
    pub fn new(heteronym: bool) -> Self {
        Self { heteronym }
    }

    pub fn heteronym(&self) -> bool {
        self.heteronym
    }
}

impl Default for PinyinCrateSource {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PronunciationSource for PinyinCrateSource {
    fn pronunciations(&self, character: &str) -> Vec<String> {
        let mut chars = character.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return Vec::new(),
        };

        if self.heteronym {
            c.to_pinyin_multi()
                .map(|multi| multi.into_iter().map(|p| p.plain().to_string()).collect())
                .unwrap_or_default()
        } else {
            c.to_pinyin()
                .map(|p| vec![p.plain().to_string()])
                .unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ponemonic_core::normalize_readings;

    #[test]
    fn single_reading_character() {
        let src = PinyinCrateSource::default();
        assert_eq!(normalize_readings(src.pronunciations("国")), vec!["guo"]);
    }

    #[test]
    fn heteronym_lists_every_reading() {
        let readings = normalize_readings(PinyinCrateSource::new(true).pronunciations("行"));
        assert!(readings.contains(&"xing".to_string()));
        assert!(readings.contains(&"hang".to_string()));
    }

    #[test]
    fn first_reading_only_without_heteronym() {
        let readings = PinyinCrateSource::new(false).pronunciations("行");
        assert_eq!(readings.len(), 1);
    }

    #[test]
    fn non_chinese_and_multi_char_inputs_have_no_reading() {
        let src = PinyinCrateSource::default();
        assert!(src.pronunciations("a").is_empty());
        assert!(src.pronunciations("中国").is_empty());
        assert!(src.pronunciations("").is_empty());
    }
}
