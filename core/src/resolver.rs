//! Pinyin → character resolution.
//!
//! A linear scan over the character table. Every pronunciation of every entry
//! is compared on its own, so a heteronym whose readings both match appears
//! once per matching reading.

use std::sync::Arc;

use serde::Serialize;

use crate::pronunciation::normalize_syllable;
use crate::table::CharacterTable;

/// Characters matching a pinyin query, split by match kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Characters with a reading equal to the query.
    pub exact: Vec<String>,
    /// Characters with a reading that starts with, but differs from, the query.
    pub prefix: Vec<String>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefix.is_empty()
    }

    pub fn len(&self) -> usize {
        self.exact.len() + self.prefix.len()
    }

    /// Exact matches followed by prefix matches.
    pub fn candidates(&self) -> Vec<String> {
        self.exact.iter().chain(&self.prefix).cloned().collect()
    }

    /// All candidates concatenated into one string.
    pub fn joined(&self) -> String {
        self.exact.iter().chain(&self.prefix).map(String::as_str).collect()
    }
}

/// Resolves syllables or syllable prefixes against a shared table.
#[derive(Debug, Clone)]
pub struct PinyinResolver {
    table: Arc<CharacterTable>,
}

impl PinyinResolver {
    pub fn new(table: Arc<CharacterTable>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CharacterTable {
        &self.table
    }

    /// Match `syllable` against every reading in table order.
    ///
    /// The query is normalized like the stored readings, so `LÜ` finds `lv`.
    ///
    /// An empty query matches nothing.
    pub fn resolve(&self, syllable: &str) -> Resolution {
        let query = normalize_syllable(syllable);
        let mut out = Resolution::default();
        if query.is_empty() {
            return out;
        }

        for entry in self.table.iter() {
            for reading in &entry.pronunciations {
                if *reading == query {
                    out.exact.push(entry.character.clone());
                } else if reading.starts_with(&query) {
                    out.prefix.push(entry.character.clone());
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::pronunciation::StaticPronunciations;

    fn resolver() -> PinyinResolver {
        let src = StaticPronunciations::new()
            .with("国", &["guo"])
            .with("古", &["gu"])
            .with("过", &["guo"])
            .with("行", &["xing", "hang"])
            .with("兴", &["xing"])
            .with("星", &["xing"]);
        let data = "国,1\n古,2\n过,3\n行,4\n兴,5\n星,6\n";
        let table = CharacterTable::build(data, &src, &Config::default()).unwrap();
        PinyinResolver::new(Arc::new(table))
    }

    #[test]
    fn exact_matches_precede_prefix_matches() {
        let r = resolver().resolve("gu");
        assert_eq!(r.exact, vec!["古"]);
        assert_eq!(r.prefix, vec!["国", "过"]);
        assert_eq!(r.candidates(), vec!["古", "国", "过"]);
        assert_eq!(r.joined(), "古国过");
    }

    #[test]
    fn query_is_case_folded() {
        let r = resolver().resolve("GUO");
        assert_eq!(r.exact, vec!["国", "过"]);
        assert!(r.prefix.is_empty());
    }

    #[test]
    fn empty_and_unknown_queries_yield_nothing() {
        let res = resolver();
        assert!(res.resolve("").is_empty());
        assert!(res.resolve("   ").is_empty());
        assert!(res.resolve("zzzzz").is_empty());
    }

    #[test]
    fn heteronym_can_appear_in_both_groups() {
        let r = resolver().resolve("h");
        assert_eq!(r.prefix, vec!["行"]);

        // "x" prefixes only "xing" of 行, "hang" does not match
        let r = resolver().resolve("x");
        assert_eq!(r.prefix, vec!["行", "兴", "星"]);
    }

    #[test]
    fn umlaut_queries_match_v_readings() {
        let src = StaticPronunciations::new().with("绿", &["lü"]);
        let table = CharacterTable::build("绿,1", &src, &Config::default()).unwrap();
        let res = PinyinResolver::new(Arc::new(table));

        assert_eq!(res.table().entries()[0].pronunciations, vec!["lv"]);
        for query in ["lv", "lü", "LÜ", "lu\u{308}"] {
            assert_eq!(res.resolve(query).exact, vec!["绿"], "{query:?}");
        }
        assert_eq!(res.resolve("Lu\u{308}").exact, vec!["绿"]);
    }

    #[test]
    fn duplicates_are_kept_per_reading() {
        let src = StaticPronunciations::new().with("得", &["de", "dei"]);
        let table = CharacterTable::build("得,1", &src, &Config::default()).unwrap();
        let res = PinyinResolver::new(Arc::new(table));

        let r = res.resolve("d");
        assert_eq!(r.prefix, vec!["得", "得"]);
        assert_eq!(r.len(), 2);

        let r = res.resolve("de");
        assert_eq!(r.exact, vec!["得"]);
        assert_eq!(r.prefix, vec!["得"]);
    }
}
