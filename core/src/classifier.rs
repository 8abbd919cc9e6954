// Input classification.
//
// Cheap, order-sensitive heuristic used to route raw input: any ASCII digit
// wins over any ASCII letter, and everything else is treated as Chinese text.

use once_cell::sync::Lazy;
use regex::Regex;

static ASCII_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("valid digit regex"));
static ASCII_LETTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z]").expect("valid letter regex"));

/// What a raw input string looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Contains at least one ASCII digit: decode as a digit string.
    Numeric,
    /// No digits but at least one ASCII letter: resolve as pinyin.
    PinyinLike,
    /// Neither: encode as Chinese text.
    ChineseLike,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputKind::Numeric => write!(f, "Numeric"),
            InputKind::PinyinLike => write!(f, "PinyinLike"),
            InputKind::ChineseLike => write!(f, "ChineseLike"),
        }
    }
}

/// Classify `raw` after trimming surrounding whitespace.
pub fn classify(raw: &str) -> InputKind {
    let input = raw.trim();
    if ASCII_DIGIT.is_match(input) {
        InputKind::Numeric
    } else if ASCII_LETTER.is_match(input) {
        InputKind::PinyinLike
    } else {
        InputKind::ChineseLike
    }
}
