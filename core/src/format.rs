//! Report rendering.
//!
//! Output formats are fixed:
//!
//! - pinyin list report: one line of characters per syllable, entries joined
//!   by [`ENTRY_SEPARATOR`];
//! - digit report: `[d[` header, one `  consonant -> chars` line per
//!   consonant, `]]` footer; non-digits as `[[c]]`;
//! - digit string: a bare digit per single-reading character, `[..]` around
//!   the digits of a heteronym, `[]` for an unknown character;
//! - consonant table: `d = [c1 c2]` for each digit.

use std::fmt::Write;

use crate::codec::{DigitCodec, DigitGroup, DIGIT_COUNT};

/// Separator placed between pinyin report entries.
pub const ENTRY_SEPARATOR: &str = "\n--------\n";

/// Split a space- and/or comma-separated syllable list.
///
/// Repeated separators (`"ni, hao"`, `"ni,,hao"`) never yield empty tokens,
/// so a report has exactly one entry per written syllable.
pub fn split_syllables(list: &str) -> Vec<&str> {
    list.split(' ')
        .flat_map(|piece| piece.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Join per-syllable character strings into the pinyin list report.
pub fn render_pinyin_report<S: AsRef<str>>(entries: &[S]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i != 0 {
            out.push_str(ENTRY_SEPARATOR);
        }
        out.push_str(entry.as_ref());
        out.push('\n');
    }
    out
}

/// Render decoded digit groups.
pub fn render_digit_report(groups: &[DigitGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        match group {
            DigitGroup::Digit { digit, rows } => {
                let _ = write!(out, "[{}[", digit);
                if !rows.is_empty() {
                    out.push('\n');
                }
                for row in rows {
                    let _ = writeln!(out, "  {} -> {}", row.consonant, row.characters);
                }
                out.push_str("]]\n\n");
            }
            DigitGroup::Literal(c) => {
                let _ = write!(out, "[[{}]]\n\n", c);
            }
        }
    }
    out
}

/// Render per-character digit lists as a compact digit string.
pub fn render_digit_string(per_char: &[Vec<u8>]) -> String {
    let mut out = String::new();
    for digits in per_char {
        match digits.as_slice() {
            [] => out.push_str("[]"),
            [d] => {
                let _ = write!(out, "{}", d);
            }
            many => {
                out.push('[');
                for d in many {
                    let _ = write!(out, "{}", d);
                }
                out.push(']');
            }
        }
    }
    out
}

/// Dump the digit → consonants index for all ten digits.
pub fn render_consonant_table(codec: &DigitCodec) -> String {
    let mut out = String::new();
    for digit in 0..DIGIT_COUNT {
        let consonants = codec.digit_to_consonants(digit);
        let _ = writeln!(out, "{} = [{}]", digit, consonants.join(" "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ConsonantRow;

    #[test]
    fn syllable_list_splits_on_space_and_comma() {
        assert_eq!(split_syllables("ni hao"), vec!["ni", "hao"]);
        assert_eq!(split_syllables("ni,hao zhong"), vec!["ni", "hao", "zhong"]);
        assert_eq!(split_syllables("ni, hao,,  ma"), vec!["ni", "hao", "ma"]);
        assert!(split_syllables("  , ").is_empty());
    }

    #[test]
    fn comma_space_separator_gives_one_entry_per_syllable() {
        let tokens = split_syllables("ni, hao");
        assert_eq!(tokens, vec!["ni", "hao"]);
        assert_eq!(render_pinyin_report(&tokens), "ni\n--------\nhao\n");
    }

    #[test]
    fn pinyin_report_layout() {
        assert_eq!(render_pinyin_report(&["你尼", "好"]), "你尼\n\n--------\n好\n");
        assert_eq!(render_pinyin_report(&["国"]), "国\n");
        assert_eq!(render_pinyin_report::<&str>(&[]), "");
    }

    #[test]
    fn digit_report_layout() {
        let groups = vec![
            DigitGroup::Digit {
                digit: 1,
                rows: vec![
                    ConsonantRow {
                        consonant: "r",
                        characters: "日人".into(),
                    },
                    ConsonantRow {
                        consonant: "y",
                        characters: String::new(),
                    },
                ],
            },
            DigitGroup::Literal('-'),
        ];
        assert_eq!(
            render_digit_report(&groups),
            "[1[\n  r -> 日人\n  y -> \n]]\n\n[[-]]\n\n"
        );
    }

    #[test]
    fn digit_without_rows_has_no_leading_newline() {
        let groups = vec![DigitGroup::Digit {
            digit: 7,
            rows: vec![],
        }];
        assert_eq!(render_digit_report(&groups), "[7[]]\n\n");
    }

    #[test]
    fn digit_string_markers() {
        let per_char = vec![vec![0], vec![0, 3], vec![], vec![9]];
        assert_eq!(render_digit_string(&per_char), "0[03][]9");
    }
}
