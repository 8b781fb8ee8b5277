//! Optimal recognition point: which letter of a unit stays anchored on screen.

use serde::Serialize;

use crate::utils::strings;

/// A display unit cut around its focal character. All three parts borrow from
/// the unit, so `before + focal + after` is always the unit itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FocalSplit<'a> {
    pub before: &'a str,
    pub focal: &'a str,
    pub after: &'a str,
}

/// 1-based position of the focal character among the word characters of a
/// unit with `n` of them.
pub fn target_rank(n: usize) -> usize {
    match n {
        0..=2 => 1,
        3..=4 => 2,
        5..=6 => 3,
        7..=9 => 4,
        10..=13 => 5,
        _ => 6,
    }
}

pub fn split(unit: &str) -> FocalSplit<'_> {
    match focal_byte_index(unit) {
        Some(idx) => split_at_char(unit, idx),
        None => {
            // punctuation or symbols only
            let mid = unit.chars().count() / 2;
            split_at_char(unit, strings::char_to_byte(unit, mid))
        }
    }
}

fn focal_byte_index(unit: &str) -> Option<usize> {
    let rank = target_rank(strings::word_char_count(unit));
    let mut first = None;
    let mut seen = 0;

    for (idx, c) in unit.char_indices() {
        if !strings::is_word_char(c) {
            continue;
        }
        first.get_or_insert(idx);
        seen += 1;
        if seen == rank {
            return Some(idx);
        }
    }

    first
}

fn split_at_char(unit: &str, idx: usize) -> FocalSplit<'_> {
    let (before, rest) = unit.split_at(idx);
    let width = rest.chars().next().map_or(0, char::len_utf8);
    let (focal, after) = rest.split_at(width);
    FocalSplit {
        before,
        focal,
        after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(unit: &str) -> (&str, &str, &str) {
        let s = split(unit);
        (s.before, s.focal, s.after)
    }

    #[test]
    fn rank_table() {
        let ranks: Vec<usize> = [1, 2, 3, 5, 7, 10, 14].into_iter().map(target_rank).collect();
        assert_eq!(ranks, [1, 1, 2, 3, 4, 5, 6]);
        assert_eq!(target_rank(4), 2);
        assert_eq!(target_rank(9), 4);
        assert_eq!(target_rank(13), 5);
        assert_eq!(target_rank(40), 6);
    }

    #[test]
    fn splits_plain_words() {
        assert_eq!(parts("rabbit"), ("ra", "b", "bit"));
        assert_eq!(parts("a"), ("", "a", ""));
        assert_eq!(parts("reading"), ("rea", "d", "ing"));
    }

    #[test]
    fn punctuation_does_not_count_toward_rank() {
        assert_eq!(parts("Hi,"), ("", "H", "i,"));
        assert_eq!(parts("\"Hello\""), ("\"He", "l", "lo\""));
        assert_eq!(parts("(wait)..."), ("(w", "a", "it)..."));
    }

    #[test]
    fn symbol_only_units_use_the_midpoint() {
        assert_eq!(parts("..."), (".", ".", "."));
        assert_eq!(parts("—"), ("", "—", ""));
        assert_eq!(parts("?!"), ("?", "!", ""));
        assert_eq!(parts(""), ("", "", ""));
    }

    #[test]
    fn keeps_case_and_accents() {
        assert_eq!(parts("Éclair"), ("Éc", "l", "air"));
        assert_eq!(parts("naïve"), ("na", "ï", "ve"));
    }

    #[test]
    fn parts_reassemble_the_unit() {
        for unit in ["rabbit", "Hi,", "...", "¿Qué?", "über-", "日本語", "x_y", "", "„Zoë“!"] {
            let s = split(unit);
            assert_eq!(format!("{}{}{}", s.before, s.focal, s.after), unit);
        }
    }
}
