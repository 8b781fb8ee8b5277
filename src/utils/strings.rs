/// letters, digits and underscore count toward a word's length. punctuation never does
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

pub fn word_char_count(w: &str) -> usize {
    w.chars().filter(|c| is_word_char(*c)).count()
}

pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

pub fn ends_with_terminator(w: &str) -> bool {
    matches!(w.chars().last(), Some('.' | '!' | '?'))
}

pub fn ends_with_clause_break(w: &str) -> bool {
    matches!(w.chars().last(), Some(';' | ':'))
}

pub fn ends_with_comma(w: &str) -> bool {
    w.ends_with(',')
}

/// byte offset of the n-th char, or the string length when n runs past the end
pub fn char_to_byte(w: &str, n: usize) -> usize {
    w.char_indices().nth(n).map(|(i, _)| i).unwrap_or(w.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_word_chars() {
        assert_eq!(word_char_count("Hi,"), 2);
        assert_eq!(word_char_count("\"café!\""), 4);
        assert_eq!(word_char_count("snake_case"), 10);
        assert_eq!(word_char_count("..."), 0);
    }

    #[test]
    fn trailing_classes_look_at_last_char_only() {
        assert!(ends_with_terminator("end."));
        assert!(ends_with_terminator("why?"));
        assert!(!ends_with_terminator("e.g,"));
        assert!(ends_with_clause_break("note:"));
        assert!(ends_with_comma("word,"));
        assert!(!ends_with_comma(",word"));
    }

    #[test]
    fn char_to_byte_handles_multibyte() {
        assert_eq!(char_to_byte("añb", 2), 3);
        assert_eq!(char_to_byte("añb", 9), 4);
    }
}
