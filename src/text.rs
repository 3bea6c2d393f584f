// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Small text helpers shared by the analysis and synthesis stages

/// Lowercase whitespace-delimited terms of a query, in order, duplicates kept
pub fn query_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Truncate to at most `max_chars` characters, appending "..." when cut
pub fn truncate_with_marker(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace
///
/// The whitespace run after the terminator is consumed; the terminator stays
/// with its sentence. Text without terminators comes back as one sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..idx]);
            let mut end = idx + c.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    sentences.push(&text[start..]);

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_terms() {
        assert_eq!(query_terms("  Rust  Async "), vec!["rust", "async"]);
        assert!(query_terms("   ").is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("climate"), "Climate");
        assert_eq!(capitalize("mIXED"), "Mixed");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_truncate_with_marker() {
        assert_eq!(truncate_with_marker("short", 10), "short");
        assert_eq!(truncate_with_marker("abcdef", 3), "abc...");
        assert_eq!(truncate_with_marker("héllo", 2), "hé...");
        assert_eq!(truncate_with_marker("exact", 5), "exact");
    }

    #[test]
    fn test_split_sentences() {
        let text = "First one. Second one!  Third?\nFourth";
        assert_eq!(
            split_sentences(text),
            vec!["First one.", "Second one!", "Third?", "Fourth"]
        );
    }

    #[test]
    fn test_split_sentences_keeps_inline_punctuation() {
        assert_eq!(split_sentences("Version 1.5 is out."), vec!["Version 1.5 is out."]);
    }

    #[test]
    fn test_split_sentences_trailing_whitespace() {
        assert_eq!(split_sentences("Done. "), vec!["Done.", ""]);
        assert_eq!(split_sentences(""), vec![""]);
    }
}
