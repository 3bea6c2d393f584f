// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Word-list sentiment classifier

use super::types::Sentiment;

/// One side must outnumber the other by more than this factor
const DOMINANCE_RATIO: f64 = 1.5;

/// Classify `text` as positive, negative or neutral
///
/// Counts space-padded occurrences (`" word "`) of each listed word in the
/// lowercased text, so a word at the very start or end of the text, or next
/// to punctuation, is not counted.
pub fn classify_sentiment(
    text: &str,
    positive_words: &[String],
    negative_words: &[String],
) -> Sentiment {
    let lower = text.to_lowercase();
    let positive = count_padded(&lower, positive_words) as f64;
    let negative = count_padded(&lower, negative_words) as f64;

    if positive > negative * DOMINANCE_RATIO {
        Sentiment::Positive
    } else if negative > positive * DOMINANCE_RATIO {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

fn count_padded(text: &str, words: &[String]) -> usize {
    words
        .iter()
        .map(|word| text.matches(&format!(" {} ", word)).count())
        .sum()
}
