use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analysis::repetition_settings::RepetitionSettings;

/// The words of a text that repeat often enough to stand out, with their
/// occurrence counts.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepeatedWords {
    counts: HashMap<String, usize>,
}

impl RepeatedWords {
    #[must_use]
    pub const fn counts(&self) -> &HashMap<String, usize> { &self.counts }

    /// How often `word` occurred, or zero if it wasn't reported. Lookups are
    /// case-insensitive like the counting itself.
    #[must_use]
    pub fn count_of(&self, word: &str) -> usize {
        self.counts.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize { self.counts.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// The reported words ordered for display: most frequent first,
    /// alphabetical within the same count.
    #[must_use]
    pub fn ranked(&self) -> Vec<(String, usize)> {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();

        entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(&right.0)));
        entries
    }
}

/// Count how often each word occurs in `text` and keep the ones that repeat
/// more often than the settings allow. Words are compared case-insensitively
/// and split on whitespace, so punctuation stays attached to its word.
///
/// ```
/// use redline_text::{RepetitionSettings, repeated_words};
///
/// let report = repeated_words("aaa aaa aaa bb bb", RepetitionSettings::new(2, 2));
///
/// assert_eq!(report.count_of("aaa"), 3);
/// assert_eq!(report.count_of("bb"), 0); // twice is still within the threshold
/// ```
#[must_use]
pub fn repeated_words(text: &str, settings: RepetitionSettings) -> RepeatedWords {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in text.to_lowercase().split_whitespace() {
        if word.chars().count() >= settings.min_word_length() {
            *counts.entry(word.to_owned()).or_insert(0) += 1;
        }
    }

    counts.retain(|_, count| *count > settings.repetition_threshold());

    RepeatedWords { counts }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_threshold_must_be_strictly_exceeded() {
        let report = repeated_words("aaa aaa aaa bb bb", RepetitionSettings::new(2, 2));

        assert_eq!(report.len(), 1);
        assert_eq!(report.count_of("aaa"), 3);
        assert_eq!(report.count_of("bb"), 0);
    }

    #[test]
    fn test_short_words_are_ignored() {
        let text = "the the the the word word word";
        let report = repeated_words(text, RepetitionSettings::default());

        assert_eq!(report.count_of("the"), 0); // shorter than the minimum length
        assert_eq!(report.count_of("word"), 3);
    }

    #[test]
    fn test_counting_is_case_insensitive() {
        let report = repeated_words(
            "Tender tender TENDER TeNdEr",
            RepetitionSettings::default(),
        );

        assert_eq!(report.count_of("tender"), 4);
        assert_eq!(report.count_of("Tender"), 4);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        // "word." and "word" are different tokens, exactly like the view
        // renders them.
        let report = repeated_words("word word word word.", RepetitionSettings::new(4, 2));

        assert_eq!(report.count_of("word"), 3);
        assert_eq!(report.count_of("word."), 0);
    }

    #[test]
    fn test_empty_text_reports_nothing() {
        assert!(repeated_words("", RepetitionSettings::default()).is_empty());
    }

    #[test]
    fn test_ranked_orders_by_count_then_alphabetically() {
        let text = "delta delta delta delta echo echo echo alpha alpha alpha";
        let report = repeated_words(text, RepetitionSettings::new(4, 2));

        assert_eq!(
            report.ranked(),
            vec![
                ("delta".to_owned(), 4),
                ("alpha".to_owned(), 3),
                ("echo".to_owned(), 3),
            ]
        );
    }
}
