#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tuning knobs for the repeated-words report.
///
/// The defaults mirror what the comparison view ships with: words shorter
/// than four characters are ignored (articles and prepositions repeat all the
/// time without being a style problem), and a word has to occur more than
/// twice before it is reported.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepetitionSettings {
    min_word_length: usize,
    repetition_threshold: usize,
}

impl RepetitionSettings {
    #[must_use]
    pub const fn new(min_word_length: usize, repetition_threshold: usize) -> Self {
        Self {
            min_word_length,
            repetition_threshold,
        }
    }

    /// Words with fewer characters than this are not counted at all.
    #[must_use]
    pub const fn min_word_length(&self) -> usize { self.min_word_length }

    /// A word is only reported when it occurs strictly more often than this.
    #[must_use]
    pub const fn repetition_threshold(&self) -> usize { self.repetition_threshold }
}

impl Default for RepetitionSettings {
    fn default() -> Self { Self::new(4, 2) }
}
