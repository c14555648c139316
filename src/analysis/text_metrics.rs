#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Word and character counts for one text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextMetrics {
    words: usize,
    chars: usize,
}

impl TextMetrics {
    #[must_use]
    pub const fn words(&self) -> usize { self.words }

    /// Characters including whitespace, counted as Unicode scalar values.
    #[must_use]
    pub const fn chars(&self) -> usize { self.chars }
}

/// Count the words and characters of a text. Words are maximal runs of
/// non-whitespace, so surrounding and repeated whitespace never inflates the
/// count; characters are counted as-is, whitespace included.
///
/// ```
/// use redline_text::count_words_and_chars;
///
/// let metrics = count_words_and_chars("  hello   world  ");
/// assert_eq!(metrics.words(), 2);
/// assert_eq!(metrics.chars(), 17);
/// ```
#[must_use]
pub fn count_words_and_chars(text: &str) -> TextMetrics {
    TextMetrics {
        words: text.split_whitespace().count(),
        chars: text.chars().count(),
    }
}
