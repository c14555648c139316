mod repeated_words;
mod repetition_settings;
mod text_metrics;

pub use repeated_words::{RepeatedWords, repeated_words};
pub use repetition_settings::RepetitionSettings;
pub use text_metrics::{TextMetrics, count_words_and_chars};
