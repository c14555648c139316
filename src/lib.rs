mod analysis;
mod diff;
mod review;
mod store;

pub use analysis::{
    RepeatedWords, RepetitionSettings, TextMetrics, count_words_and_chars, repeated_words,
};
pub use diff::{DiffGranularity, DiffSegment, SegmentKind, diff_segments};
pub use review::{
    Decision, ResolutionMode, ReviewError, ReviewSession, SegmentState, Verdict, compare,
    compare_with_granularity,
};
pub use store::{
    ComparisonDraft, ComparisonRecord, ComparisonStore, DEFAULT_TITLE, Identity, MemoryStore,
    OwnerId, RecordId, StoreError, save_comparison,
};

#[cfg(feature = "wasm")]
pub mod wasm;
