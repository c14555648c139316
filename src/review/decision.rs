#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    diff::DiffSegment,
    review::{segment_state::SegmentState, verdict::Verdict},
};

/// One entry of the decision log: which segment was resolved, the verdict the
/// reviewer gave, and the state the segment moved to as a result.
///
/// The entry carries a snapshot of the segment itself, so a log can be
/// displayed or replayed without the session it came from. Undo only ever
/// removes the newest entry, which is what makes the log an exact history.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    verdict: Verdict,
    outcome: SegmentState,
    segment: DiffSegment,
}

impl Decision {
    #[must_use]
    pub fn new(verdict: Verdict, outcome: SegmentState, segment: DiffSegment) -> Self {
        Self {
            verdict,
            outcome,
            segment,
        }
    }

    /// Index of the resolved segment within its comparison.
    #[must_use]
    pub const fn segment_index(&self) -> usize { self.segment.index() }

    #[must_use]
    pub const fn verdict(&self) -> Verdict { self.verdict }

    /// The state the verdict moved the segment to. Recorded at resolve time,
    /// so a later mode switch does not reinterpret old entries.
    #[must_use]
    pub const fn outcome(&self) -> SegmentState { self.outcome }

    /// Snapshot of the segment as it was resolved.
    #[must_use]
    pub const fn segment(&self) -> &DiffSegment { &self.segment }
}
