#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

use crate::{
    diff::SegmentKind,
    review::{segment_state::SegmentState, verdict::Verdict},
};

/// Governs how a `Verdict` is read when a segment is resolved.
///
/// In `Intuitive` mode the verdict applies to the *change*: approving an
/// addition keeps the new text, and approving a deletion carries the deletion
/// out, which drops the old text. Rejecting does the opposite, so rejecting a
/// deletion restores the original wording.
///
/// In `Literal` mode the verdict applies to the *text* of the segment
/// regardless of what the change did: approve always keeps it, reject always
/// drops it.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionMode {
    Intuitive,
    Literal,
}

impl ResolutionMode {
    /// The state a segment of the given kind ends up in when the given
    /// verdict is applied under this mode.
    ///
    /// ```
    /// use redline_text::{ResolutionMode, SegmentKind, SegmentState, Verdict};
    ///
    /// // Approving a deletion in intuitive mode carries the deletion out.
    /// assert_eq!(
    ///     ResolutionMode::Intuitive.outcome(SegmentKind::Removed, Verdict::Approve),
    ///     SegmentState::Dropped,
    /// );
    ///
    /// // In literal mode the tick always means "keep this text".
    /// assert_eq!(
    ///     ResolutionMode::Literal.outcome(SegmentKind::Removed, Verdict::Approve),
    ///     SegmentState::Kept,
    /// );
    /// ```
    #[must_use]
    pub fn outcome(self, kind: SegmentKind, verdict: Verdict) -> SegmentState {
        match self {
            Self::Intuitive => match (kind, verdict) {
                (SegmentKind::Removed, Verdict::Approve) => SegmentState::Dropped,
                (SegmentKind::Removed, Verdict::Reject) => SegmentState::Kept,
                (_, Verdict::Approve) => SegmentState::Kept,
                (_, Verdict::Reject) => SegmentState::Dropped,
            },
            Self::Literal => match verdict {
                Verdict::Approve => SegmentState::Kept,
                Verdict::Reject => SegmentState::Dropped,
            },
        }
    }
}

impl Default for ResolutionMode {
    fn default() -> Self { Self::Intuitive }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(ResolutionMode::Intuitive, SegmentKind::Added, Verdict::Approve, SegmentState::Kept; "intuitive approved addition")]
    #[test_case(ResolutionMode::Intuitive, SegmentKind::Added, Verdict::Reject, SegmentState::Dropped; "intuitive rejected addition")]
    #[test_case(ResolutionMode::Intuitive, SegmentKind::Removed, Verdict::Approve, SegmentState::Dropped; "intuitive approved deletion")]
    #[test_case(ResolutionMode::Intuitive, SegmentKind::Removed, Verdict::Reject, SegmentState::Kept; "intuitive rejected deletion")]
    #[test_case(ResolutionMode::Literal, SegmentKind::Added, Verdict::Approve, SegmentState::Kept; "literal approved addition")]
    #[test_case(ResolutionMode::Literal, SegmentKind::Added, Verdict::Reject, SegmentState::Dropped; "literal rejected addition")]
    #[test_case(ResolutionMode::Literal, SegmentKind::Removed, Verdict::Approve, SegmentState::Kept; "literal approved deletion")]
    #[test_case(ResolutionMode::Literal, SegmentKind::Removed, Verdict::Reject, SegmentState::Dropped; "literal rejected deletion")]
    fn test_outcome(mode: ResolutionMode, kind: SegmentKind, verdict: Verdict, expected: SegmentState) {
        assert_eq!(mode.outcome(kind, verdict), expected);
    }

    #[test]
    fn test_modes_only_disagree_on_removed_segments() {
        for verdict in [Verdict::Approve, Verdict::Reject] {
            assert_eq!(
                ResolutionMode::Intuitive.outcome(SegmentKind::Added, verdict),
                ResolutionMode::Literal.outcome(SegmentKind::Added, verdict),
            );
            assert_ne!(
                ResolutionMode::Intuitive.outcome(SegmentKind::Removed, verdict),
                ResolutionMode::Literal.outcome(SegmentKind::Removed, verdict),
            );
        }
    }

    #[test]
    fn test_default_mode_is_intuitive() {
        assert_eq!(ResolutionMode::default(), ResolutionMode::Intuitive);
    }
}
