#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::diff::segment_kind::SegmentKind;

/// One contiguous span of a comparison between an original and a modified
/// text. Segments are produced in document order; `index` is the segment's
/// stable position within that order and is how verdicts refer to it.
///
/// A segment never changes after the comparison has been computed. The
/// review layer tracks what should happen to it separately, so a segment can
/// be shared freely between the pending queue, the decision log, and the
/// merged document.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DiffSegment {
    index: usize,
    text: String,
    kind: SegmentKind,
}

impl DiffSegment {
    #[must_use]
    pub fn new(index: usize, text: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            index,
            text: text.into(),
            kind,
        }
    }

    /// Position of the segment in the comparison it came from.
    #[must_use]
    pub const fn index(&self) -> usize { self.index }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub const fn kind(&self) -> SegmentKind { self.kind }

    /// Shorthand for `kind().is_change()`.
    #[must_use]
    pub const fn is_change(&self) -> bool { self.kind.is_change() }
}
