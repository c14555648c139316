#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the review has decided about a segment so far. Every segment starts
/// out `Pending`; a verdict moves it to `Kept` or `Dropped`, and undoing that
/// decision moves it back. The merged document is a pure function of these
/// states, so replaying a decision log always lands on the same text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentState {
    #[default]
    Pending,
    /// The segment's text appears in the merged document.
    Kept,
    /// The segment's text is left out of the merged document.
    Dropped,
}

impl SegmentState {
    #[must_use]
    pub const fn is_resolved(self) -> bool { matches!(self, Self::Kept | Self::Dropped) }
}
