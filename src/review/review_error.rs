use thiserror::Error;

/// Error type for verdicts and undos that the session cannot accept
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewError {
    /// The given index does not name a segment of this comparison
    #[error("Unknown segment index {index}: the comparison only has {segment_count} segments")]
    UnknownSegment {
        /// The index the caller asked for
        index: usize,
        /// How many segments the comparison has
        segment_count: usize,
    },

    /// The segment exists but is identical in both texts
    #[error("Segment {index} is unchanged between the two texts and cannot be reviewed")]
    UnchangedSegment {
        /// The index the caller asked for
        index: usize,
    },

    /// The segment already carries a verdict; a second one would corrupt the
    /// decision log
    #[error("Segment {index} has already been resolved; undo that decision first")]
    AlreadyResolved {
        /// The index the caller asked for
        index: usize,
    },

    /// `undo` was called with an empty decision log
    #[error("Nothing to undo: no decisions have been made yet")]
    NothingToUndo,
}
