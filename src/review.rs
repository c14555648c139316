mod decision;
mod resolution_mode;
mod review_error;
mod review_session;
mod segment_state;
mod verdict;

pub use decision::Decision;
pub use resolution_mode::ResolutionMode;
pub use review_error::ReviewError;
pub use review_session::ReviewSession;
pub use segment_state::SegmentState;
pub use verdict::Verdict;

use crate::diff::{DiffGranularity, diff_segments};

/// Compare two texts at word granularity and open a review session over the
/// result. The session starts with every difference pending, so the merged
/// document initially reads as `modified`; verdicts then move it towards
/// whatever mixture of the two texts the reviewer settles on.
///
/// ```
/// use redline_text::compare;
///
/// let mut session = compare("Merging text is hard!", "Merging text is easy!");
///
/// let pending: Vec<_> = session
///     .pending_changes()
///     .map(|segment| segment.text().to_owned())
///     .collect();
/// assert_eq!(pending, vec!["hard!", "easy!"]);
///
/// session.approve_next(); // confirm that "hard!" goes away
/// session.approve_next(); // keep "easy!"
/// assert_eq!(session.merged_text(), "Merging text is easy!");
/// ```
#[must_use]
pub fn compare(original: &str, modified: &str) -> ReviewSession {
    compare_with_granularity(original, modified, DiffGranularity::Word)
}

/// Same as `compare`, but segmented at the given granularity.
#[must_use]
pub fn compare_with_granularity(
    original: &str,
    modified: &str,
    granularity: DiffGranularity,
) -> ReviewSession {
    ReviewSession::new(diff_segments(original, modified, granularity))
}
