use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    diff::{DiffSegment, SegmentKind},
    review::{
        decision::Decision, resolution_mode::ResolutionMode, review_error::ReviewError,
        segment_state::SegmentState, verdict::Verdict,
    },
};

/// The engine behind a comparison view. A session owns the segments of one
/// comparison together with everything the reviewer has said about them so
/// far: a state per segment, the decision log, and the resolution mode.
///
/// The merged document is derived from the segment states on every read
/// rather than stored, so verdicts and undos can never leave a stale copy of
/// the text behind. Undoing a decision simply returns its segment to
/// `Pending`; because segments keep their position in the comparison, the
/// restored text reappears exactly where it was.
///
/// ```
/// use redline_text::compare;
///
/// let mut session = compare("The cat sat", "The dog sat here");
/// assert_eq!(session.merged_text(), "The dog sat here");
///
/// session.approve(2)?; // settle on "dog"
/// session.reject(4)?; // drop " here"
/// assert_eq!(session.merged_text(), "The dog sat");
/// # Ok::<(), redline_text::ReviewError>(())
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSession {
    segments: Vec<DiffSegment>,
    states: Vec<SegmentState>,
    decisions: Vec<Decision>,
    mode: ResolutionMode,
    edited_final: Option<String>,
}

impl ReviewSession {
    /// Open a session over segments produced by `diff_segments` or assembled
    /// by hand. Every segment starts out `Pending` and the decision log
    /// starts empty.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the segments' indices don't match their
    /// positions.
    #[must_use]
    pub fn new(segments: Vec<DiffSegment>) -> Self {
        debug_assert_contiguous(&segments);

        let states = vec![SegmentState::Pending; segments.len()];
        Self {
            segments,
            states,
            decisions: Vec::new(),
            mode: ResolutionMode::default(),
            edited_final: None,
        }
    }

    /// Replace the comparison with a new one. All states return to `Pending`,
    /// the decision log is emptied, and a hand-edited final text is
    /// discarded. The resolution mode is configuration rather than review
    /// state, so it carries over.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the segments' indices don't match their
    /// positions.
    pub fn reset(&mut self, segments: Vec<DiffSegment>) {
        debug_assert_contiguous(&segments);

        self.states = vec![SegmentState::Pending; segments.len()];
        self.segments = segments;
        self.decisions.clear();
        self.edited_final = None;
    }

    #[must_use]
    pub fn segments(&self) -> &[DiffSegment] { &self.segments }

    /// The state the review has assigned to the segment at `index`, or `None`
    /// for an index outside the comparison.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<SegmentState> { self.states.get(index).copied() }

    /// The decision log, oldest first.
    #[must_use]
    pub fn decisions(&self) -> &[Decision] { &self.decisions }

    #[must_use]
    pub const fn mode(&self) -> ResolutionMode { self.mode }

    /// Change how verdicts are read from here on. Decisions already in the
    /// log are not re-evaluated; their outcomes were fixed when they were
    /// made.
    pub fn set_mode(&mut self, mode: ResolutionMode) { self.mode = mode; }

    /// The changed segments that still await a verdict, in document order.
    pub fn pending_changes(&self) -> impl Iterator<Item = &DiffSegment> {
        self.segments
            .iter()
            .zip(&self.states)
            .filter(|&(segment, &state)| segment.is_change() && state == SegmentState::Pending)
            .map(|(segment, _)| segment)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize { self.pending_changes().count() }

    /// Apply a verdict to the segment at `index`. The segment's new state is
    /// given by the current `ResolutionMode` and the decision is appended
    /// to the log.
    ///
    /// # Errors
    ///
    /// - `ReviewError::UnknownSegment` if `index` is out of range.
    /// - `ReviewError::UnchangedSegment` if the segment is identical in
    ///   both texts.
    /// - `ReviewError::AlreadyResolved` if the segment already carries a
    ///   verdict.
    ///
    /// The session is left untouched in every error case, so the log can
    /// never gain a second entry for a segment.
    pub fn resolve(&mut self, index: usize, verdict: Verdict) -> Result<(), ReviewError> {
        let segment = self
            .segments
            .get(index)
            .ok_or(ReviewError::UnknownSegment {
                index,
                segment_count: self.segments.len(),
            })?;

        if !segment.is_change() {
            return Err(ReviewError::UnchangedSegment { index });
        }

        if self.states[index].is_resolved() {
            return Err(ReviewError::AlreadyResolved { index });
        }

        self.apply_verdict(index, verdict);
        Ok(())
    }

    /// Shorthand for `resolve` with `Verdict::Approve`.
    ///
    /// # Errors
    ///
    /// Same as `resolve`.
    pub fn approve(&mut self, index: usize) -> Result<(), ReviewError> {
        self.resolve(index, Verdict::Approve)
    }

    /// Shorthand for `resolve` with `Verdict::Reject`.
    ///
    /// # Errors
    ///
    /// Same as `resolve`.
    pub fn reject(&mut self, index: usize) -> Result<(), ReviewError> {
        self.resolve(index, Verdict::Reject)
    }

    /// Approve the first pending change and return its index. With nothing
    /// left to review this is a no-op and returns `None`.
    pub fn approve_next(&mut self) -> Option<usize> { self.resolve_next(Verdict::Approve) }

    /// Reject the first pending change and return its index. With nothing
    /// left to review this is a no-op and returns `None`.
    pub fn reject_next(&mut self) -> Option<usize> { self.resolve_next(Verdict::Reject) }

    fn resolve_next(&mut self, verdict: Verdict) -> Option<usize> {
        let index = self.pending_changes().next().map(DiffSegment::index)?;
        self.apply_verdict(index, verdict);
        Some(index)
    }

    fn apply_verdict(&mut self, index: usize, verdict: Verdict) {
        let segment = &self.segments[index];
        let outcome = self.mode.outcome(segment.kind(), verdict);

        self.states[index] = outcome;
        self.decisions
            .push(Decision::new(verdict, outcome, segment.clone()));

        debug_assert_eq!(self.segments.len(), self.states.len());
    }

    /// Take back the newest decision and return it. The segment it resolved
    /// goes back to `Pending`, which also restores its place in the pending
    /// queue; nothing else about the session changes.
    ///
    /// # Errors
    ///
    /// Returns `ReviewError::NothingToUndo` when the log is empty.
    pub fn undo(&mut self) -> Result<Decision, ReviewError> {
        let decision = self.decisions.pop().ok_or(ReviewError::NothingToUndo)?;

        let index = decision.segment_index();
        debug_assert!(index < self.states.len());
        self.states[index] = SegmentState::Pending;

        Ok(decision)
    }

    /// The merged document implied by the current states. Kept segments are
    /// always part of it, dropped segments never are, and pending segments
    /// contribute their text unless they are deletions that nobody has
    /// confirmed yet. A fresh session therefore reads as the modified text.
    #[must_use]
    pub fn merged_text(&self) -> String {
        self.segments
            .iter()
            .zip(&self.states)
            .filter(|&(segment, &state)| is_visible(segment, state))
            .map(|(segment, _)| segment.text())
            .collect()
    }

    /// The text the reviewer walks away with: normally `merged_text`, or the
    /// hand-edited version once `edit_final_text` has been used.
    #[must_use]
    pub fn final_text(&self) -> Cow<'_, str> {
        match &self.edited_final {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Owned(self.merged_text()),
        }
    }

    /// Replace the final text with a hand-written version. The session keeps
    /// accepting verdicts and undos afterwards, but they stop rewriting the
    /// final text; the reviewer's own wording wins until the next `reset`.
    pub fn edit_final_text(&mut self, text: impl Into<String>) {
        self.edited_final = Some(text.into());
    }

    /// Whether `final_text` has been decoupled from the merged document by a
    /// hand edit.
    #[must_use]
    pub const fn is_final_text_edited(&self) -> bool { self.edited_final.is_some() }

    /// The original text, reconstructed losslessly from the segments.
    #[must_use]
    pub fn original_text(&self) -> String { self.text_without(SegmentKind::Added) }

    /// The modified text, reconstructed losslessly from the segments.
    #[must_use]
    pub fn modified_text(&self) -> String { self.text_without(SegmentKind::Removed) }

    fn text_without(&self, excluded: SegmentKind) -> String {
        self.segments
            .iter()
            .filter(|segment| segment.kind() != excluded)
            .map(DiffSegment::text)
            .collect()
    }
}

/// Pending deletions stay invisible until someone confirms them; everything
/// else that is undecided still reads as part of the document.
const fn is_visible(segment: &DiffSegment, state: SegmentState) -> bool {
    match state {
        SegmentState::Kept => true,
        SegmentState::Dropped => false,
        SegmentState::Pending => !matches!(segment.kind(), SegmentKind::Removed),
    }
}

fn debug_assert_contiguous(segments: &[DiffSegment]) {
    debug_assert!(
        segments
            .iter()
            .enumerate()
            .all(|(position, segment)| segment.index() == position),
        "segment indices must match their positions in the comparison"
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::compare;

    const ORIGINAL: &str = "Good morning! The quick brown fox jumps over the lazy dog.";
    const MODIFIED: &str = "Good evening! The quick red fox leaps over the dog.";

    #[test]
    fn test_fresh_session_reads_as_the_modified_text() {
        let session = compare(ORIGINAL, MODIFIED);

        assert_eq!(session.merged_text(), MODIFIED);
        assert_eq!(session.final_text(), MODIFIED);
        assert!(session.decisions().is_empty());
    }

    #[test]
    fn test_segments_reconstruct_both_inputs() {
        let session = compare(ORIGINAL, MODIFIED);

        assert_eq!(session.original_text(), ORIGINAL);
        assert_eq!(session.modified_text(), MODIFIED);
    }

    #[test]
    fn test_approving_everything_lands_on_the_modified_text() {
        let mut session = compare(ORIGINAL, MODIFIED);

        while session.approve_next().is_some() {}

        assert_eq!(session.pending_count(), 0);
        assert_eq!(session.merged_text(), MODIFIED);
    }

    #[test]
    fn test_rejecting_everything_lands_on_the_original_text() {
        let mut session = compare(ORIGINAL, MODIFIED);

        while session.reject_next().is_some() {}

        assert_eq!(session.pending_count(), 0);
        assert_eq!(session.merged_text(), ORIGINAL);
    }

    #[test]
    fn test_literal_mode_keeps_whatever_is_ticked() {
        let mut session = compare("The cat sat", "The dog sat here");
        session.set_mode(ResolutionMode::Literal);

        while session.approve_next().is_some() {}
        assert_eq!(session.merged_text(), "The catdog sat here");

        let mut session = compare("The cat sat", "The dog sat here");
        session.set_mode(ResolutionMode::Literal);

        while session.reject_next().is_some() {}
        assert_eq!(session.merged_text(), "The  sat");
    }

    #[test]
    fn test_scenario_keep_the_dog_lose_the_here() {
        let mut session = compare("The cat sat", "The dog sat here");

        session.approve(2).unwrap();
        session.reject(4).unwrap();

        insta::assert_snapshot!(session.merged_text(), @"The dog sat");
        assert_eq!(session.pending_count(), 1); // "cat" is still undecided
    }

    #[test]
    fn test_partial_review_walkthrough() {
        let mut session = compare(ORIGINAL, MODIFIED);

        session.approve(1).unwrap(); // carry out the deletion of "morning!"
        session.approve(2).unwrap(); // keep "evening!"
        session.reject(7).unwrap(); // veto the deletion of "jumps"
        session.reject(8).unwrap(); // drop "leaps"
        session.approve(10).unwrap(); // carry out the deletion of "lazy "

        insta::assert_snapshot!(
            session.merged_text(),
            @"Good evening! The quick red fox jumps over the dog."
        );
        assert_eq!(session.pending_count(), 2); // "brown" and "red"
        assert_eq!(session.decisions().len(), 5);
    }

    #[test]
    fn test_undo_restores_the_previous_state_exactly() {
        let mut session = compare(ORIGINAL, MODIFIED);
        let fresh = session.clone();

        session.approve_next();
        session.reject_next();
        session.approve(10).unwrap();

        while session.undo().is_ok() {}

        assert_eq!(session, fresh);
        assert_eq!(session.undo(), Err(ReviewError::NothingToUndo));
    }

    #[test]
    fn test_undo_pops_strictly_newest_first() {
        let mut session = compare("The cat sat", "The dog sat here");

        session.approve(2).unwrap();
        session.reject(4).unwrap();

        let undone = session.undo().unwrap();
        assert_eq!(undone.segment_index(), 4);
        assert_eq!(undone.verdict(), Verdict::Reject);
        assert_eq!(undone.segment().text(), " here");
        assert_eq!(session.state(4), Some(SegmentState::Pending));

        let undone = session.undo().unwrap();
        assert_eq!(undone.segment_index(), 2);
    }

    #[test]
    fn test_double_resolve_is_rejected_and_logged_once() {
        let mut session = compare("The cat sat", "The dog sat here");

        session.approve(2).unwrap();
        assert_eq!(
            session.reject(2),
            Err(ReviewError::AlreadyResolved { index: 2 })
        );
        assert_eq!(
            session.approve(2),
            Err(ReviewError::AlreadyResolved { index: 2 })
        );

        assert_eq!(session.decisions().len(), 1);
        assert_eq!(session.state(2), Some(SegmentState::Kept));
    }

    #[test]
    fn test_resolving_unknown_or_unchanged_segments_fails() {
        let mut session = compare("The cat sat", "The dog sat here");

        assert_eq!(
            session.approve(99),
            Err(ReviewError::UnknownSegment {
                index: 99,
                segment_count: 5
            })
        );
        assert_eq!(
            session.approve(0),
            Err(ReviewError::UnchangedSegment { index: 0 })
        );
        assert!(session.decisions().is_empty());
    }

    #[test]
    fn test_next_walks_the_pending_queue_in_document_order() {
        let mut session = compare(ORIGINAL, MODIFIED);

        assert_eq!(session.approve_next(), Some(1));
        assert_eq!(session.approve_next(), Some(2));
        assert_eq!(session.reject_next(), Some(4));

        while session.approve_next().is_some() {}
        assert_eq!(session.approve_next(), None);
        assert_eq!(session.reject_next(), None);
    }

    #[test]
    fn test_mode_switch_is_not_retroactive() {
        let mut session = compare("The cat sat", "The dog sat here");

        session.approve(1).unwrap(); // intuitive: deletion carried out
        assert_eq!(session.state(1), Some(SegmentState::Dropped));

        session.set_mode(ResolutionMode::Literal);
        assert_eq!(session.state(1), Some(SegmentState::Dropped));

        session.undo().unwrap();
        session.approve(1).unwrap(); // literal: the tick now keeps the text
        assert_eq!(session.state(1), Some(SegmentState::Kept));
    }

    #[test]
    fn test_decisions_record_their_outcome() {
        let mut session = compare("The cat sat", "The dog sat here");

        session.approve(1).unwrap();
        session.set_mode(ResolutionMode::Literal);
        session.approve_next();

        let log = session.decisions();
        assert_eq!(log[0].outcome(), SegmentState::Dropped);
        assert_eq!(log[1].outcome(), SegmentState::Kept);
    }

    #[test]
    fn test_edited_final_text_decouples_from_the_review() {
        let mut session = compare("The cat sat", "The dog sat here");
        assert!(!session.is_final_text_edited());

        session.edit_final_text("My own closing words.");
        assert!(session.is_final_text_edited());
        assert_eq!(session.final_text(), "My own closing words.");

        session.approve(2).unwrap();
        session.undo().unwrap();
        assert_eq!(session.final_text(), "My own closing words.");
        assert_eq!(session.merged_text(), "The dog sat here");

        session.reset(crate::diff_segments(
            "The cat sat",
            "The dog sat here",
            crate::DiffGranularity::Word,
        ));
        assert!(!session.is_final_text_edited());
        assert_eq!(session.final_text(), "The dog sat here");
    }

    #[test]
    fn test_reset_clears_the_review_but_keeps_the_mode() {
        let mut session = compare("The cat sat", "The dog sat here");
        session.set_mode(ResolutionMode::Literal);
        session.approve_next();

        session.reset(crate::diff_segments(
            "to be",
            "not to be",
            crate::DiffGranularity::Word,
        ));

        assert!(session.decisions().is_empty());
        assert_eq!(session.mode(), ResolutionMode::Literal);
        assert_eq!(session.merged_text(), "not to be");
    }

    #[test]
    fn test_empty_comparison_has_nothing_to_review() {
        let mut session = ReviewSession::new(Vec::new());

        assert_eq!(session.pending_count(), 0);
        assert_eq!(session.merged_text(), "");
        assert_eq!(session.approve_next(), None);
        assert_eq!(session.undo(), Err(ReviewError::NothingToUndo));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_session_survives_a_serialization_round_trip() {
        let mut session = compare(ORIGINAL, MODIFIED);
        session.approve_next();
        session.reject_next();

        let serialized = serde_yaml::to_string(&session).unwrap();
        let deserialized: ReviewSession = serde_yaml::from_str(&serialized).unwrap();

        assert_eq!(deserialized, session);
    }
}
