use similar::{ChangeTag, TextDiff};

mod diff_granularity;
mod diff_segment;
mod segment_kind;

pub use diff_granularity::DiffGranularity;
pub use diff_segment::DiffSegment;
pub use segment_kind::SegmentKind;

/// Compare two texts and return the comparison as a flat list of segments in
/// document order. Adjacent spans with the same fate are coalesced, so the
/// result alternates between kinds: an edit that swaps one word for another
/// shows up as one `Removed` segment directly followed by one `Added` segment.
///
/// Concatenating every segment that isn't `Added` reproduces `original`;
/// concatenating every segment that isn't `Removed` reproduces `modified`.
///
/// ```
/// use redline_text::{DiffGranularity, SegmentKind, diff_segments};
///
/// let segments = diff_segments("The cat sat", "The dog sat here", DiffGranularity::Word);
///
/// let changes: Vec<_> = segments
///     .iter()
///     .filter(|segment| segment.is_change())
///     .map(|segment| (segment.text(), segment.kind()))
///     .collect();
/// assert_eq!(changes, vec![
///     ("cat", SegmentKind::Removed),
///     ("dog", SegmentKind::Added),
///     (" here", SegmentKind::Added),
/// ]);
/// ```
#[must_use]
pub fn diff_segments(
    original: &str,
    modified: &str,
    granularity: DiffGranularity,
) -> Vec<DiffSegment> {
    let diff = match granularity {
        DiffGranularity::Word => TextDiff::from_words(original, modified),
        DiffGranularity::Character => TextDiff::from_chars(original, modified),
        DiffGranularity::Line => TextDiff::from_lines(original, modified),
    };

    let mut segments: Vec<DiffSegment> = Vec::new();
    let mut run: Option<(SegmentKind, String)> = None;

    for change in diff.iter_all_changes() {
        let kind = match change.tag() {
            ChangeTag::Equal => SegmentKind::Unchanged,
            ChangeTag::Insert => SegmentKind::Added,
            ChangeTag::Delete => SegmentKind::Removed,
        };

        match &mut run {
            Some((run_kind, text)) if *run_kind == kind => text.push_str(change.value()),
            _ => {
                if let Some((finished_kind, text)) = run.take() {
                    segments.push(DiffSegment::new(segments.len(), text, finished_kind));
                }
                run = Some((kind, change.value().to_owned()));
            }
        }
    }

    if let Some((finished_kind, text)) = run {
        segments.push(DiffSegment::new(segments.len(), text, finished_kind));
    }

    segments
}
