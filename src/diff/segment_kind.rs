#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// Classifies one segment of a comparison: shared by both texts, present only
/// in the modified text, or present only in the original text.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Unchanged,
    Added,
    Removed,
}

impl SegmentKind {
    /// Whether the segment differs between the two texts and therefore awaits
    /// a verdict. `Unchanged` segments are never up for review.
    #[must_use]
    pub const fn is_change(self) -> bool { matches!(self, Self::Added | Self::Removed) }
}
