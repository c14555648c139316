#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

/// The unit at which two texts are compared. `Word` keeps whitespace runs
/// attached to the neighbouring words and is what the review surface uses by
/// default; `Character` gives the finest segments, `Line` the coarsest.
#[cfg_attr(feature = "wasm", wasm_bindgen)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffGranularity {
    Word,
    Character,
    Line,
}

impl Default for DiffGranularity {
    fn default() -> Self { Self::Word }
}
