//! Expose the `redline-text` crate's functionality to WebAssembly.
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{
    Decision, DiffGranularity, DiffSegment, RepetitionSettings, ResolutionMode, ReviewSession,
    SegmentKind, SegmentState, TextMetrics, Verdict, compare, compare_with_granularity,
};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around `crate::diff_segments` for the live preview, where
/// changes are only displayed and never reviewed.
#[wasm_bindgen(js_name = previewSegments)]
#[must_use]
pub fn preview_segments(original: &str, modified: &str) -> Vec<JsDiffSegment> {
    set_panic_hook();

    crate::diff_segments(original, modified, DiffGranularity::Word)
        .into_iter()
        .map(Into::into)
        .collect()
}

/// WASM wrapper around `crate::count_words_and_chars`.
#[wasm_bindgen(js_name = countWordsAndChars)]
#[must_use]
pub fn count_words_and_chars(text: &str) -> JsTextMetrics {
    set_panic_hook();

    JsTextMetrics {
        inner: crate::count_words_and_chars(text),
    }
}

/// WASM wrapper around `crate::repeated_words`. Returns the ranked report
/// as a JSON string of `[word, count]` pairs, most frequent first.
///
/// # Panics
///
/// If serialization to JSON fails which should not happen
#[wasm_bindgen(js_name = repeatedWords)]
#[must_use]
pub fn repeated_words(text: &str, min_word_length: usize, repetition_threshold: usize) -> String {
    set_panic_hook();
    let settings = RepetitionSettings::new(min_word_length, repetition_threshold);
    let report = crate::repeated_words(text, settings);

    serde_json::to_string(&report.ranked()).expect("Failed to serialize repeated words")
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM wrapper around `crate::ReviewSession`, tracking one comparison from the
/// first diff to the reviewed final text.
#[wasm_bindgen(js_name = ReviewSession)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsReviewSession {
    inner: ReviewSession,
}

#[wasm_bindgen(js_class = ReviewSession)]
impl JsReviewSession {
    /// Compare two texts at word granularity and open a review over the
    /// changes.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(original: &str, modified: &str) -> Self {
        set_panic_hook();

        Self {
            inner: compare(original, modified),
        }
    }

    /// Like the constructor, with an explicit granularity.
    #[wasm_bindgen(js_name = withGranularity)]
    #[must_use]
    pub fn with_granularity(original: &str, modified: &str, granularity: DiffGranularity) -> Self {
        set_panic_hook();

        Self {
            inner: compare_with_granularity(original, modified, granularity),
        }
    }

    /// The changed segments that still await a verdict, in document order.
    #[wasm_bindgen(js_name = pendingChanges)]
    #[must_use]
    pub fn pending_changes(&self) -> Vec<JsDiffSegment> {
        self.inner.pending_changes().cloned().map(Into::into).collect()
    }

    #[wasm_bindgen(js_name = pendingCount)]
    #[must_use]
    pub fn pending_count(&self) -> usize { self.inner.pending_count() }

    /// Every segment of the comparison together with its current review
    /// state, as a JSON string of `{index, text, kind, state}` objects.
    ///
    /// # Panics
    ///
    /// If serialization to JSON fails which should not happen
    #[wasm_bindgen(js_name = annotatedSegments)]
    #[must_use]
    pub fn annotated_segments(&self) -> String {
        let annotated: Vec<AnnotatedSegment<'_>> = self
            .inner
            .segments()
            .iter()
            .map(|segment| AnnotatedSegment {
                index: segment.index(),
                text: segment.text(),
                kind: segment.kind(),
                state: self.inner.state(segment.index()).unwrap_or_default(),
            })
            .collect();

        serde_json::to_string(&annotated).expect("Failed to serialize segments")
    }

    /// Approve the change at `index`.
    ///
    /// # Errors
    ///
    /// If the index is outside the comparison, names an unchanged segment, or
    /// names one that is already resolved.
    pub fn approve(&mut self, index: usize) -> Result<(), JsError> {
        self.inner.approve(index)?;
        Ok(())
    }

    /// Reject the change at `index`.
    ///
    /// # Errors
    ///
    /// Same as `approve`.
    pub fn reject(&mut self, index: usize) -> Result<(), JsError> {
        self.inner.reject(index)?;
        Ok(())
    }

    /// Approve the first pending change and return its index, or `undefined`
    /// once nothing is pending.
    #[wasm_bindgen(js_name = approveNext)]
    pub fn approve_next(&mut self) -> Option<usize> { self.inner.approve_next() }

    /// Reject the first pending change and return its index, or `undefined`
    /// once nothing is pending.
    #[wasm_bindgen(js_name = rejectNext)]
    pub fn reject_next(&mut self) -> Option<usize> { self.inner.reject_next() }

    /// Take back the newest decision and return it.
    ///
    /// # Errors
    ///
    /// If no decision has been made yet.
    pub fn undo(&mut self) -> Result<JsDecision, JsError> {
        let decision = self.inner.undo()?;
        Ok(decision.into())
    }

    #[must_use]
    pub fn mode(&self) -> ResolutionMode { self.inner.mode() }

    /// Change how verdicts are read from here on; earlier decisions keep the
    /// outcome they were recorded with.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: ResolutionMode) { self.inner.set_mode(mode); }

    #[wasm_bindgen(js_name = mergedText)]
    #[must_use]
    pub fn merged_text(&self) -> String { self.inner.merged_text() }

    #[wasm_bindgen(js_name = finalText)]
    #[must_use]
    pub fn final_text(&self) -> String { self.inner.final_text().into_owned() }

    /// Replace the final text with a hand-written version, decoupling it from
    /// the review.
    #[wasm_bindgen(js_name = editFinalText)]
    pub fn edit_final_text(&mut self, text: String) { self.inner.edit_final_text(text); }

    #[wasm_bindgen(js_name = isFinalTextEdited)]
    #[must_use]
    pub fn is_final_text_edited(&self) -> bool { self.inner.is_final_text_edited() }

    #[wasm_bindgen(js_name = originalText)]
    #[must_use]
    pub fn original_text(&self) -> String { self.inner.original_text() }

    #[wasm_bindgen(js_name = modifiedText)]
    #[must_use]
    pub fn modified_text(&self) -> String { self.inner.modified_text() }
}

/// One row of `annotated_segments`.
#[derive(Serialize)]
struct AnnotatedSegment<'a> {
    index: usize,
    text: &'a str,
    kind: SegmentKind,
    state: SegmentState,
}

/// Wrapper type to expose `DiffSegment` to JS.
#[wasm_bindgen(js_name = DiffSegment)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDiffSegment {
    inner: DiffSegment,
}

#[wasm_bindgen(js_class = DiffSegment)]
impl JsDiffSegment {
    #[must_use]
    pub fn index(&self) -> usize { self.inner.index() }

    #[must_use]
    pub fn text(&self) -> String { self.inner.text().to_owned() }

    #[must_use]
    pub fn kind(&self) -> SegmentKind { self.inner.kind() }

    #[wasm_bindgen(js_name = isChange)]
    #[must_use]
    pub fn is_change(&self) -> bool { self.inner.is_change() }
}

impl From<DiffSegment> for JsDiffSegment {
    fn from(segment: DiffSegment) -> Self { Self { inner: segment } }
}

/// Wrapper type to expose `Decision` to JS.
#[wasm_bindgen(js_name = Decision)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsDecision {
    inner: Decision,
}

#[wasm_bindgen(js_class = Decision)]
impl JsDecision {
    #[wasm_bindgen(js_name = segmentIndex)]
    #[must_use]
    pub fn segment_index(&self) -> usize { self.inner.segment_index() }

    #[must_use]
    pub fn verdict(&self) -> Verdict { self.inner.verdict() }

    /// Snapshot of the segment as it was resolved.
    #[must_use]
    pub fn segment(&self) -> JsDiffSegment { self.inner.segment().clone().into() }
}

impl From<Decision> for JsDecision {
    fn from(decision: Decision) -> Self { Self { inner: decision } }
}

/// Wrapper type to expose `TextMetrics` to JS.
#[wasm_bindgen(js_name = TextMetrics)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsTextMetrics {
    inner: TextMetrics,
}

#[wasm_bindgen(js_class = TextMetrics)]
impl JsTextMetrics {
    #[must_use]
    pub fn words(&self) -> usize { self.inner.words() }

    #[must_use]
    pub fn chars(&self) -> usize { self.inner.chars() }
}
