use chrono::{DateTime, Utc};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::review::ReviewSession;

/// Opaque id of the authenticated user, handed over by the host's auth
/// session.
pub type OwnerId = String;
pub type RecordId = uuid::Uuid;

/// Title given to comparisons saved without one.
pub const DEFAULT_TITLE: &str = "Untitled Comparison";

/// A saved comparison: both source texts plus the final text the reviewer
/// settled on.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub id: RecordId,
    pub title: String,
    pub original_text: String,
    pub modified_text: String,
    pub final_text: String,
    pub created_at: DateTime<Utc>,
}

/// A comparison that has not been saved yet; the store assigns the id and the
/// timestamp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonDraft {
    pub title: String,
    pub original_text: String,
    pub modified_text: String,
    pub final_text: String,
}

impl ComparisonDraft {
    /// Capture the session's source texts and final text as a draft. A
    /// missing or empty `title` falls back to `DEFAULT_TITLE`.
    ///
    /// ```
    /// use redline_text::{ComparisonDraft, DEFAULT_TITLE, compare};
    ///
    /// let session = compare("The cat sat", "The dog sat here");
    /// let draft = ComparisonDraft::from_session(&session, None);
    ///
    /// assert_eq!(draft.title, DEFAULT_TITLE);
    /// assert_eq!(draft.final_text, "The dog sat here");
    /// ```
    #[must_use]
    pub fn from_session(session: &ReviewSession, title: Option<&str>) -> Self {
        let title = match title {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => DEFAULT_TITLE.to_owned(),
        };

        Self {
            title,
            original_text: session.original_text(),
            modified_text: session.modified_text(),
            final_text: session.final_text().into_owned(),
        }
    }
}
