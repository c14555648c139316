use thiserror::Error;

use crate::store::comparison_record::RecordId;

/// Error type for the persistence operations. Failures are surfaced to the
/// caller and never retried; a failed call leaves the store and any open
/// review untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Saving requires a signed-in user
    #[error("Please sign in to save comparisons")]
    SignedOut,

    /// Both source texts must be present before a comparison can be saved
    #[error("Please enter both the original and the modified text")]
    MissingSourceText,

    /// No record with this id is visible to the calling owner. Another
    /// owner's record looks exactly like a missing one, so ids cannot be
    /// probed across accounts
    #[error("No saved comparison with id {id}")]
    UnknownRecord {
        /// The id the caller asked for
        id: RecordId,
    },

    /// The backing gateway could not complete the call
    #[error("The storage backend failed: {reason}")]
    Backend {
        /// What the gateway reported
        reason: String,
    },
}
