mod comparison_record;
mod memory_store;
mod store_error;

pub use comparison_record::{ComparisonDraft, ComparisonRecord, DEFAULT_TITLE, OwnerId, RecordId};
pub use memory_store::MemoryStore;
pub use store_error::StoreError;

/// "Am I signed in, and as whom." Implemented over whatever auth session the
/// host application carries; this crate never signs anyone in or out.
pub trait Identity {
    /// The id of the signed-in user, or `None` when signed out.
    fn current_user(&self) -> Option<OwnerId>;
}

/// Owner-scoped CRUD over saved comparisons.
///
/// Gateways surface failures through `StoreError` without retrying; a
/// failed call must leave the stored records as they were.
pub trait ComparisonStore {
    /// Persist `draft` under `owner` and return the id of the new record.
    ///
    /// # Errors
    ///
    /// `StoreError::Backend` when the gateway cannot complete the write.
    fn save(&mut self, owner: &str, draft: ComparisonDraft) -> Result<RecordId, StoreError>;

    /// The owner's saved comparisons, newest first.
    ///
    /// # Errors
    ///
    /// `StoreError::Backend` when the gateway cannot complete the read.
    fn list(&self, owner: &str) -> Result<Vec<ComparisonRecord>, StoreError>;

    /// Give the record a new title. A blank `new_title` leaves the current
    /// one in place; otherwise it is stored trimmed.
    ///
    /// # Errors
    ///
    /// `StoreError::UnknownRecord` when the owner has no record with this
    /// id, `StoreError::Backend` when the gateway cannot complete the
    /// write.
    fn rename(&mut self, owner: &str, id: RecordId, new_title: &str) -> Result<(), StoreError>;

    /// Remove the record.
    ///
    /// # Errors
    ///
    /// `StoreError::UnknownRecord` when the owner has no record with this
    /// id, `StoreError::Backend` when the gateway cannot complete the
    /// write.
    fn delete(&mut self, owner: &str, id: RecordId) -> Result<(), StoreError>;
}

/// Save `draft` on behalf of whoever `identity` says is signed in.
///
/// This is the guarded entry point: it refuses to save without a session and
/// without both source texts, before the gateway is involved at all.
///
/// ```
/// use redline_text::{ComparisonDraft, ComparisonStore, Identity, MemoryStore, OwnerId};
/// use redline_text::{compare, save_comparison};
///
/// struct Session;
/// impl Identity for Session {
///     fn current_user(&self) -> Option<OwnerId> { Some("alice".to_owned()) }
/// }
///
/// let mut store = MemoryStore::new();
/// let session = compare("The cat sat", "The dog sat here");
/// let draft = ComparisonDraft::from_session(&session, Some("Cats and dogs"));
///
/// let id = save_comparison(&mut store, &Session, draft)?;
/// assert_eq!(store.list("alice")?[0].id, id);
/// # Ok::<(), redline_text::StoreError>(())
/// ```
///
/// # Errors
///
/// - `StoreError::SignedOut` when nobody is signed in.
/// - `StoreError::MissingSourceText` when either source text is empty.
/// - Whatever the store itself reports.
pub fn save_comparison(
    store: &mut impl ComparisonStore,
    identity: &impl Identity,
    draft: ComparisonDraft,
) -> Result<RecordId, StoreError> {
    let owner = identity.current_user().ok_or(StoreError::SignedOut)?;

    if draft.original_text.is_empty() || draft.modified_text.is_empty() {
        return Err(StoreError::MissingSourceText);
    }

    store.save(&owner, draft)
}
