use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::store::{
    ComparisonStore,
    comparison_record::{ComparisonDraft, ComparisonRecord, OwnerId, RecordId},
    store_error::StoreError,
};

/// HashMap-backed `ComparisonStore` for tests and for embedding the crate
/// without an external gateway. Records are scoped per owner the same way a
/// row-level-security backend would scope them.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<OwnerId, Vec<ComparisonRecord>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Number of records across all owners.
    #[must_use]
    pub fn len(&self) -> usize { self.records.values().map(Vec::len).sum() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.records.values().all(Vec::is_empty) }

    fn record_mut(
        &mut self,
        owner: &str,
        id: RecordId,
    ) -> Result<&mut ComparisonRecord, StoreError> {
        self.records
            .get_mut(owner)
            .and_then(|bucket| bucket.iter_mut().find(|record| record.id == id))
            .ok_or(StoreError::UnknownRecord { id })
    }
}

impl ComparisonStore for MemoryStore {
    fn save(&mut self, owner: &str, draft: ComparisonDraft) -> Result<RecordId, StoreError> {
        let record = ComparisonRecord {
            id: Uuid::new_v4(),
            title: draft.title,
            original_text: draft.original_text,
            modified_text: draft.modified_text,
            final_text: draft.final_text,
            created_at: Utc::now(),
        };

        let id = record.id;
        self.records.entry(owner.to_owned()).or_default().push(record);
        Ok(id)
    }

    fn list(&self, owner: &str) -> Result<Vec<ComparisonRecord>, StoreError> {
        let mut records: Vec<ComparisonRecord> = self
            .records
            .get(owner)
            .into_iter()
            .flat_map(|bucket| bucket.iter().rev().cloned())
            .collect();

        // The sort is stable and the input is already in reverse insertion
        // order, so saves sharing a timestamp still list the newest first.
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    fn rename(&mut self, owner: &str, id: RecordId, new_title: &str) -> Result<(), StoreError> {
        let record = self.record_mut(owner, id)?;

        let new_title = new_title.trim();
        if !new_title.is_empty() {
            record.title = new_title.to_owned();
        }
        Ok(())
    }

    fn delete(&mut self, owner: &str, id: RecordId) -> Result<(), StoreError> {
        let bucket = self
            .records
            .get_mut(owner)
            .ok_or(StoreError::UnknownRecord { id })?;
        let position = bucket
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::UnknownRecord { id })?;

        bucket.remove(position);
        Ok(())
    }
}
