use sbom_types::{Component, ComponentDraft, ComponentId, ComponentPatch};

use crate::error::StoreResult;

/// Storage backend for component records.
///
/// Implementations must be thread-safe and make every operation atomic with
/// respect to every other operation on the same store.
pub trait ComponentStore: Send + Sync {
    /// Validate `draft`, allocate the next id, and store the record.
    fn create(&self, draft: ComponentDraft) -> StoreResult<Component>;

    /// Read a record by id.
    ///
    /// Returns `Err(StoreError::NotFound)` if the id is not stored.
    fn get(&self, id: ComponentId) -> StoreResult<Component>;

    /// Snapshot of every stored record, taken at a single point in time.
    ///
    /// Callers must not depend on the order of the returned records.
    fn list(&self) -> StoreResult<Vec<Component>>;

    /// Overwrite the whole record at `id` with `draft`.
    ///
    /// The record keeps `id`. Nothing is inserted when `id` is absent.
    fn replace(&self, id: ComponentId, draft: ComponentDraft) -> StoreResult<Component>;

    /// Merge `patch` into the record at `id` and return the result.
    ///
    /// The merged record is not re-validated.
    fn patch(&self, id: ComponentId, patch: &ComponentPatch) -> StoreResult<Component>;

    /// Remove the record at `id`.
    fn delete(&self, id: ComponentId) -> StoreResult<()>;

    /// Number of stored records.
    fn count(&self) -> StoreResult<usize>;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.count()? == 0)
    }
}
