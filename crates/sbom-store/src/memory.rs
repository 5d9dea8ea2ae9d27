//! In-memory component store.
//!
//! [`InMemoryComponentStore`] keeps every record in a `HashMap` and the next
//! id in the same `RwLock`, so allocation and insertion can never be observed
//! separately. Data is lost when the store is dropped.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use sbom_types::{
    validate, Component, ComponentDraft, ComponentId, ComponentPatch, LicensePolicy,
};

use crate::error::{StoreError, StoreResult};
use crate::traits::ComponentStore;

/// An in-memory implementation of [`ComponentStore`].
pub struct InMemoryComponentStore {
    policy: LicensePolicy,
    inner: RwLock<StoreState>,
}

struct StoreState {
    components: HashMap<ComponentId, Component>,
    next_id: Option<ComponentId>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            components: HashMap::new(),
            next_id: Some(ComponentId::FIRST),
        }
    }
}

impl InMemoryComponentStore {
    /// Create an empty store with the given license policy.
    pub fn new(policy: LicensePolicy) -> Self {
        Self {
            policy,
            inner: RwLock::new(StoreState::default()),
        }
    }

    /// Start allocating at `next` instead of [`ComponentId::FIRST`].
    #[cfg(test)]
    fn starting_at(policy: LicensePolicy, next: ComponentId) -> Self {
        let state = StoreState {
            next_id: Some(next),
            ..StoreState::default()
        };
        Self {
            policy,
            inner: RwLock::new(state),
        }
    }

    pub fn policy(&self) -> LicensePolicy {
        self.policy
    }

    fn read_state(&self) -> StoreResult<RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_state(&self) -> StoreResult<RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryComponentStore {
    fn default() -> Self {
        Self::new(LicensePolicy::default())
    }
}

impl ComponentStore for InMemoryComponentStore {
    fn create(&self, draft: ComponentDraft) -> StoreResult<Component> {
        validate(&draft, self.policy)?;

        let mut state = self.write_state()?;
        let id = state.next_id.ok_or(StoreError::IdSpaceExhausted)?;
        let component = Component::from_draft(id, draft);
        state.components.insert(id, component.clone());
        state.next_id = id.checked_next();
        drop(state);

        tracing::debug!(%id, name = %component.name, "component created");
        Ok(component)
    }

    fn get(&self, id: ComponentId) -> StoreResult<Component> {
        let state = self.read_state()?;
        state
            .components
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> StoreResult<Vec<Component>> {
        let state = self.read_state()?;
        let mut all: Vec<Component> = state.components.values().cloned().collect();
        drop(state);
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    fn replace(&self, id: ComponentId, draft: ComponentDraft) -> StoreResult<Component> {
        validate(&draft, self.policy)?;

        let mut state = self.write_state()?;
        let slot = state
            .components
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = Component::from_draft(id, draft);
        let component = slot.clone();
        drop(state);

        tracing::debug!(%id, "component replaced");
        Ok(component)
    }

    fn patch(&self, id: ComponentId, patch: &ComponentPatch) -> StoreResult<Component> {
        let mut state = self.write_state()?;
        let slot = state
            .components
            .get_mut(&id)
            .ok_or(StoreError::NotFound(id))?;
        patch.apply_to(slot);
        let component = slot.clone();
        drop(state);

        tracing::debug!(%id, "component patched");
        Ok(component)
    }

    fn delete(&self, id: ComponentId) -> StoreResult<()> {
        let mut state = self.write_state()?;
        if state.components.remove(&id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        drop(state);

        tracing::debug!(%id, "component deleted");
        Ok(())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read_state()?.components.len())
    }
}

impl std::fmt::Debug for InMemoryComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.count().ok();
        f.debug_struct("InMemoryComponentStore")
            .field("policy", &self.policy)
            .field("component_count", &count)
            .finish()
    }
}
