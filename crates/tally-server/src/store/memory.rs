use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use tally_core::error::Result;
use tally_core::resource::Resource;

use super::ResourceStore;

/// In-process store backed by `DashMap`.
///
/// Create goes through the entry API and update mutates under the shard's
/// write guard, so both are atomic per name.
pub struct MemoryStore<R: Resource> {
    items: DashMap<String, R>,
}

impl<R: Resource> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceStore<R> for MemoryStore<R> {
    async fn create(&self, resource: R) -> Result<R> {
        match self.items.entry(resource.name().to_string()) {
            Entry::Occupied(e) => Err(R::already_exists(e.key())),
            Entry::Vacant(e) => {
                e.insert(resource.clone());
                tracing::debug!(kind = R::KIND, name = resource.name(), "created");
                Ok(resource)
            }
        }
    }

    async fn read(&self, name: &str) -> Result<R> {
        self.items
            .get(name)
            .map(|r| r.value().clone())
            .ok_or_else(|| R::not_found(name))
    }

    async fn update(&self, name: &str, change: R::Change) -> Result<R> {
        let mut entry = self.items.get_mut(name).ok_or_else(|| R::not_found(name))?;
        entry.value_mut().apply(change)?;
        tracing::debug!(kind = R::KIND, name, "updated");
        Ok(entry.value().clone())
    }

    async fn delete(&self, name: &str) -> Result<bool> {
        let removed = self.items.remove(name).is_some();
        tracing::debug!(kind = R::KIND, name, removed, "deleted");
        Ok(removed)
    }

    async fn list(&self) -> Result<Vec<R>> {
        let mut all: Vec<R> = self.items.iter().map(|r| r.value().clone()).collect();
        all.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(all)
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
