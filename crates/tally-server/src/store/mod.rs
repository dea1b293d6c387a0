//! Resource stores.
//!
//! A store owns one collection of uniquely named resources. Handlers only see
//! `Arc<dyn ResourceStore<R>>`, so the backing implementation is chosen in the
//! composition root (`AppState::new`).

pub mod memory;

use async_trait::async_trait;

use tally_core::error::Result;
use tally_core::resource::Resource;

pub use memory::MemoryStore;

#[async_trait]
pub trait ResourceStore<R: Resource>: Send + Sync {
    /// Insert a new resource. `Conflict` if the name is taken.
    /// At most one of any number of concurrent creates for a name succeeds.
    async fn create(&self, resource: R) -> Result<R>;

    /// Fetch by name. `NotFound` if absent.
    async fn read(&self, name: &str) -> Result<R>;

    /// Apply a change atomically and return the result. `NotFound` if absent.
    /// A change that fails leaves the stored resource as it was.
    async fn update(&self, name: &str, change: R::Change) -> Result<R>;

    /// Remove by name. Returns whether anything was removed; absence is not an error.
    async fn delete(&self, name: &str) -> Result<bool>;

    /// Every resource, ordered by name.
    async fn list(&self) -> Result<Vec<R>>;

    /// Number of live resources.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
