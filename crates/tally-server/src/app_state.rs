//! Shared application state.
//!
//! The composition root: stores and metrics are constructed here once at
//! startup and handed to every handler through axum's `State`.

use std::sync::Arc;

use tally_core::error::Result;
use tally_core::{Counter, Pet};

use crate::config::TallyConfig;
use crate::obs::HttpMetrics;
use crate::store::{MemoryStore, ResourceStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: TallyConfig,
    counters: Arc<dyn ResourceStore<Counter>>,
    pets: Arc<dyn ResourceStore<Pet>>,
    metrics: HttpMetrics,
}

impl AppState {
    /// Build state backed by in-memory stores.
    pub fn new(cfg: TallyConfig) -> Result<Self> {
        Self::with_stores(
            cfg,
            Arc::new(MemoryStore::<Counter>::new()),
            Arc::new(MemoryStore::<Pet>::new()),
        )
    }

    /// Build state around caller-provided stores.
    pub fn with_stores(
        cfg: TallyConfig,
        counters: Arc<dyn ResourceStore<Counter>>,
        pets: Arc<dyn ResourceStore<Pet>>,
    ) -> Result<Self> {
        cfg.validate()?;
        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                counters,
                pets,
                metrics: HttpMetrics::default(),
            }),
        })
    }

    pub fn cfg(&self) -> &TallyConfig {
        &self.inner.cfg
    }

    pub fn counters(&self) -> &dyn ResourceStore<Counter> {
        self.inner.counters.as_ref()
    }

    pub fn pets(&self) -> &dyn ResourceStore<Pet> {
        self.inner.pets.as_ref()
    }

    pub fn metrics(&self) -> &HttpMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    /// Render `/metrics`, refreshing store gauges first.
    pub fn render_metrics(&self) -> String {
        let m = self.metrics();
        m.resources.set(&[("kind", "counter")], self.counters().len() as i64);
        m.resources.set(&[("kind", "pet")], self.pets().len() as i64);
        m.render()
    }
}
