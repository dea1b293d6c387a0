//! `/counters`: named integer counters.

use tally_core::error::Result;
use tally_core::model::CounterRequest;
use tally_core::{wire, Counter, CounterChange};

use super::Collection;
use crate::app_state::AppState;
use crate::store::ResourceStore;

impl Collection for Counter {
    const PATH: &'static str = "/counters";

    fn store(state: &AppState) -> &dyn ResourceStore<Self> {
        state.counters()
    }

    /// Body is optional; `{"counter": n}` sets the starting value.
    fn decode_create(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<Self> {
        wire::decode_optional::<CounterRequest>(content_type, body)?
            .unwrap_or_default()
            .into_counter(name)
    }

    /// `{"counter": n}` sets the value; no body (or `{}`) adds one.
    fn decode_update(name: &str, content_type: Option<&str>, body: &[u8]) -> Result<CounterChange> {
        wire::decode_optional::<CounterRequest>(content_type, body)?
            .unwrap_or_default()
            .into_change(name)
    }
}
