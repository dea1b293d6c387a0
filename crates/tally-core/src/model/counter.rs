use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::resource::{check_body_name, Resource};

/// A named counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub name: String,
    pub counter: i64,
}

impl Counter {
    pub fn new(name: impl Into<String>, counter: i64) -> Self {
        Self {
            name: name.into(),
            counter,
        }
    }
}

/// Mutations accepted by a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterChange {
    /// Replace the value.
    Set(i64),
    /// Add one.
    Increment,
}

impl Resource for Counter {
    type Change = CounterChange;
    const KIND: &'static str = "counter";

    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&mut self, change: CounterChange) -> Result<()> {
        match change {
            CounterChange::Set(v) => self.counter = v,
            CounterChange::Increment => {
                self.counter = self.counter.checked_add(1).ok_or_else(|| {
                    TallyError::BadRequest(format!("counter '{}' would overflow", self.name))
                })?;
            }
        }
        Ok(())
    }
}

/// Body accepted by `POST`/`PUT /counters/{name}`. Both fields are optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub counter: Option<i64>,
}

impl CounterRequest {
    /// Build the counter to insert for `name`. Missing value starts at 0.
    pub fn into_counter(self, name: &str) -> Result<Counter> {
        check_body_name(name, self.name.as_deref())?;
        Ok(Counter::new(name, self.counter.unwrap_or(0)))
    }

    /// A body with a value sets it; an empty one increments.
    pub fn into_change(self, name: &str) -> Result<CounterChange> {
        check_body_name(name, self.name.as_deref())?;
        Ok(match self.counter {
            Some(v) => CounterChange::Set(v),
            None => CounterChange::Increment,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn increment_and_set() {
        let mut c = Counter::new("hits", 0);
        c.apply(CounterChange::Increment).unwrap();
        c.apply(CounterChange::Increment).unwrap();
        assert_eq!(c.counter, 2);
        c.apply(CounterChange::Set(-7)).unwrap();
        assert_eq!(c.counter, -7);
    }

    #[test]
    fn overflow_leaves_value_untouched() {
        let mut c = Counter::new("max", i64::MAX);
        let err = c.apply(CounterChange::Increment).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(c.counter, i64::MAX);
    }

    #[test]
    fn request_defaults() {
        let c = CounterRequest::default().into_counter("foo").unwrap();
        assert_eq!(c, Counter::new("foo", 0));
        let ch = CounterRequest::default().into_change("foo").unwrap();
        assert_eq!(ch, CounterChange::Increment);
    }
}
