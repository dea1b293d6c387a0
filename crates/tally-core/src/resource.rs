//! Named resources and the name rules every collection shares.

use crate::error::{Result, TallyError};

/// Default upper bound on resource name length.
pub const DEFAULT_MAX_NAME_LEN: usize = 63;

/// A uniquely named entity managed by a collection.
///
/// The name is fixed at creation. All later mutation goes through
/// [`Resource::apply`], which must leave `self` untouched when it fails so a
/// store can apply changes in place under its own lock.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Mutation accepted by this resource (e.g. set, increment, purchase).
    type Change: Send + 'static;

    /// Label used in messages, logs and metrics ("counter", "pet").
    const KIND: &'static str;

    fn name(&self) -> &str;

    /// Apply a change. On error the resource is unchanged.
    fn apply(&mut self, change: Self::Change) -> Result<()>;

    fn not_found(name: &str) -> TallyError {
        TallyError::NotFound(format!("{} '{}' was not found", Self::KIND, name))
    }

    fn already_exists(name: &str) -> TallyError {
        TallyError::Conflict(format!("{} '{}' already exists", Self::KIND, name))
    }
}

/// Check a name taken from a request path.
///
/// Names are 1..=`max_len` characters from the RFC 3986 unreserved set, so
/// they can be echoed into a `Location` header without escaping.
pub fn validate_name(name: &str, max_len: usize) -> Result<()> {
    if name.is_empty() {
        return Err(TallyError::BadRequest("name must not be empty".into()));
    }
    if name.chars().count() > max_len {
        return Err(TallyError::BadRequest(format!(
            "name must be at most {max_len} characters"
        )));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')))
    {
        return Err(TallyError::BadRequest(format!(
            "name contains invalid character {c:?}"
        )));
    }
    Ok(())
}

/// Reject a body whose `name` disagrees with the path.
pub fn check_body_name(path_name: &str, body_name: Option<&str>) -> Result<()> {
    match body_name {
        Some(n) if n != path_name => Err(TallyError::BadRequest(format!(
            "body name '{n}' does not match path name '{path_name}'"
        ))),
        _ => Ok(()),
    }
}
