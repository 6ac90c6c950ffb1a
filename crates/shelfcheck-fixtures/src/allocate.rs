//! Resource addressing and next-free-ID allocation

use crate::error::{FixtureError, FixtureResult};
use serde_json::Value;
use shelfcheck_client::ApiClient;

/// The two collections exposed by the system under test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Authors,
    Books,
}

impl Resource {
    /// Collection endpoint, e.g. `/Authors`
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Authors => "/Authors",
            Self::Books => "/Books",
        }
    }

    /// Item endpoint for an ID (or any raw path segment, for the
    /// invalid-ID tests), e.g. `/Books/7` or `/Books/abc`
    pub fn item_path(self, id: impl std::fmt::Display) -> String {
        format!("{}/{id}", self.collection_path())
    }

    /// Lowercase name for messages and log fields
    pub const fn name(self) -> &'static str {
        match self {
            Self::Authors => "authors",
            Self::Books => "books",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the next unused integer ID for a collection
///
/// Fetches the live collection and returns `max(id) + 1`, or 1 when the
/// collection is empty. Non-object elements are ignored; objects with a
/// missing or non-numeric `id` count as 0. The value is only a hint - the
/// collection is not locked between this read and the subsequent create.
///
/// # Errors
/// `FixtureError::Allocation` if the collection fetch does not succeed,
/// `FixtureError::Client` on transport failure.
pub fn next_available_id(client: &ApiClient, resource: Resource) -> FixtureResult<i64> {
    let response = client.get(resource.collection_path())?;
    if !response.is_success() {
        return Err(FixtureError::Allocation {
            resource: resource.name(),
            status: response.status,
        });
    }

    let body = response.json().unwrap_or(Value::Null);
    let max_id = body.as_array().and_then(|items| {
        items
            .iter()
            .filter_map(Value::as_object)
            .map(|object| object.get("id").and_then(Value::as_i64).unwrap_or(0))
            .max()
    });

    Ok(max_id.map_or(1, |max| max.saturating_add(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_built_from_the_resource() {
        assert_eq!(Resource::Authors.collection_path(), "/Authors");
        assert_eq!(Resource::Books.item_path(7), "/Books/7");
        assert_eq!(Resource::Books.item_path("abc"), "/Books/abc");
        assert_eq!(Resource::Authors.to_string(), "authors");
    }
}
