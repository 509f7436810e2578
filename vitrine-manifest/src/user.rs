use serde::Serialize;
use serde_json::{Map, Value};

use crate::Collection;

/// A top-level catalog entry: one user and their collections.
///
/// Users are unique by `id` within a single document; a merged document may
/// carry duplicates, and lookups resolve them by taking the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Collections in display order. May be empty.
    pub collections: Vec<Collection>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a user with collections already in place.
    #[must_use]
    pub fn with_collections(
        id: impl Into<String>,
        name: impl Into<String>,
        collections: Vec<Collection>,
    ) -> Self {
        Self {
            collections,
            ..Self::new(id, name)
        }
    }
}
