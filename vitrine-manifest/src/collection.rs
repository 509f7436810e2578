use serde::Serialize;
use serde_json::{Map, Value};

use crate::Item;

/// An ordered group of items belonging to one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Items in display order. May be empty.
    pub items: Vec<Item>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Collection {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Shorthand for a collection with its items already in place.
    #[must_use]
    pub fn with_items(id: impl Into<String>, name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::new(id, name)
        }
    }

    /// The item shown as the collection's preview, if any.
    #[must_use]
    pub fn first_item(&self) -> Option<&Item> {
        self.items.first()
    }
}
