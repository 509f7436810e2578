use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a navigation path string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathParseError {
    #[error("navigation path is empty")]
    Empty,

    #[error("navigation path has an empty segment")]
    EmptySegment,

    #[error("navigation path has {depth} segments, at most 3 are addressable")]
    TooDeep { depth: usize },
}

/// A typed navigation path: user, user/collection, or user/collection/item.
///
/// Construction (from parts, or by parsing `max/dolls/rebecca`) guarantees
/// an item id never appears without a collection id. Segments are opaque,
/// case-sensitive identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogPath {
    user: String,
    collection: Option<String>,
    item: Option<String>,
}

impl CatalogPath {
    /// Path to a user page.
    #[must_use]
    pub fn user(user_id: impl Into<String>) -> Self {
        Self {
            user: user_id.into(),
            collection: None,
            item: None,
        }
    }

    /// Path to a collection page.
    #[must_use]
    pub fn collection(user_id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            user: user_id.into(),
            collection: Some(collection_id.into()),
            item: None,
        }
    }

    /// Path to a single item page.
    #[must_use]
    pub fn item(
        user_id: impl Into<String>,
        collection_id: impl Into<String>,
        item_id: impl Into<String>,
    ) -> Self {
        Self {
            user: user_id.into(),
            collection: Some(collection_id.into()),
            item: Some(item_id.into()),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn collection_id(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        self.item.as_deref()
    }
}

impl FromStr for CatalogPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }
        let segments: Vec<&str> = s.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(PathParseError::EmptySegment);
        }
        match segments.as_slice() {
            [user] => Ok(Self::user(*user)),
            [user, collection] => Ok(Self::collection(*user, *collection)),
            [user, collection, item] => Ok(Self::item(*user, *collection, *item)),
            _ => Err(PathParseError::TooDeep {
                depth: segments.len(),
            }),
        }
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user)?;
        if let Some(collection) = &self.collection {
            write!(f, "/{collection}")?;
        }
        if let Some(item) = &self.item {
            write!(f, "/{item}")?;
        }
        Ok(())
    }
}
