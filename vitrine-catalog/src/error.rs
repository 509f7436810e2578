use thiserror::Error;

/// The hierarchy level a lookup failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    User,
    Collection,
    Item,
}

/// A path segment that did not resolve.
///
/// Absence is a normal navigation outcome (a mistyped or stale link), so it
/// is a value rather than a panic. Each variant carries the identifiers that
/// did resolve, which is what an empty-state page needs to say something
/// useful.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("no user with id `{id}`")]
    User { id: String },

    #[error("user `{user}` has no collection with id `{id}`")]
    Collection { user: String, id: String },

    #[error("collection `{user}/{collection}` has no item with id `{id}`")]
    Item {
        user: String,
        collection: String,
        id: String,
    },
}

impl NotFound {
    /// Which level of the path failed to resolve.
    #[must_use]
    pub fn segment(&self) -> Segment {
        match self {
            NotFound::User { .. } => Segment::User,
            NotFound::Collection { .. } => Segment::Collection,
            NotFound::Item { .. } => Segment::Item,
        }
    }

    /// The identifier that had no match.
    #[must_use]
    pub fn missing_id(&self) -> &str {
        match self {
            NotFound::User { id } | NotFound::Collection { id, .. } | NotFound::Item { id, .. } => {
                id
            }
        }
    }
}
