use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{User, ValidationError};

/// Errors from reading a manifest document out of a file or string.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// An ordered catalog document. On the wire this is a top-level JSON array
/// of users, which `transparent` preserves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    pub users: Vec<User>,
}

impl Manifest {
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Parses and validates a manifest from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, ManifestError> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::validate(&value)?)
    }

    /// Reads, parses, and validates the bundled manifest at `path`.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// Splices `overlay` in after this document's own users.
    ///
    /// Nothing is deduplicated: a colliding id stays in the document twice,
    /// and first-match lookups make the earlier (this document's) record
    /// shadow the later one. Relative order within each source is kept.
    pub fn merge(&mut self, overlay: Manifest) {
        self.users.extend(overlay.users);
    }

    /// Consuming form of [`merge`](Self::merge) for an optional overlay.
    #[must_use]
    pub fn merged(mut self, overlay: Option<Manifest>) -> Manifest {
        if let Some(overlay) = overlay {
            self.merge(overlay);
        }
        self
    }
}
