//! Manifest document model for Vitrine.
//!
//! Defines the three-level catalog hierarchy that every Vitrine subsystem
//! consumes:
//! - [`User`]: a top-level entry, unique by id within one document
//! - [`Collection`]: an ordered group of items belonging to a user
//! - [`Item`]: one described, displayable 3D asset
//! - [`Manifest`]: an ordered document of users, with splice-style merge
//!
//! Untrusted documents enter through [`Manifest::validate`], which checks
//! the shape field by field before anything downstream sees typed records.
//! Ordering is meaningful everywhere (it is display order and drives
//! adjacency), so nothing here sorts or deduplicates.

mod collection;
mod item;
mod manifest;
mod user;
mod validate;

pub use collection::Collection;
pub use item::Item;
pub use manifest::{Manifest, ManifestError};
pub use user::User;
pub use validate::{ValidationError, ValidationErrorKind};
