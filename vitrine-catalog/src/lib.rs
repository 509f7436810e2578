//! Catalog navigation for Vitrine.
//!
//! Everything between a parsed manifest and a rendered page:
//! - [`Catalog`]: the merged, immutable hierarchy with first-match lookups
//! - [`CatalogPath`] and [`Resolved`]: typed navigation paths
//! - [`neighbors`]: previous/next within a collection
//! - [`select_window`] and [`has_more`]: page-aligned display windows
//!
//! All of it is pure: no I/O, no interior mutability. The loader crate owns
//! fetching and publishing; this crate only answers questions about a
//! hierarchy it is handed.

mod adjacency;
mod catalog;
mod error;
mod path;
mod window;

pub use adjacency::{Neighbors, neighbors};
pub use catalog::{Catalog, Resolved};
pub use error::{NotFound, Segment};
pub use path::{CatalogPath, PathParseError};
pub use window::{has_more, select_window};
