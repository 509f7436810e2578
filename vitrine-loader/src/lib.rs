//! Manifest loading and session state for Vitrine.
//!
//! The boundary between navigation and data. A [`CatalogSession`] starts
//! from the bundled first-party manifest; when a request names a
//! third-party manifest URL, the session fetches it, validates it, splices
//! it in after the first-party users, and publishes the rebuilt catalog
//! atomically. Fetch or validation failures leave the published catalog
//! untouched, so first-party navigation keeps working.
//!
//! # Example
//!
//! ```
//! use vitrine_loader::CatalogSession;
//! use vitrine_manifest::{Manifest, User};
//!
//! let first_party = Manifest::new(vec![User::new("max", "Max")]);
//! let session = CatalogSession::new(first_party);
//! ```

mod error;
mod fetch;
mod session;

pub use error::{ExternalManifestError, LoadError, LoadResult};
pub use fetch::{FetchConfig, ManifestFetcher};
pub use session::CatalogSession;
