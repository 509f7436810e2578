//! Session state: the published catalog and the loader contracts.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use vitrine_catalog::Catalog;
use vitrine_manifest::{Collection, Item, Manifest, User};

use crate::error::{ExternalManifestError, LoadResult};
use crate::fetch::{FetchConfig, ManifestFetcher};

/// The catalog currently published for lookups, tagged with the third-party
/// URL it was built from (`None` when first-party only).
#[derive(Debug, Clone)]
struct CurrentCatalog {
    manifest_url: Option<String>,
    catalog: Arc<Catalog>,
}

/// Owns the merged hierarchy for one navigation session.
///
/// The session publishes immutable snapshots: a rebuild constructs the next
/// catalog completely before swapping it in under the write lock, so readers
/// never observe a partially merged hierarchy. Concurrent rebuilds are not
/// coordinated; the last one to complete wins, which is acceptable for a
/// manual, user-triggered action. A failed third-party load publishes
/// nothing: the previous catalog stays up and the failure is reported, not
/// cached, so the next request with the same URL retries.
pub struct CatalogSession {
    first_party: Manifest,
    fetcher: ManifestFetcher,
    current: RwLock<CurrentCatalog>,
}

impl CatalogSession {
    /// Creates a session over the bundled first-party manifest.
    #[must_use]
    pub fn new(first_party: Manifest) -> Self {
        Self::with_config(first_party, FetchConfig::default())
    }

    /// Creates a session with explicit fetch configuration.
    #[must_use]
    pub fn with_config(first_party: Manifest, config: FetchConfig) -> Self {
        let catalog = Arc::new(Catalog::from_manifest(first_party.clone()));
        Self {
            first_party,
            fetcher: ManifestFetcher::new(config),
            current: RwLock::new(CurrentCatalog {
                manifest_url: None,
                catalog,
            }),
        }
    }

    /// The third-party URL the published catalog was built from, if any.
    pub async fn current_manifest_url(&self) -> Option<String> {
        self.current.read().await.manifest_url.clone()
    }

    /// Returns the catalog for `manifest_url`, rebuilding and republishing
    /// when it differs from the URL the published catalog was built from.
    pub async fn catalog(
        &self,
        manifest_url: Option<&str>,
    ) -> Result<Arc<Catalog>, ExternalManifestError> {
        // Scoped so the read guard is gone before the rebuild and swap.
        {
            let current = self.current.read().await;
            if current.manifest_url.as_deref() == manifest_url {
                debug!(url = ?manifest_url, "serving published catalog");
                return Ok(Arc::clone(&current.catalog));
            }
        }

        let catalog = match manifest_url {
            None => Arc::new(Catalog::from_manifest(self.first_party.clone())),
            Some(url) => {
                let overlay = match self.fetcher.fetch(url).await {
                    Ok(overlay) => overlay,
                    Err(error) => {
                        warn!(url, %error, "third-party manifest load failed, keeping published catalog");
                        return Err(error);
                    }
                };
                Arc::new(Catalog::build(self.first_party.clone(), Some(overlay)))
            }
        };

        let mut current = self.current.write().await;
        current.manifest_url = manifest_url.map(str::to_owned);
        current.catalog = Arc::clone(&catalog);
        info!(
            url = ?manifest_url,
            users = catalog.users().len(),
            "published rebuilt catalog"
        );
        Ok(catalog)
    }

    /// All users, in display order.
    pub async fn load_users(&self, manifest_url: Option<&str>) -> LoadResult<Vec<User>> {
        let catalog = self.catalog(manifest_url).await?;
        Ok(catalog.users().to_vec())
    }

    /// One user by id.
    pub async fn load_user(&self, manifest_url: Option<&str>, user_id: &str) -> LoadResult<User> {
        let catalog = self.catalog(manifest_url).await?;
        let user = catalog.find_user(user_id)?;
        Ok(user.clone())
    }

    /// A collection and its owning user.
    pub async fn load_collection(
        &self,
        manifest_url: Option<&str>,
        user_id: &str,
        collection_id: &str,
    ) -> LoadResult<(Collection, User)> {
        let catalog = self.catalog(manifest_url).await?;
        let (user, collection) = catalog.find_collection(user_id, collection_id)?;
        Ok((collection.clone(), user.clone()))
    }

    /// An item, its collection, and its owning user.
    pub async fn load_item(
        &self,
        manifest_url: Option<&str>,
        user_id: &str,
        collection_id: &str,
        item_id: &str,
    ) -> LoadResult<(Item, Collection, User)> {
        let catalog = self.catalog(manifest_url).await?;
        let (user, collection, item) = catalog.find_item(user_id, collection_id, item_id)?;
        Ok((item.clone(), collection.clone(), user.clone()))
    }
}
