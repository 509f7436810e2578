use vitrine_manifest::{Collection, Item, Manifest, User};

use crate::{CatalogPath, NotFound};

/// The merged, ordered hierarchy of users served during one session.
///
/// Built from the first-party manifest plus an optional third-party overlay
/// and immutable afterwards; a reload builds a fresh catalog and swaps it in
/// rather than editing a live one. Lookups scan in order and return the
/// first match, so when an overlay id collides with a first-party id the
/// first-party record wins and the overlay copy stays invisible, even though
/// both remain in the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    users: Vec<User>,
}

impl Catalog {
    /// Wraps an already-merged manifest.
    #[must_use]
    pub fn from_manifest(manifest: Manifest) -> Self {
        Self {
            users: manifest.users,
        }
    }

    /// Splices `overlay` (if any) after `base` and wraps the result.
    #[must_use]
    pub fn build(base: Manifest, overlay: Option<Manifest>) -> Self {
        Self::from_manifest(base.merged(overlay))
    }

    /// All users in display order, shadowed duplicates included.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Looks up a user by id. Ids are case-sensitive.
    pub fn find_user(&self, user_id: &str) -> Result<&User, NotFound> {
        self.users
            .iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| NotFound::User {
                id: user_id.to_owned(),
            })
    }

    /// Looks up a collection within a user, returning the user as well.
    pub fn find_collection(
        &self,
        user_id: &str,
        collection_id: &str,
    ) -> Result<(&User, &Collection), NotFound> {
        let user = self.find_user(user_id)?;
        let collection = user
            .collections
            .iter()
            .find(|collection| collection.id == collection_id)
            .ok_or_else(|| NotFound::Collection {
                user: user_id.to_owned(),
                id: collection_id.to_owned(),
            })?;
        Ok((user, collection))
    }

    /// Looks up an item within a collection, returning the whole chain.
    pub fn find_item(
        &self,
        user_id: &str,
        collection_id: &str,
        item_id: &str,
    ) -> Result<(&User, &Collection, &Item), NotFound> {
        let (user, collection) = self.find_collection(user_id, collection_id)?;
        let item = collection
            .items
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| NotFound::Item {
                user: user_id.to_owned(),
                collection: collection_id.to_owned(),
                id: item_id.to_owned(),
            })?;
        Ok((user, collection, item))
    }

    /// Resolves a typed navigation path to the records it names.
    pub fn resolve(&self, path: &CatalogPath) -> Result<Resolved<'_>, NotFound> {
        match (path.collection_id(), path.item_id()) {
            (None, _) => Ok(Resolved::User(self.find_user(path.user_id())?)),
            (Some(collection_id), None) => {
                let (user, collection) = self.find_collection(path.user_id(), collection_id)?;
                Ok(Resolved::Collection(user, collection))
            }
            (Some(collection_id), Some(item_id)) => {
                let (user, collection, item) =
                    self.find_item(path.user_id(), collection_id, item_id)?;
                Ok(Resolved::Item(user, collection, item))
            }
        }
    }
}

/// What a navigation path landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    User(&'a User),
    Collection(&'a User, &'a Collection),
    Item(&'a User, &'a Collection, &'a Item),
}
