use std::collections::BTreeSet;

use crate::error::AppResult;
use crate::store::KvStore;

/// Per-user favorite menu items, persisted through an injected [`KvStore`].
pub struct Favorites<S: KvStore> {
    store: S,
}

impl<S: KvStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn key(user_id: &str) -> String {
        format!("favorites:{user_id}")
    }

    fn load(&self, user_id: &str) -> AppResult<BTreeSet<String>> {
        match self.store.get(&Self::key(user_id))? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeSet::new()),
        }
    }

    fn save(&self, user_id: &str, favorites: &BTreeSet<String>) -> AppResult<()> {
        if favorites.is_empty() {
            // Keep the store tidy instead of writing empty sets.
            self.store.remove(&Self::key(user_id))
        } else {
            self.store
                .set(&Self::key(user_id), &serde_json::to_string(favorites)?)
        }
    }

    pub fn add(&self, user_id: &str, item_id: &str) -> AppResult<()> {
        let mut favorites = self.load(user_id)?;
        if favorites.insert(item_id.to_string()) {
            self.save(user_id, &favorites)?;
        }
        Ok(())
    }

    pub fn remove(&self, user_id: &str, item_id: &str) -> AppResult<()> {
        let mut favorites = self.load(user_id)?;
        if favorites.remove(item_id) {
            self.save(user_id, &favorites)?;
        }
        Ok(())
    }

    /// Flip an item's favorite state; returns whether it is now a favorite.
    pub fn toggle(&self, user_id: &str, item_id: &str) -> AppResult<bool> {
        let mut favorites = self.load(user_id)?;
        let now_favorite = favorites.insert(item_id.to_string());
        if !now_favorite {
            favorites.remove(item_id);
        }
        self.save(user_id, &favorites)?;
        Ok(now_favorite)
    }

    pub fn contains(&self, user_id: &str, item_id: &str) -> AppResult<bool> {
        Ok(self.load(user_id)?.contains(item_id))
    }

    pub fn list(&self, user_id: &str) -> AppResult<Vec<String>> {
        Ok(self.load(user_id)?.into_iter().collect())
    }
}
