//! The article the reader is looking at, and the tag/category filter they
//! picked. Persisted under the `Article` key so a restart lands on the same
//! article.

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::models::Article;
use crate::storage::{load_json, save_json, Storage};

/// Storage key the article state is persisted under.
pub const ARTICLE_KEY: &str = "Article";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleState {
    pub article: Article,
    pub selected_tag_id: Option<i64>,
    pub selected_category_id: Option<i64>,
}

pub struct ArticleStore {
    storage: Arc<dyn Storage>,
    state: ArticleState,
}

impl ArticleStore {
    pub fn restore(storage: Arc<dyn Storage>) -> Self {
        let state = match load_json(storage.as_ref(), ARTICLE_KEY) {
            Ok(Some(state)) => state,
            Ok(None) => ArticleState::default(),
            Err(e) => {
                warn!(error = %e, "Failed to restore article state, starting empty");
                ArticleState::default()
            }
        };
        Self { storage, state }
    }

    pub fn article(&self) -> &Article {
        &self.state.article
    }

    pub fn state(&self) -> &ArticleState {
        &self.state
    }

    /// Copy the fields present in `patch` onto the current article.
    /// Fields not mentioned keep their values.
    pub fn set_article(&mut self, patch: &Value) -> Result<()> {
        let Some(fields) = patch.as_object() else {
            bail!("Article update must be a JSON object");
        };

        let mut current = serde_json::to_value(&self.state.article)?;
        if let Some(target) = current.as_object_mut() {
            for (key, value) in fields {
                target.insert(key.clone(), value.clone());
            }
        }
        self.state.article =
            serde_json::from_value(current).context("Article update has invalid fields")?;

        debug!(id = self.state.article.id, "Current article set");
        self.persist();
        Ok(())
    }

    /// Select a tag filter; clears any category filter.
    pub fn set_selected_tag(&mut self, id: Option<i64>) {
        self.state.selected_tag_id = id;
        self.state.selected_category_id = None;
        self.persist();
    }

    /// Select a category filter; clears any tag filter.
    pub fn set_selected_category(&mut self, id: Option<i64>) {
        self.state.selected_category_id = id;
        self.state.selected_tag_id = None;
        self.persist();
    }

    pub fn clear_selection(&mut self) {
        self.state.selected_tag_id = None;
        self.state.selected_category_id = None;
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_json(self.storage.as_ref(), ARTICLE_KEY, &self.state) {
            warn!(error = %e, "Failed to persist article state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde_json::json;

    fn store() -> (ArticleStore, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (ArticleStore::restore(storage.clone()), storage)
    }

    #[test]
    fn test_restore_empty_uses_placeholder() {
        let (store, _) = store();
        assert!(!store.article().is_set());
        assert_eq!(store.state().selected_tag_id, None);
    }

    #[test]
    fn test_set_article_merges_fields() {
        let (mut store, _) = store();
        store
            .set_article(&json!({"id": 3, "title": "First", "views": 10}))
            .unwrap();
        store.set_article(&json!({"likes": 2})).unwrap();

        let article = store.article();
        assert_eq!(article.id, 3);
        assert_eq!(article.title, "First");
        assert_eq!(article.views, 10);
        assert_eq!(article.likes, 2);
    }

    #[test]
    fn test_set_article_rejects_bad_patch() {
        let (mut store, _) = store();
        assert!(store.set_article(&json!([1, 2])).is_err());
        assert!(store.set_article(&json!({"id": "three"})).is_err());
        // A rejected update changes nothing
        assert_eq!(store.article(), &Article::default());
    }

    #[test]
    fn test_selection_is_exclusive() {
        let (mut store, _) = store();

        store.set_selected_tag(Some(4));
        assert_eq!(store.state().selected_tag_id, Some(4));

        store.set_selected_category(Some(9));
        assert_eq!(store.state().selected_category_id, Some(9));
        assert_eq!(store.state().selected_tag_id, None);

        store.set_selected_tag(Some(5));
        assert_eq!(store.state().selected_category_id, None);

        store.clear_selection();
        assert_eq!(store.state().selected_tag_id, None);
        assert_eq!(store.state().selected_category_id, None);
    }

    #[test]
    fn test_state_survives_restore() {
        let (mut store, storage) = store();
        store.set_article(&json!({"id": 8, "title": "Persisted"})).unwrap();
        store.set_selected_category(Some(2));

        let restored = ArticleStore::restore(storage.clone());
        assert_eq!(restored.article().title, "Persisted");
        assert_eq!(restored.state().selected_category_id, Some(2));

        let raw: Value = serde_json::from_str(&storage.get(ARTICLE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(raw["selectedCategoryId"], 2);
        assert_eq!(raw["article"]["id"], 8);
    }
}
