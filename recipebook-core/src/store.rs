//! The recipe store: one durable collection behind load, save, find,
//! create, update, and delete.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};

use crate::error::StorageError;
use crate::id;
use crate::notify::{LogNotifier, Notifier, Severity};
use crate::seed;
use crate::storage::{FileSlot, StorageSlot};
use crate::types::{Recipe, RecipeDraft};

/// Message shown when a write to the slot fails.
const SAVE_FAILED_MESSAGE: &str = "Failed to save recipes. Storage might be full.";

/// The durable recipe collection.
///
/// Constructed once per process with explicit handles to the storage slot
/// and the notification sink. Every mutating operation performs a full
/// load-modify-save cycle, so two processes sharing a slot would get
/// last-writer-wins at whole-collection granularity; the store assumes a
/// single consumer.
pub struct RecipeStore {
    slot: Arc<dyn StorageSlot>,
    notifier: Arc<dyn Notifier>,
}

impl RecipeStore {
    pub fn new(slot: Arc<dyn StorageSlot>, notifier: Arc<dyn Notifier>) -> Self {
        Self { slot, notifier }
    }

    /// Open a store over the default file-backed slot, reporting failures
    /// through the log.
    pub fn open_default() -> Self {
        Self::new(
            Arc::new(FileSlot::new(FileSlot::default_dir())),
            Arc::new(LogNotifier),
        )
    }

    /// Read the entire collection.
    ///
    /// A never-written slot is seeded with the sample recipes, which are
    /// persisted immediately so later reads are stable. A value that fails
    /// to parse is logged and degrades to an empty collection; callers must
    /// treat an empty result as "no data available", not as an error.
    pub fn load_all(&self) -> Vec<Recipe> {
        let raw = match self.slot.read() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to read recipe storage: {e}");
                return Vec::new();
            }
        };

        let Some(raw) = raw else {
            let samples = seed::sample_recipes();
            self.save_all(&samples);
            return samples;
        };

        match serde_json::from_str(&raw) {
            Ok(recipes) => recipes,
            Err(e) => {
                tracing::error!("Failed to parse stored recipes: {e}");
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and replace the slot contents.
    ///
    /// A failed write is logged and reported through the notifier; it is
    /// not visible in the return value, so the caller's in-memory state can
    /// diverge from the slot until the next successful save.
    pub fn save_all(&self, recipes: &[Recipe]) {
        if let Err(e) = self.try_save(recipes) {
            tracing::error!("Failed to save recipes: {e}");
            self.notifier.notify(SAVE_FAILED_MESSAGE, Severity::Error);
        }
    }

    fn try_save(&self, recipes: &[Recipe]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(recipes)?;
        self.slot.write(&raw)
    }

    /// Find a recipe by id.
    ///
    /// O(n) over the loaded collection; at tens to low hundreds of records
    /// no index is worth keeping.
    pub fn find_by_id(&self, id: &str) -> Option<Recipe> {
        self.load_all().into_iter().find(|r| r.id == id)
    }

    /// Create a recipe from a draft, assigning its id and creation instant,
    /// and append it to the end of the collection.
    pub fn create(&self, draft: RecipeDraft) -> Recipe {
        let mut recipes = self.load_all();
        let recipe = draft.into_recipe(id::generate_id(), now_iso());
        recipes.push(recipe.clone());
        self.save_all(&recipes);
        recipe
    }

    /// Replace the stored record carrying the same id.
    ///
    /// Every field is taken from the input except `date_added`, which is
    /// copied from the stored record regardless of what the input carries.
    /// Returns `None` and writes nothing when the id is unknown.
    pub fn update(&self, recipe: Recipe) -> Option<Recipe> {
        let mut recipes = self.load_all();
        let existing = recipes.iter_mut().find(|r| r.id == recipe.id)?;

        let updated = Recipe {
            date_added: existing.date_added.clone(),
            ..recipe
        };
        *existing = updated.clone();

        self.save_all(&recipes);
        Some(updated)
    }

    /// Delete the record with the given id.
    ///
    /// Returns whether a record was removed; nothing is written on a miss.
    pub fn delete_by_id(&self, id: &str) -> bool {
        let mut recipes = self.load_all();
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return false;
        }
        self.save_all(&recipes);
        true
    }
}

/// Current instant in the collection's timestamp format: RFC 3339 with
/// millisecond precision and a `Z` suffix.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_iso_is_millisecond_utc() {
        let stamp = now_iso();
        assert!(stamp.ends_with('Z'));
        // e.g. 2023-01-15T12:00:00.000Z
        assert_eq!(stamp.len(), 24);
        assert_eq!(&stamp[10..11], "T");
        assert_eq!(&stamp[19..20], ".");
    }
}
