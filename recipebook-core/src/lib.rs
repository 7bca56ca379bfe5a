pub mod error;
pub mod id;
pub mod notify;
pub mod query;
pub mod seed;
pub mod storage;
pub mod store;
pub mod types;

pub use error::StorageError;
pub use notify::{LogNotifier, Notifier, RecordingNotifier, Severity};
pub use query::{
    distinct_categories, featured, filter, sort_newest_first, RecipeFilter, FEATURED_LIMIT,
};
pub use seed::sample_recipes;
pub use storage::{FileSlot, MemorySlot, StorageSlot};
pub use store::RecipeStore;
pub use types::{Recipe, RecipeDraft};
