use serde::{Deserialize, Serialize};

/// A recipe record as persisted in the collection slot.
///
/// Field names serialize in camelCase so the stored JSON round-trips the
/// collection format callers already have on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Opaque unique identifier, assigned at creation and never changed.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display-ordered ingredient lines, e.g. "2 cups flour".
    pub ingredients: Vec<String>,
    /// Display-ordered preparation steps.
    pub steps: Vec<String>,
    /// Preparation time in minutes.
    pub prep_time: u32,
    /// Cooking time in minutes.
    pub cook_time: u32,
    pub servings: u32,
    /// Free-form label, matched exactly when filtering.
    pub category: String,
    pub tags: Vec<String>,
    /// Image URL. Not validated.
    pub image: String,
    /// Drives the featured selection on the home view.
    pub is_featured: bool,
    /// ISO-8601 creation instant. Set once at creation and preserved
    /// verbatim by every update.
    pub date_added: String,
}

/// A recipe payload without identity fields, used for creation.
///
/// The store assigns `id` and `date_added` when turning a draft into a
/// stored record; everything else is taken as-is, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    pub category: String,
    pub tags: Vec<String>,
    pub image: String,
    pub is_featured: bool,
}

impl RecipeDraft {
    /// Materialize a full record from this draft with the given identity.
    pub(crate) fn into_recipe(self, id: String, date_added: String) -> Recipe {
        Recipe {
            id,
            title: self.title,
            description: self.description,
            ingredients: self.ingredients,
            steps: self.steps,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            servings: self.servings,
            category: self.category,
            tags: self.tags,
            image: self.image,
            is_featured: self.is_featured,
            date_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_serializes_with_camel_case_field_names() {
        let recipe = Recipe {
            id: "abc".to_string(),
            title: "Toast".to_string(),
            description: "Bread, but warm".to_string(),
            ingredients: vec!["1 slice bread".to_string()],
            steps: vec!["Toast the bread.".to_string()],
            prep_time: 1,
            cook_time: 2,
            servings: 1,
            category: "Breakfast".to_string(),
            tags: vec!["quick".to_string()],
            image: String::new(),
            is_featured: false,
            date_added: "2023-01-15T12:00:00.000Z".to_string(),
        };

        let json = serde_json::to_string(&recipe).unwrap();
        assert!(json.contains("\"prepTime\":1"));
        assert!(json.contains("\"cookTime\":2"));
        assert!(json.contains("\"isFeatured\":false"));
        assert!(json.contains("\"dateAdded\":\"2023-01-15T12:00:00.000Z\""));
    }
}
