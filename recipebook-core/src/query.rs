//! View shaping over the loaded collection: sorting, filtering, and
//! featured selection. Pure functions; callers decide presentation.

use std::cmp::Reverse;

use chrono::DateTime;

use crate::types::Recipe;

/// Most featured recipes shown on the home view.
pub const FEATURED_LIMIT: usize = 4;

/// Search and category criteria for the recipe list.
#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    /// Case-insensitive term matched against title, description,
    /// ingredients, and tags. Empty matches everything.
    pub search: String,
    /// Exact category label. Empty matches everything.
    pub category: String,
}

impl RecipeFilter {
    fn matches(&self, recipe: &Recipe) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || recipe.title.to_lowercase().contains(&term)
            || recipe.description.to_lowercase().contains(&term)
            || recipe
                .ingredients
                .iter()
                .any(|i| i.to_lowercase().contains(&term))
            || recipe.tags.iter().any(|t| t.to_lowercase().contains(&term));

        let matches_category = self.category.is_empty() || recipe.category == self.category;

        matches_search && matches_category
    }
}

/// Records matching the filter, in collection order.
pub fn filter(recipes: &[Recipe], criteria: &RecipeFilter) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|r| criteria.matches(r))
        .cloned()
        .collect()
}

/// Order by creation time, newest first.
///
/// Records whose timestamp fails to parse sort last, keeping their
/// relative order.
pub fn sort_newest_first(recipes: &mut [Recipe]) {
    recipes.sort_by_key(|r| {
        Reverse(
            DateTime::parse_from_rfc3339(&r.date_added)
                .map(|t| t.timestamp_millis())
                .unwrap_or(i64::MIN),
        )
    });
}

/// Featured records, in collection order. The home view shows at most
/// [`FEATURED_LIMIT`] of these.
pub fn featured(recipes: &[Recipe]) -> Vec<Recipe> {
    recipes.iter().filter(|r| r.is_featured).cloned().collect()
}

/// Sorted, deduplicated category labels across the collection.
pub fn distinct_categories(recipes: &[Recipe]) -> Vec<String> {
    let mut categories: Vec<String> = recipes.iter().map(|r| r.category.clone()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_recipes;

    fn recipe(id: &str, title: &str, category: &str, date_added: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            ingredients: vec![],
            steps: vec![],
            prep_time: 0,
            cook_time: 0,
            servings: 1,
            category: category.to_string(),
            tags: vec![],
            image: String::new(),
            is_featured: false,
            date_added: date_added.to_string(),
        }
    }

    #[test]
    fn sort_puts_newest_first_and_unparseable_last() {
        let mut recipes = vec![
            recipe("a", "Old", "Dinner", "2023-01-01T00:00:00.000Z"),
            recipe("b", "Broken", "Dinner", "not a date"),
            recipe("c", "New", "Dinner", "2023-06-01T00:00:00.000Z"),
        ];
        sort_newest_first(&mut recipes);

        let ids: Vec<&str> = recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn search_matches_title_description_ingredients_and_tags() {
        let samples = sample_recipes();

        let by_title = filter(
            &samples,
            &RecipeFilter {
                search: "margherita".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Classic Margherita Pizza");

        let by_ingredient = filter(
            &samples,
            &RecipeFilter {
                search: "quinoa".to_string(),
                ..Default::default()
            },
        );
        assert!(by_ingredient
            .iter()
            .any(|r| r.title == "Mediterranean Quinoa Salad"));

        let by_tag = filter(
            &samples,
            &RecipeFilter {
                search: "comfort food".to_string(),
                ..Default::default()
            },
        );
        assert!(by_tag
            .iter()
            .any(|r| r.title == "Homemade Chicken Noodle Soup"));
    }

    #[test]
    fn category_filter_is_exact() {
        let samples = sample_recipes();
        let dinners = filter(
            &samples,
            &RecipeFilter {
                category: "Dinner".to_string(),
                ..Default::default()
            },
        );
        assert_eq!(dinners.len(), 3);
        assert!(dinners.iter().all(|r| r.category == "Dinner"));

        let none = filter(
            &samples,
            &RecipeFilter {
                category: "dinner".to_string(),
                ..Default::default()
            },
        );
        assert!(none.is_empty());
    }

    #[test]
    fn empty_filter_matches_everything() {
        let samples = sample_recipes();
        assert_eq!(filter(&samples, &RecipeFilter::default()).len(), samples.len());
    }

    #[test]
    fn featured_selection_matches_flag() {
        let samples = sample_recipes();
        let picks = featured(&samples);
        assert_eq!(picks.len(), 4);
        assert!(picks.iter().all(|r| r.is_featured));
    }

    #[test]
    fn distinct_categories_are_sorted_and_deduplicated() {
        let samples = sample_recipes();
        let categories = distinct_categories(&samples);
        assert_eq!(categories, vec!["Breakfast", "Dessert", "Dinner", "Vegetarian"]);
    }
}
