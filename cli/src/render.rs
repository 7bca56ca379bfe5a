//! Plain-text rendering of recipe cards and detail views.

use recipebook_core::Recipe;

/// One-line card for list output.
pub fn card(recipe: &Recipe) -> String {
    format!(
        "{:<16} {} [{}]  prep {} min, cook {} min",
        recipe.id, recipe.title, recipe.category, recipe.prep_time, recipe.cook_time
    )
}

/// Full detail view, mirroring the sections of the detail page.
pub fn detail(recipe: &Recipe) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", recipe.title));
    out.push_str(&format!(
        "Prep: {} min | Cook: {} min | Serves: {} | {}\n",
        recipe.prep_time, recipe.cook_time, recipe.servings, recipe.category
    ));
    out.push_str(&format!("Added: {}\n\n", recipe.date_added));
    out.push_str(&format!("{}\n\n", recipe.description));

    out.push_str("Ingredients\n");
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {ingredient}\n"));
    }

    out.push_str("\nInstructions\n");
    for (i, step) in recipe.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", i + 1));
    }

    if !recipe.tags.is_empty() {
        out.push_str(&format!("\nTags: {}\n", recipe.tags.join(", ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe {
            id: "abc123".to_string(),
            title: "Toast".to_string(),
            description: "Bread, but warm.".to_string(),
            ingredients: vec!["1 slice bread".to_string()],
            steps: vec!["Toast the bread.".to_string(), "Eat it.".to_string()],
            prep_time: 1,
            cook_time: 2,
            servings: 1,
            category: "Breakfast".to_string(),
            tags: vec!["quick".to_string()],
            image: String::new(),
            is_featured: false,
            date_added: "2023-01-15T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn card_shows_id_title_and_times() {
        let line = card(&recipe());
        assert!(line.contains("abc123"));
        assert!(line.contains("Toast"));
        assert!(line.contains("prep 1 min"));
    }

    #[test]
    fn detail_numbers_steps_and_lists_ingredients() {
        let text = detail(&recipe());
        assert!(text.contains("  - 1 slice bread"));
        assert!(text.contains("  1. Toast the bread."));
        assert!(text.contains("  2. Eat it."));
        assert!(text.contains("Tags: quick"));
    }
}
