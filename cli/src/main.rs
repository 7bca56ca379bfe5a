mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use recipebook_core::{
    query, FileSlot, Notifier, RecipeDraft, RecipeFilter, RecipeStore, Severity,
};

#[derive(Parser)]
#[command(name = "recipebook")]
#[command(about = "Local recipe catalog", long_about = None)]
struct Cli {
    /// Directory holding the recipe data (default: ~/.recipebook)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List recipes, newest first
    List {
        /// Only show recipes in this category
        #[arg(long)]
        category: Option<String>,
        /// Only show recipes matching this search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one recipe in full
    Show {
        /// Recipe ID
        id: String,
    },
    /// Add a new recipe
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Ingredient line, repeatable
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Preparation step, repeatable
        #[arg(long = "step")]
        steps: Vec<String>,
        /// Preparation time in minutes
        #[arg(long, default_value_t = 0)]
        prep_time: u32,
        /// Cooking time in minutes
        #[arg(long, default_value_t = 0)]
        cook_time: u32,
        #[arg(long, default_value_t = 1)]
        servings: u32,
        #[arg(long)]
        category: String,
        /// Tag, repeatable
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Image URL
        #[arg(long, default_value = "")]
        image: String,
        /// Feature this recipe on the home view
        #[arg(long)]
        featured: bool,
    },
    /// Edit an existing recipe
    Edit {
        /// Recipe ID
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Replacement ingredient line, repeatable; replaces the whole list
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
        /// Replacement preparation step, repeatable; replaces the whole list
        #[arg(long = "step")]
        steps: Vec<String>,
        /// Preparation time in minutes
        #[arg(long)]
        prep_time: Option<u32>,
        /// Cooking time in minutes
        #[arg(long)]
        cook_time: Option<u32>,
        #[arg(long)]
        servings: Option<u32>,
        #[arg(long)]
        category: Option<String>,
        /// Replacement tag, repeatable; replaces the whole list
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
        /// Feature (true) or unfeature (false) this recipe
        #[arg(long)]
        featured: Option<bool>,
    },
    /// Delete a recipe
    Delete {
        /// Recipe ID
        id: String,
    },
    /// Show the featured recipes from the home view
    Featured,
    /// List the categories in use
    Categories,
}

/// Console stand-in for the toast notifications of the original UI.
struct ConsoleToast;

impl Notifier for ConsoleToast {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => println!("{message}"),
            Severity::Error => eprintln!("Error: {message}"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(FileSlot::default_dir);
    let toast: Arc<ConsoleToast> = Arc::new(ConsoleToast);
    let store = RecipeStore::new(Arc::new(FileSlot::new(data_dir)), toast.clone());

    match cli.command {
        Commands::List { category, search } => list(&store, category, search),
        Commands::Show { id } => show(&store, &id)?,
        Commands::Add {
            title,
            description,
            ingredients,
            steps,
            prep_time,
            cook_time,
            servings,
            category,
            tags,
            image,
            featured,
        } => {
            let ingredients = non_blank(ingredients);
            let steps = non_blank(steps);
            validate(&title, &description, &ingredients, &steps)?;

            let created = store.create(RecipeDraft {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                ingredients,
                steps,
                prep_time,
                cook_time,
                servings,
                category,
                tags: non_blank(tags),
                image: image.trim().to_string(),
                is_featured: featured,
            });
            toast.notify("Recipe added successfully", Severity::Success);
            println!("{}", created.id);
        }
        Commands::Edit {
            id,
            title,
            description,
            ingredients,
            steps,
            prep_time,
            cook_time,
            servings,
            category,
            tags,
            image,
            featured,
        } => {
            let Some(mut recipe) = store.find_by_id(&id) else {
                bail!("Recipe not found: {id}");
            };

            // The original form pre-populates every field from the stored
            // record; flags overlay that state before the full payload is
            // submitted.
            if let Some(title) = title {
                recipe.title = title;
            }
            if let Some(description) = description {
                recipe.description = description;
            }
            if !ingredients.is_empty() {
                recipe.ingredients = non_blank(ingredients);
            }
            if !steps.is_empty() {
                recipe.steps = non_blank(steps);
            }
            if let Some(prep_time) = prep_time {
                recipe.prep_time = prep_time;
            }
            if let Some(cook_time) = cook_time {
                recipe.cook_time = cook_time;
            }
            if let Some(servings) = servings {
                recipe.servings = servings;
            }
            if let Some(category) = category {
                recipe.category = category;
            }
            if !tags.is_empty() {
                recipe.tags = non_blank(tags);
            }
            if let Some(image) = image {
                recipe.image = image;
            }
            if let Some(featured) = featured {
                recipe.is_featured = featured;
            }

            validate(
                &recipe.title,
                &recipe.description,
                &recipe.ingredients,
                &recipe.steps,
            )?;

            if store.update(recipe).is_none() {
                bail!("Recipe not found: {id}");
            }
            toast.notify("Recipe updated successfully", Severity::Success);
        }
        Commands::Delete { id } => {
            if !store.delete_by_id(&id) {
                bail!("Recipe not found: {id}");
            }
            toast.notify("Recipe deleted successfully", Severity::Success);
        }
        Commands::Featured => featured_list(&store),
        Commands::Categories => {
            for category in query::distinct_categories(&store.load_all()) {
                println!("{category}");
            }
        }
    }

    Ok(())
}

fn list(store: &RecipeStore, category: Option<String>, search: Option<String>) {
    let criteria = RecipeFilter {
        search: search.unwrap_or_default(),
        category: category.unwrap_or_default(),
    };

    let mut recipes = query::filter(&store.load_all(), &criteria);
    query::sort_newest_first(&mut recipes);

    if recipes.is_empty() {
        println!("No recipes found.");
        return;
    }
    for recipe in &recipes {
        println!("{}", render::card(recipe));
    }
}

fn show(store: &RecipeStore, id: &str) -> Result<()> {
    match store.find_by_id(id) {
        Some(recipe) => {
            print!("{}", render::detail(&recipe));
            Ok(())
        }
        None => bail!("Recipe not found: {id}"),
    }
}

fn featured_list(store: &RecipeStore) {
    let picks = query::featured(&store.load_all());
    if picks.is_empty() {
        println!("No featured recipes yet.");
        return;
    }
    for recipe in picks.iter().take(query::FEATURED_LIMIT) {
        println!("{}", render::card(recipe));
    }
}

/// Required-field checks. The store accepts anything; validation is the
/// caller's job, done before submitting.
fn validate(
    title: &str,
    description: &str,
    ingredients: &[String],
    steps: &[String],
) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Title cannot be empty");
    }
    if description.trim().is_empty() {
        bail!("Description cannot be empty");
    }
    if ingredients.is_empty() {
        bail!("You need at least one ingredient");
    }
    if steps.is_empty() {
        bail!("You need at least one step");
    }
    Ok(())
}

/// Trim entries and drop the blank ones, as the original form does before
/// submitting.
fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_missing_required_fields() {
        let one = vec!["x".to_string()];
        assert!(validate("", "desc", &one, &one).is_err());
        assert!(validate("title", "  ", &one, &one).is_err());
        assert!(validate("title", "desc", &[], &one).is_err());
        assert!(validate("title", "desc", &one, &[]).is_err());
        assert!(validate("title", "desc", &one, &one).is_ok());
    }

    #[test]
    fn non_blank_trims_and_drops_empties() {
        let values = vec![
            " 2 cups flour ".to_string(),
            String::new(),
            "   ".to_string(),
            "1 egg".to_string(),
        ];
        assert_eq!(non_blank(values), vec!["2 cups flour", "1 egg"]);
    }
}
