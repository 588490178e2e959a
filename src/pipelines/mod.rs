pub mod search;

pub use search::{collect_recipes, RecipeQuery};
