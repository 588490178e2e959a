//! Basic usage of the RecipeSearch builder API
//!
//! This example demonstrates two use cases:
//! 1. Search with filters and print the results as a table
//! 2. Call the `get_recipes` entry point and print JSON records

use recipe_scraper::{get_recipes, Difficulty, RecipeSearch};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use Case 1: builder with filters
    println!("=== Use Case 1: Easy chocolate recipes under 30 minutes ===");
    let table = RecipeSearch::builder()
        .ingredient("chocolate")
        .max_pages(2)
        .difficulty(Difficulty::Easy)
        .difficulty(Difficulty::VeryEasy)
        .max_prep_time(30)
        .build()?;

    println!("Found {} recipes", table.len());
    print!("{}", table);

    // Use Case 2: one-call entry point
    println!("\n=== Use Case 2: Carrot recipes taking at least 20 minutes ===");
    let table = get_recipes("carrot", 1, &["Moderate"], 0, 20)?;
    println!("{}", table.to_json()?);

    Ok(())
}
