use recipe_scraper::{fetch_page, get_recipes, parse_page};

#[test]
#[ignore] // This test requires network access
fn test_chocolate_search() {
    let _ = env_logger::try_init();

    match get_recipes("chocolate", 2, &["Easy", "Very Easy"], 60, 0) {
        Ok(table) => {
            println!("{table}");

            assert!(!table.is_empty());
            for recipe in &table {
                assert!(recipe.difficulty == "Easy" || recipe.difficulty == "Very Easy");
                assert!(recipe.prep_time <= 60);
                assert!(recipe.url.starts_with("https://recipes.lewagon.com/"));
            }
        }
        Err(e) => {
            panic!("Failed to search recipes: {e}");
        }
    }
}

#[test]
#[ignore] // This test requires network access
fn test_first_page_parses() {
    let _ = env_logger::try_init();

    let html = fetch_page("carrot", 1)
        .expect("request failed")
        .expect("first page should not redirect");
    let recipes = parse_page(&html).unwrap();

    assert!(!recipes.is_empty());
    assert!(recipes.iter().all(|r| !r.name.is_empty() && !r.id.is_empty()));
}
