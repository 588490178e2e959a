use log::debug;

use crate::model::{Difficulty, Recipe};

/// Post-hoc filters over normalized recipes.
///
/// Every criterion is inactive at its empty value: no difficulty levels,
/// or a prep time bound of `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub difficulty_levels: Vec<Difficulty>,
    pub max_prep_time: u32,
    pub min_prep_time: u32,
}

impl RecipeFilter {
    pub fn is_noop(&self) -> bool {
        self.difficulty_levels.is_empty() && self.max_prep_time == 0 && self.min_prep_time == 0
    }

    /// Keep the recipes matching every active criterion, in their original order.
    ///
    /// Criteria apply in a fixed order: difficulty, then maximum prep time,
    /// then minimum prep time.
    pub fn apply(&self, mut recipes: Vec<Recipe>) -> Vec<Recipe> {
        if !self.difficulty_levels.is_empty() {
            recipes.retain(|recipe| {
                self.difficulty_levels
                    .iter()
                    .any(|level| level.matches(&recipe.difficulty))
            });
            debug!("{} recipes left after difficulty filter", recipes.len());
        }

        if self.max_prep_time != 0 {
            recipes.retain(|recipe| recipe.prep_time <= self.max_prep_time);
            debug!(
                "{} recipes left after max prep time {}",
                recipes.len(),
                self.max_prep_time
            );
        }

        if self.min_prep_time != 0 {
            recipes.retain(|recipe| recipe.prep_time >= self.min_prep_time);
            debug!(
                "{} recipes left after min prep time {}",
                recipes.len(),
                self.min_prep_time
            );
        }

        recipes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, difficulty: &str, prep_time: u32) -> Recipe {
        Recipe {
            name: format!("Recipe {id}"),
            difficulty: difficulty.to_string(),
            prep_time,
            id: id.to_string(),
            url: format!("https://recipes.lewagon.com/recipes/{id}"),
        }
    }

    fn ids(recipes: &[Recipe]) -> Vec<&str> {
        recipes.iter().map(|r| r.id.as_str()).collect()
    }

    fn sample() -> Vec<Recipe> {
        vec![
            recipe("1", "Easy", 20),
            recipe("2", "Hard", 45),
            recipe("3", "Easy", 50),
        ]
    }

    #[test]
    fn test_difficulty_and_max_prep_time_compose() {
        let filter = RecipeFilter {
            difficulty_levels: vec![Difficulty::Easy],
            max_prep_time: 30,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["1"]);
    }

    #[test]
    fn test_empty_filter_is_noop() {
        let filter = RecipeFilter::default();
        assert!(filter.is_noop());
        assert_eq!(filter.apply(sample()), sample());
    }

    #[test]
    fn test_min_prep_time_is_inclusive() {
        let filter = RecipeFilter {
            min_prep_time: 45,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["2", "3"]);
    }

    #[test]
    fn test_max_prep_time_is_inclusive() {
        let filter = RecipeFilter {
            max_prep_time: 45,
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(sample())), vec!["1", "2"]);
    }

    #[test]
    fn test_several_difficulty_levels_keep_order() {
        let recipes = vec![
            recipe("a", "Moderate", 10),
            recipe("b", "Very Easy", 5),
            recipe("c", "Hard", 30),
            recipe("d", "Very Easy", 15),
        ];
        let filter = RecipeFilter {
            difficulty_levels: vec![Difficulty::VeryEasy, Difficulty::Moderate],
            ..Default::default()
        };
        assert_eq!(ids(&filter.apply(recipes)), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_inverted_bounds_yield_nothing() {
        let filter = RecipeFilter {
            max_prep_time: 10,
            min_prep_time: 30,
            ..Default::default()
        };
        assert!(filter.apply(sample()).is_empty());
    }

    #[test]
    fn test_unknown_scraped_difficulty_never_matches() {
        let filter = RecipeFilter {
            difficulty_levels: Difficulty::ALL.to_vec(),
            ..Default::default()
        };
        let kept = filter.apply(vec![recipe("x", "Legendary", 10), recipe("y", "Hard", 10)]);
        assert_eq!(ids(&kept), vec!["y"]);
    }
}
