use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::Recipe;

/// Search results as rows of recipes over a fixed set of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeTable {
    rows: Vec<Recipe>,
}

impl RecipeTable {
    pub const COLUMNS: [&'static str; 5] = ["name", "difficulty", "prep_time", "id", "url"];

    pub fn new(rows: Vec<Recipe>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Recipe] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Recipe> {
        self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.rows.iter()
    }

    /// Serialize as a JSON array of records
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    fn cells(recipe: &Recipe) -> [String; 5] {
        [
            recipe.name.clone(),
            recipe.difficulty.clone(),
            recipe.prep_time.to_string(),
            recipe.id.clone(),
            recipe.url.clone(),
        ]
    }
}

impl From<Vec<Recipe>> for RecipeTable {
    fn from(rows: Vec<Recipe>) -> Self {
        Self::new(rows)
    }
}

impl IntoIterator for RecipeTable {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecipeTable {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for RecipeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 5]> = self.rows.iter().map(Self::cells).collect();

        let mut widths = Self::COLUMNS.map(|column| column.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &Self::COLUMNS, &widths)?;
        for row in &cells {
            let row: Vec<&str> = row.iter().map(String::as_str).collect();
            write_row(f, &row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &[&str], widths: &[usize]) -> fmt::Result {
    let line = row
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}", width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}
