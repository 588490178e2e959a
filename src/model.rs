use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScrapeError};

/// A recipe card as it appears on a search results page.
///
/// All fields are trimmed text; `prep_time` still carries its unit
/// (e.g. `"35 min"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedRecipe {
    pub name: String,
    pub difficulty: String,
    pub prep_time: String,
    pub id: String,
    pub url: String,
}

/// A recipe with its preparation time normalized to whole minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub difficulty: String,
    pub prep_time: u32,
    pub id: String,
    pub url: String,
}

impl ScrapedRecipe {
    /// Convert into a [`Recipe`], parsing `prep_time` into minutes.
    pub fn normalize(self) -> Result<Recipe> {
        let prep_time = parse_prep_time(&self.prep_time)?;
        Ok(Recipe {
            name: self.name,
            difficulty: self.difficulty,
            prep_time,
            id: self.id,
            url: self.url,
        })
    }
}

/// Parse the leading whitespace-delimited token of a preparation time.
///
/// `"35 min"` gives `35`, `"5 mins"` gives `5`. Anything else fails.
pub fn parse_prep_time(text: &str) -> Result<u32> {
    text.split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| ScrapeError::InvalidPrepTime(text.to_string()))
}

/// The difficulty levels the site assigns to recipes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Difficulty {
    VeryEasy,
    Easy,
    Moderate,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::VeryEasy,
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "Very Easy",
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        }
    }

    /// Whether a scraped difficulty label denotes this level
    pub fn matches(&self, label: &str) -> bool {
        self.as_str() == label
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ScrapeError::InvalidDifficulty(s.to_string()))
    }
}

impl TryFrom<String> for Difficulty {
    type Error = ScrapeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}
