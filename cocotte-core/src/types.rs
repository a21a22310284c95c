//! Normalized store records and the localized view-models built from them.
//!
//! The `*Row` types are what the store hands over: language-neutral base
//! records plus per-language translation rows, exactly as they exist in the
//! database. [`FullLocalizedRecipe`] is the single-language shape everything
//! downstream renders from; [`crate::assemble::assemble_recipe`] is the only
//! way to get one.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::lang::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "autumn" => Some(Season::Autumn),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }
}

/// Language-neutral base recipe record.
///
/// `title` and `description` hold the canonical authored text and double as
/// the last-resort fallback when no translation row survives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub servings: Option<i32>,
    pub serving_type: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub season: Vec<Season>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub rating_count: i32,
}

/// One per-language translation of a recipe's own fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeTranslationRow {
    pub lang: Language,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
}

/// A `(lang, name)` pair used by ingredient and tag translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameTranslation {
    pub lang: Language,
    pub name: String,
}

/// The ingredient an entry points at, with its translated names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientRef {
    pub id: Uuid,
    pub name: String,
    pub translations: Vec<NameTranslation>,
}

/// One line of a recipe's ingredient list.
///
/// `ingredient` is `None` when the entry does not reference an ingredient
/// record; the assembler drops such entries with a warning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientEntryRow {
    pub id: Uuid,
    pub quantity: Option<f32>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub ingredient: Option<IngredientRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTranslation {
    pub lang: Language,
    pub instruction: String,
}

/// One preparation step with its canonical instruction (if any) and
/// per-language instruction rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRow {
    pub id: Uuid,
    pub position: i32,
    pub instruction: Option<String>,
    pub note: Option<String>,
    pub translations: Vec<StepTranslation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRow {
    pub id: Uuid,
    pub name: String,
    pub translations: Vec<NameTranslation>,
}

/// Per-serving nutrition facts. Every field is optional; absent means
/// unknown, never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: Option<f32>,
    pub protein: Option<f32>,
    pub carbs: Option<f32>,
    pub fat: Option<f32>,
    pub saturated_fat: Option<f32>,
    pub monounsaturated_fat: Option<f32>,
    pub polyunsaturated_fat: Option<f32>,
    pub trans_fat: Option<f32>,
    pub fiber: Option<f32>,
    pub sugar: Option<f32>,
    pub sodium: Option<f32>,
}

/// A named duration such as resting or marinating time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedTime {
    pub name: Option<String>,
    pub minutes: i32,
}

/// Everything the store knows about one recipe, before localization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBundle {
    pub recipe: RecipeRow,
    pub translations: Vec<RecipeTranslationRow>,
    pub ingredients: Vec<IngredientEntryRow>,
    pub steps: Vec<StepRow>,
    pub tags: Vec<TagRow>,
    pub nutrition: Option<NutritionFacts>,
    pub times: Vec<NamedTime>,
}

/// An ingredient line with its name resolved to one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedIngredient {
    pub id: Uuid,
    pub name: String,
    pub quantity: Option<f32>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

/// A preparation step with its instruction resolved to one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedStep {
    pub position: i32,
    pub instruction: String,
    pub note: Option<String>,
}

/// A tag with its display name resolved to one language. The full
/// translation set rides along for language-switch links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedTag {
    pub id: Uuid,
    pub name: String,
    pub translations: Vec<NameTranslation>,
}

/// A complete recipe resolved to a single display language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullLocalizedRecipe {
    pub id: Uuid,
    /// Language of the translation row the title came from; the requested
    /// language when no translation row existed at all.
    pub lang: Language,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub servings: Option<i32>,
    pub serving_type: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub season: Vec<Season>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub rating_count: i32,
    pub ingredients: Vec<LocalizedIngredient>,
    pub steps: Vec<LocalizedStep>,
    pub nutrition: Option<NutritionFacts>,
    pub tags: Vec<LocalizedTag>,
    pub times: Vec<NamedTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("impossible"), None);
    }

    #[test]
    fn test_season_round_trip() {
        for s in [Season::Spring, Season::Summer, Season::Autumn, Season::Winter] {
            assert_eq!(Season::from_str(s.as_str()), Some(s));
        }
        assert_eq!(Season::from_str("fall"), None);
    }
}
