//! Compact recipe summaries for listing grids.
//!
//! A card never invents data: anything the row does not carry stays absent
//! rather than becoming a zero or an empty string.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assemble::resolve_recipe_text;
use crate::lang::Language;
use crate::types::{
    Difficulty, FullLocalizedRecipe, NutritionFacts, RecipeRow, RecipeTranslationRow, Season,
};

/// The summary projection rendered on listing and grid pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub season: Vec<Season>,
    pub difficulty: Option<Difficulty>,
    pub total_time: Option<i32>,
    pub servings: Option<i32>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub calories: Option<f32>,
    pub protein: Option<f32>,
}

impl RecipeCard {
    /// Project a card straight from a base row, resolving title and slug
    /// against the recipe's translation set.
    pub fn from_row(
        recipe: &RecipeRow,
        translations: &[RecipeTranslationRow],
        nutrition: Option<&NutritionFacts>,
        lang: Language,
    ) -> RecipeCard {
        let text = resolve_recipe_text(recipe, translations, lang);
        RecipeCard {
            id: recipe.id,
            slug: text.slug,
            title: text.title,
            description: text.description,
            image_url: recipe.image_url.clone(),
            season: recipe.season.clone(),
            difficulty: recipe.difficulty,
            total_time: recipe.total_time,
            servings: recipe.servings,
            featured: recipe.featured,
            rating: recipe.rating,
            calories: nutrition.and_then(|n| n.calories),
            protein: nutrition.and_then(|n| n.protein),
        }
    }

    /// Project a card from an already assembled recipe.
    pub fn from_full(full: &FullLocalizedRecipe) -> RecipeCard {
        RecipeCard {
            id: full.id,
            slug: full.slug.clone(),
            title: full.title.clone(),
            description: full.description.clone(),
            image_url: full.image_url.clone(),
            season: full.season.clone(),
            difficulty: full.difficulty,
            total_time: full.total_time,
            servings: full.servings,
            featured: full.featured,
            rating: full.rating,
            calories: full.nutrition.as_ref().and_then(|n| n.calories),
            protein: full.nutrition.as_ref().and_then(|n| n.protein),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble_recipe;
    use crate::types::RecipeBundle;

    fn row() -> RecipeRow {
        RecipeRow {
            id: Uuid::from_u128(9),
            title: "Gazpacho".to_string(),
            description: None,
            image_url: None,
            servings: None,
            serving_type: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            difficulty: None,
            season: vec![],
            featured: false,
            rating: None,
            rating_count: 0,
        }
    }

    fn translations() -> Vec<RecipeTranslationRow> {
        vec![RecipeTranslationRow {
            lang: Language::En,
            title: "Gazpacho".to_string(),
            description: Some("Cold soup.".to_string()),
            slug: "gazpacho".to_string(),
        }]
    }

    #[test]
    fn test_absent_fields_stay_absent() {
        let card = RecipeCard::from_row(&row(), &translations(), None, Language::En);
        assert_eq!(card.image_url, None);
        assert_eq!(card.total_time, None);
        assert_eq!(card.servings, None);
        assert_eq!(card.calories, None);
        assert_eq!(card.protein, None);
        assert_eq!(card.rating, None);
    }

    #[test]
    fn test_nutrition_highlights_are_copied() {
        let nutrition = NutritionFacts {
            calories: Some(88.0),
            protein: Some(2.1),
            ..NutritionFacts::default()
        };
        let card = RecipeCard::from_row(&row(), &translations(), Some(&nutrition), Language::En);
        assert_eq!(card.calories, Some(88.0));
        assert_eq!(card.protein, Some(2.1));
    }

    #[test]
    fn test_title_and_slug_resolve_through_fallback() {
        let card = RecipeCard::from_row(&row(), &translations(), None, Language::Fr);
        assert_eq!(card.title, "Gazpacho");
        assert_eq!(card.slug, "gazpacho");
        assert_eq!(card.description.as_deref(), Some("Cold soup."));
    }

    #[test]
    fn test_from_full_matches_from_row() {
        let nutrition = NutritionFacts { calories: Some(88.0), ..NutritionFacts::default() };
        let from_row =
            RecipeCard::from_row(&row(), &translations(), Some(&nutrition), Language::En);
        let bundle = RecipeBundle {
            recipe: row(),
            translations: translations(),
            ingredients: vec![],
            steps: vec![],
            tags: vec![],
            nutrition: Some(nutrition),
            times: vec![],
        };
        let from_full = RecipeCard::from_full(&assemble_recipe(bundle, Language::En));
        assert_eq!(from_row, from_full);
    }
}
