//! Diesel row models and their conversion into the core crate's normalized
//! records.
//!
//! Languages, seasons and difficulties are stored as plain strings; this is
//! the one seam where those strings are parsed. A translation row with an
//! unknown language code is skipped with a warning instead of failing the
//! whole read.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use cocotte_core::types::{
    Difficulty, IngredientEntryRow, IngredientRef, NameTranslation, NutritionFacts,
    RecipeRow, RecipeTranslationRow, Season, StepRow, StepTranslation, TagRow,
};
use cocotte_core::Language;

fn parse_lang(value: &str, table: &'static str) -> Option<Language> {
    match Language::from_str(value) {
        Some(lang) => Some(lang),
        None => {
            tracing::warn!(lang = %value, table, "unknown language code, skipping row");
            None
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Recipe {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub servings: Option<i32>,
    pub serving_type: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub difficulty: Option<String>,
    pub season: Vec<Option<String>>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub rating_count: i32,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    pub fn into_row(self) -> RecipeRow {
        let difficulty = self.difficulty.as_deref().and_then(|d| {
            let parsed = Difficulty::from_str(d);
            if parsed.is_none() {
                tracing::warn!(recipe_id = %self.id, value = %d, "unknown difficulty value, treating as unset");
            }
            parsed
        });
        let season = self
            .season
            .into_iter()
            .flatten()
            .filter_map(|s| {
                let parsed = Season::from_str(&s);
                if parsed.is_none() {
                    tracing::warn!(recipe_id = %self.id, value = %s, "unknown season value, skipping");
                }
                parsed
            })
            .collect();
        RecipeRow {
            id: self.id,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            servings: self.servings,
            serving_type: self.serving_type,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.total_time,
            difficulty,
            season,
            featured: self.featured,
            rating: self.rating,
            rating_count: self.rating_count,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeTranslation {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub lang: String,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
}

impl RecipeTranslation {
    pub fn into_row(self) -> Option<RecipeTranslationRow> {
        let lang = parse_lang(&self.lang, "recipe_translations")?;
        Some(RecipeTranslationRow {
            lang,
            title: self.title,
            description: self.description,
            slug: self.slug,
        })
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredient_translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct IngredientTranslation {
    pub id: Uuid,
    pub ingredient_id: Uuid,
    pub lang: String,
    pub name: String,
}

impl IngredientTranslation {
    pub fn into_name(self) -> Option<NameTranslation> {
        let lang = parse_lang(&self.lang, "ingredient_translations")?;
        Some(NameTranslation { lang, name: self.name })
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Option<Uuid>,
    pub quantity: Option<f32>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

impl RecipeIngredient {
    /// Pair the usage row with its (possibly absent) ingredient and that
    /// ingredient's translated names.
    pub fn into_entry(
        self,
        ingredient: Option<Ingredient>,
        translations: Vec<NameTranslation>,
    ) -> IngredientEntryRow {
        IngredientEntryRow {
            id: self.id,
            quantity: self.quantity,
            unit: self.unit,
            section: self.section,
            note: self.note,
            position: self.position,
            ingredient: ingredient.map(|i| IngredientRef {
                id: i.id,
                name: i.name,
                translations,
            }),
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeStep {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub position: i32,
    pub instruction: Option<String>,
    pub note: Option<String>,
}

impl RecipeStep {
    pub fn into_row(self, translations: Vec<StepTranslation>) -> StepRow {
        StepRow {
            id: self.id,
            position: self.position,
            instruction: self.instruction,
            note: self.note,
            translations,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_step_translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeStepTranslation {
    pub id: Uuid,
    pub recipe_step_id: Uuid,
    pub lang: String,
    pub instruction: String,
}

impl RecipeStepTranslation {
    pub fn into_row(self) -> Option<StepTranslation> {
        let lang = parse_lang(&self.lang, "recipe_step_translations")?;
        Some(StepTranslation { lang, instruction: self.instruction })
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
}

impl Tag {
    pub fn into_row(self, translations: Vec<NameTranslation>) -> TagRow {
        TagRow { id: self.id, name: self.name, translations }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::tag_translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct TagTranslation {
    pub id: Uuid,
    pub tag_id: Uuid,
    pub lang: String,
    pub name: String,
}

impl TagTranslation {
    pub fn into_name(self) -> Option<NameTranslation> {
        let lang = parse_lang(&self.lang, "tag_translations")?;
        Some(NameTranslation { lang, name: self.name })
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_nutrition)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeNutrition {
    pub id: Uuid,
    pub recipe_id: Uuid,
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

impl RecipeNutrition {
    pub fn into_facts(self) -> NutritionFacts {
        NutritionFacts {
            calories: self.calories,
            protein: self.protein,
            carbs: self.carbs,
            fat: self.fat,
            saturated_fat: self.saturated_fat,
            monounsaturated_fat: self.monounsaturated_fat,
            polyunsaturated_fat: self.polyunsaturated_fat,
            trans_fat: self.trans_fat,
            fiber: self.fiber,
            sugar: self.sugar,
            sodium: self.sodium,
        }
    }
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub icon: Option<String>,
    pub position: Option<i32>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::category_translations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct CategoryTranslation {
    pub id: Uuid,
    pub category_id: Uuid,
    pub lang: String,
    pub name: String,
    pub description: Option<String>,
}

impl CategoryTranslation {
    pub fn into_name(self) -> Option<NameTranslation> {
        let lang = parse_lang(&self.lang, "category_translations")?;
        Some(NameTranslation { lang, name: self.name })
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::user_favorites)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(difficulty: Option<&str>, season: Vec<Option<&str>>) -> Recipe {
        Recipe {
            id: Uuid::from_u128(1),
            title: "Test".to_string(),
            description: None,
            image_url: None,
            servings: None,
            serving_type: None,
            prep_time: None,
            cook_time: None,
            total_time: None,
            difficulty: difficulty.map(String::from),
            season: season.into_iter().map(|s| s.map(String::from)).collect(),
            featured: false,
            rating: None,
            rating_count: 0,
            view_count: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_recipe_season_and_difficulty_parse() {
        let row = recipe(Some("medium"), vec![Some("summer"), Some("autumn")]).into_row();
        assert_eq!(row.difficulty, Some(Difficulty::Medium));
        assert_eq!(row.season, vec![Season::Summer, Season::Autumn]);
    }

    #[test]
    fn test_unknown_difficulty_becomes_unset() {
        let row = recipe(Some("expert"), vec![]).into_row();
        assert_eq!(row.difficulty, None);
    }

    #[test]
    fn test_unknown_and_null_seasons_are_skipped() {
        let row = recipe(None, vec![Some("summer"), Some("monsoon"), None]).into_row();
        assert_eq!(row.season, vec![Season::Summer]);
    }

    #[test]
    fn test_translation_with_unknown_lang_is_skipped() {
        let t = RecipeTranslation {
            id: Uuid::from_u128(2),
            recipe_id: Uuid::from_u128(1),
            lang: "xx".to_string(),
            title: "Titel".to_string(),
            description: None,
            slug: "titel".to_string(),
        };
        assert!(t.into_row().is_none());

        let t = RecipeTranslation {
            id: Uuid::from_u128(3),
            recipe_id: Uuid::from_u128(1),
            lang: "nl".to_string(),
            title: "Titel".to_string(),
            description: None,
            slug: "titel".to_string(),
        };
        let row = t.into_row().unwrap();
        assert_eq!(row.lang, Language::Nl);
        assert_eq!(row.slug, "titel");
    }
}
