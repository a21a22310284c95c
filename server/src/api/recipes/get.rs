use crate::api::{ErrorResponse, LangParam};
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use cocotte_core::{
    assemble_recipe, FullLocalizedRecipe, Language, LocalizedIngredient, LocalizedStep,
    LocalizedTag, NamedTime, NutritionFacts,
};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub name: String,
    pub quantity: Option<f32>,
    pub unit: Option<String>,
    pub section: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

impl From<LocalizedIngredient> for IngredientResponse {
    fn from(i: LocalizedIngredient) -> Self {
        IngredientResponse {
            id: i.id,
            name: i.name,
            quantity: i.quantity,
            unit: i.unit,
            section: i.section,
            note: i.note,
            position: i.position,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepResponse {
    pub position: i32,
    pub instruction: String,
    pub note: Option<String>,
}

impl From<LocalizedStep> for StepResponse {
    fn from(s: LocalizedStep) -> Self {
        StepResponse {
            position: s.position,
            instruction: s.instruction,
            note: s.note,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NutritionResponse {
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

impl From<NutritionFacts> for NutritionResponse {
    fn from(n: NutritionFacts) -> Self {
        NutritionResponse {
            calories: n.calories,
            protein: n.protein,
            carbs: n.carbs,
            fat: n.fat,
            saturated_fat: n.saturated_fat,
            monounsaturated_fat: n.monounsaturated_fat,
            polyunsaturated_fat: n.polyunsaturated_fat,
            trans_fat: n.trans_fat,
            fiber: n.fiber,
            sugar: n.sugar,
            sodium: n.sodium,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagResponse {
    pub id: Uuid,
    /// Name in the resolved display language
    pub name: String,
    /// Every translated name keyed by language code, for language switching
    pub translations: BTreeMap<String, String>,
}

impl From<LocalizedTag> for TagResponse {
    fn from(t: LocalizedTag) -> Self {
        TagResponse {
            id: t.id,
            name: t.name,
            translations: t
                .translations
                .into_iter()
                .map(|n| (n.lang.as_str().to_string(), n.name))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TimeResponse {
    pub name: Option<String>,
    pub minutes: i32,
}

impl From<NamedTime> for TimeResponse {
    fn from(t: NamedTime) -> Self {
        TimeResponse {
            name: t.name,
            minutes: t.minutes,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    /// Language the text fields actually resolved to; may differ from the
    /// requested language when a translation was missing.
    pub lang: String,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub servings: Option<i32>,
    pub serving_type: Option<String>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub difficulty: Option<String>,
    pub season: Vec<String>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub rating_count: i32,
    pub ingredients: Vec<IngredientResponse>,
    pub steps: Vec<StepResponse>,
    pub nutrition: Option<NutritionResponse>,
    pub tags: Vec<TagResponse>,
    pub times: Vec<TimeResponse>,
}

impl From<FullLocalizedRecipe> for RecipeResponse {
    fn from(r: FullLocalizedRecipe) -> Self {
        RecipeResponse {
            id: r.id,
            lang: r.lang.as_str().to_string(),
            slug: r.slug,
            title: r.title,
            description: r.description,
            image_url: r.image_url,
            servings: r.servings,
            serving_type: r.serving_type,
            prep_time: r.prep_time,
            cook_time: r.cook_time,
            total_time: r.total_time,
            difficulty: r.difficulty.map(|d| d.as_str().to_string()),
            season: r.season.iter().map(|s| s.as_str().to_string()).collect(),
            featured: r.featured,
            rating: r.rating,
            rating_count: r.rating_count,
            ingredients: r.ingredients.into_iter().map(Into::into).collect(),
            steps: r.steps.into_iter().map(Into::into).collect(),
            nutrition: r.nutrition.map(Into::into),
            tags: r.tags.into_iter().map(Into::into).collect(),
            times: r.times.into_iter().map(Into::into).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        LangParam,
    ),
    responses(
        (status = 200, description = "The recipe, localized to the requested language", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Query(params): Query<LangParam>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);
    let lang = params.language();

    match store::full::load_recipe_bundle(&mut conn, id) {
        Ok(Some(bundle)) => (
            StatusCode::OK,
            Json(RecipeResponse::from(assemble_recipe(bundle, lang))),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/recipes/by-slug/{lang}/{slug}",
    tag = "recipes",
    params(
        ("lang" = String, Path, description = "Language code the slug belongs to"),
        ("slug" = String, Path, description = "Localized recipe slug"),
    ),
    responses(
        (status = 200, description = "The recipe, localized to the slug's language", body = RecipeResponse),
        (status = 404, description = "Unknown language or no recipe with that slug", body = ErrorResponse)
    )
)]
pub async fn get_recipe_by_slug(
    State(pool): State<Arc<DbPool>>,
    Path((lang, slug)): Path<(String, String)>,
) -> impl IntoResponse {
    // Slugs are per-language, so an unknown language cannot name a recipe.
    let Some(lang) = Language::from_str(&lang) else {
        return (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response();
    };

    let mut conn = get_conn!(pool);
    match store::full::load_recipe_bundle_by_slug(&mut conn, lang, &slug) {
        Ok(Some(bundle)) => (
            StatusCode::OK,
            Json(RecipeResponse::from(assemble_recipe(bundle, lang))),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to fetch recipe by slug {}/{}: {}",
                lang.as_str(),
                slug,
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocotte_core::NameTranslation;

    #[test]
    fn test_tag_translations_serialize_as_lang_keyed_map() {
        let tag = LocalizedTag {
            id: Uuid::from_u128(7),
            name: "vegetarisch".to_string(),
            translations: vec![
                NameTranslation {
                    lang: Language::Nl,
                    name: "vegetarisch".to_string(),
                },
                NameTranslation {
                    lang: Language::En,
                    name: "vegetarian".to_string(),
                },
            ],
        };
        let json = serde_json::to_value(TagResponse::from(tag)).unwrap();
        assert_eq!(json["name"], "vegetarisch");
        assert_eq!(json["translations"]["en"], "vegetarian");
        assert_eq!(json["translations"]["nl"], "vegetarisch");
    }

    #[test]
    fn test_step_and_time_wire_shape() {
        let step = StepResponse::from(LocalizedStep {
            position: 1,
            instruction: "Chop the onions.".to_string(),
            note: None,
        });
        let json = serde_json::to_value(step).unwrap();
        assert_eq!(json["position"], 1);
        assert_eq!(json["instruction"], "Chop the onions.");
        assert!(json["note"].is_null());

        let time = TimeResponse::from(NamedTime {
            name: Some("resting".to_string()),
            minutes: 30,
        });
        let json = serde_json::to_value(time).unwrap();
        assert_eq!(json["name"], "resting");
        assert_eq!(json["minutes"], 30);
    }
}
