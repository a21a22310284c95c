//! Loads everything a recipe detail page needs in one bundle.
//!
//! The bundle is gathered with a short sequence of reads: base row first,
//! then translations, ingredients, steps, tags, nutrition and named times.
//! Related translation sets are fetched per batch with `eq_any` rather than
//! per row.

use std::collections::HashMap;

use diesel::prelude::*;
use uuid::Uuid;

use cocotte_core::types::{NameTranslation, NamedTime, RecipeBundle, StepTranslation};
use cocotte_core::Language;

use crate::models::{
    Ingredient, IngredientTranslation, Recipe, RecipeIngredient, RecipeNutrition, RecipeStep,
    RecipeStepTranslation, RecipeTranslation, Tag, TagTranslation,
};
use crate::schema::{
    ingredient_translations, ingredients, recipe_ingredients, recipe_nutrition,
    recipe_step_translations, recipe_steps, recipe_tags, recipe_times, recipe_translations,
    recipes, tag_translations, tags, times,
};

/// Load the full bundle for a recipe id. `Ok(None)` when no such recipe.
pub fn load_recipe_bundle(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> QueryResult<Option<RecipeBundle>> {
    let recipe: Option<Recipe> = recipes::table
        .find(recipe_id)
        .select(Recipe::as_select())
        .first(conn)
        .optional()?;
    let Some(recipe) = recipe else {
        return Ok(None);
    };

    let translations = recipe_translations::table
        .filter(recipe_translations::recipe_id.eq(recipe_id))
        .select(RecipeTranslation::as_select())
        .load::<RecipeTranslation>(conn)?
        .into_iter()
        .filter_map(RecipeTranslation::into_row)
        .collect();

    let ingredients = load_ingredients(conn, recipe_id)?;
    let steps = load_steps(conn, recipe_id)?;
    let tag_rows = load_tags(conn, recipe_id)?;

    let nutrition = recipe_nutrition::table
        .filter(recipe_nutrition::recipe_id.eq(recipe_id))
        .select(RecipeNutrition::as_select())
        .first::<RecipeNutrition>(conn)
        .optional()?
        .map(RecipeNutrition::into_facts);

    let times = recipe_times::table
        .inner_join(times::table)
        .filter(recipe_times::recipe_id.eq(recipe_id))
        .order(times::name.asc())
        .select((times::name, recipe_times::minutes))
        .load::<(Option<String>, i32)>(conn)?
        .into_iter()
        .map(|(name, minutes)| NamedTime { name, minutes })
        .collect();

    Ok(Some(RecipeBundle {
        recipe: recipe.into_row(),
        translations,
        ingredients,
        steps,
        tags: tag_rows,
        nutrition,
        times,
    }))
}

/// Resolve a language-scoped slug to its recipe and load the bundle.
pub fn load_recipe_bundle_by_slug(
    conn: &mut PgConnection,
    lang: Language,
    slug: &str,
) -> QueryResult<Option<RecipeBundle>> {
    let recipe_id: Option<Uuid> = recipe_translations::table
        .filter(recipe_translations::lang.eq(lang.as_str()))
        .filter(recipe_translations::slug.eq(slug))
        .select(recipe_translations::recipe_id)
        .first(conn)
        .optional()?;
    match recipe_id {
        Some(id) => load_recipe_bundle(conn, id),
        None => Ok(None),
    }
}

fn load_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> QueryResult<Vec<cocotte_core::types::IngredientEntryRow>> {
    let usage_rows: Vec<(RecipeIngredient, Option<Ingredient>)> = recipe_ingredients::table
        .left_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq(recipe_id))
        .order(recipe_ingredients::position.asc())
        .select((RecipeIngredient::as_select(), Option::<Ingredient>::as_select()))
        .load(conn)?;

    let ingredient_ids: Vec<Uuid> =
        usage_rows.iter().filter_map(|(usage, _)| usage.ingredient_id).collect();
    let mut names_by_ingredient: HashMap<Uuid, Vec<NameTranslation>> = HashMap::new();
    if !ingredient_ids.is_empty() {
        let name_models: Vec<IngredientTranslation> = ingredient_translations::table
            .filter(ingredient_translations::ingredient_id.eq_any(&ingredient_ids))
            .select(IngredientTranslation::as_select())
            .load(conn)?;
        for model in name_models {
            let ingredient_id = model.ingredient_id;
            if let Some(name) = model.into_name() {
                names_by_ingredient.entry(ingredient_id).or_default().push(name);
            }
        }
    }

    Ok(usage_rows
        .into_iter()
        .map(|(usage, ingredient)| {
            // The same ingredient can appear in several sections, so look
            // its names up by reference instead of consuming them.
            let translations = ingredient
                .as_ref()
                .and_then(|i| names_by_ingredient.get(&i.id).cloned())
                .unwrap_or_default();
            usage.into_entry(ingredient, translations)
        })
        .collect())
}

fn load_steps(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> QueryResult<Vec<cocotte_core::types::StepRow>> {
    let step_models: Vec<RecipeStep> = recipe_steps::table
        .filter(recipe_steps::recipe_id.eq(recipe_id))
        .order(recipe_steps::position.asc())
        .select(RecipeStep::as_select())
        .load(conn)?;

    let step_ids: Vec<Uuid> = step_models.iter().map(|s| s.id).collect();
    let mut translations_by_step: HashMap<Uuid, Vec<StepTranslation>> = HashMap::new();
    if !step_ids.is_empty() {
        let translation_models: Vec<RecipeStepTranslation> = recipe_step_translations::table
            .filter(recipe_step_translations::recipe_step_id.eq_any(&step_ids))
            .select(RecipeStepTranslation::as_select())
            .load(conn)?;
        for model in translation_models {
            let step_id = model.recipe_step_id;
            if let Some(row) = model.into_row() {
                translations_by_step.entry(step_id).or_default().push(row);
            }
        }
    }

    Ok(step_models
        .into_iter()
        .map(|step| {
            let translations = translations_by_step.remove(&step.id).unwrap_or_default();
            step.into_row(translations)
        })
        .collect())
}

fn load_tags(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> QueryResult<Vec<cocotte_core::types::TagRow>> {
    let tag_models: Vec<Tag> = recipe_tags::table
        .inner_join(tags::table)
        .filter(recipe_tags::recipe_id.eq(recipe_id))
        .select(Tag::as_select())
        .load(conn)?;

    let tag_ids: Vec<Uuid> = tag_models.iter().map(|t| t.id).collect();
    let mut names_by_tag: HashMap<Uuid, Vec<NameTranslation>> = HashMap::new();
    if !tag_ids.is_empty() {
        let name_models: Vec<TagTranslation> = tag_translations::table
            .filter(tag_translations::tag_id.eq_any(&tag_ids))
            .select(TagTranslation::as_select())
            .load(conn)?;
        for model in name_models {
            let tag_id = model.tag_id;
            if let Some(name) = model.into_name() {
                names_by_tag.entry(tag_id).or_default().push(name);
            }
        }
    }

    Ok(tag_models
        .into_iter()
        .map(|tag| {
            let translations = names_by_tag.remove(&tag.id).unwrap_or_default();
            tag.into_row(translations)
        })
        .collect())
}
