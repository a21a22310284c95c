//! Filtered, sorted, paginated recipe listing.

use std::collections::HashMap;

use diesel::pg::Pg;
use diesel::prelude::*;
use uuid::Uuid;

use cocotte_core::types::{NutritionFacts, RecipeRow, RecipeTranslationRow};
use cocotte_core::{Language, Pagination, RecipeCard, RecipeFilters, SortBy};

use crate::models::{Recipe, RecipeNutrition, RecipeTranslation};
use crate::raw_sql;
use crate::schema::{recipe_categories, recipe_nutrition, recipe_tags, recipe_translations, recipes};
use crate::store::{escape_like, parse_ids};

/// One page of listing results plus the total match count.
#[derive(Debug)]
pub struct RecipePage {
    pub cards: Vec<RecipeCard>,
    pub total: i64,
}

/// Apply the advisory filters to a boxed recipes query.
///
/// Text search matches translated title and description in the display
/// language, plus the canonical text on the base row. Tag and category
/// filters are OR within each collection: a recipe matches if it carries
/// any of the requested ids. A collection filter whose ids all turn out
/// malformed matches nothing rather than everything.
fn filtered(filters: &RecipeFilters, lang: Language) -> recipes::BoxedQuery<'static, Pg> {
    let mut query = recipes::table.into_boxed();

    if let Some(search) = filters.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", escape_like(search.trim()));
        let translated = recipe_translations::table
            .filter(recipe_translations::lang.eq(lang.as_str()))
            .filter(
                recipe_translations::title
                    .ilike(pattern.clone())
                    .or(recipe_translations::description.ilike(pattern.clone())),
            )
            .select(recipe_translations::recipe_id);
        query = query.filter(
            recipes::id
                .eq_any(translated)
                .or(recipes::title.ilike(pattern.clone()))
                .or(recipes::description.ilike(pattern)),
        );
    }

    if let Some(difficulty) = filters.difficulty {
        query = query.filter(recipes::difficulty.eq(difficulty.as_str()));
    }

    if let Some(season) = filters.season {
        query = query.filter(recipes::season.contains(vec![Some(season.as_str().to_string())]));
    }

    if let Some(min) = filters.min_time {
        query = query.filter(recipes::total_time.ge(min));
    }

    if let Some(max) = filters.max_time {
        query = query.filter(recipes::total_time.le(max));
    }

    if let Some(featured) = filters.featured {
        query = query.filter(recipes::featured.eq(featured));
    }

    if let Some(rating) = filters.min_rating {
        query = query.filter(recipes::rating.ge(rating));
    }

    if !filters.tags.is_empty() {
        let tagged = recipe_tags::table
            .filter(recipe_tags::tag_id.eq_any(parse_ids(&filters.tags)))
            .select(recipe_tags::recipe_id);
        query = query.filter(recipes::id.eq_any(tagged));
    }

    if !filters.categories.is_empty() {
        let categorized = recipe_categories::table
            .filter(recipe_categories::category_id.eq_any(parse_ids(&filters.categories)))
            .select(recipe_categories::recipe_id);
        query = query.filter(recipes::id.eq_any(categorized));
    }

    query
}

/// Run the listing query and project the page into cards.
pub fn list_recipes(
    conn: &mut PgConnection,
    filters: &RecipeFilters,
    pagination: Pagination,
    lang: Language,
) -> QueryResult<RecipePage> {
    let query = match filters.sort {
        SortBy::Newest => filtered(filters, lang).order(recipes::created_at.desc()),
        SortBy::Popular => filtered(filters, lang)
            .order((recipes::view_count.desc(), recipes::created_at.desc())),
        SortBy::Rating => filtered(filters, lang).order((
            recipes::rating.desc().nulls_last(),
            recipes::rating_count.desc(),
            recipes::created_at.desc(),
        )),
        SortBy::Quickest => filtered(filters, lang)
            .order((recipes::total_time.asc().nulls_last(), recipes::created_at.desc())),
    };

    // COUNT(*) OVER() carries the total match count on every row, saving a
    // second round trip on the common path.
    let rows: Vec<(Recipe, i64)> = query
        .select((Recipe::as_select(), raw_sql::count_over()))
        .limit(pagination.limit)
        .offset(pagination.offset())
        .load(conn)?;

    let total = match rows.first() {
        Some((_, count)) => *count,
        // A page past the end returns no rows and therefore no window
        // count; re-count so the metadata stays correct.
        None if pagination.page > 1 => filtered(filters, lang).count().get_result(conn)?,
        None => 0,
    };

    let recipe_rows: Vec<RecipeRow> = rows.into_iter().map(|(r, _)| r.into_row()).collect();
    let ids: Vec<Uuid> = recipe_rows.iter().map(|r| r.id).collect();

    let mut translations_by_recipe: HashMap<Uuid, Vec<RecipeTranslationRow>> = HashMap::new();
    if !ids.is_empty() {
        let translation_models: Vec<RecipeTranslation> = recipe_translations::table
            .filter(recipe_translations::recipe_id.eq_any(&ids))
            .select(RecipeTranslation::as_select())
            .load(conn)?;
        for model in translation_models {
            let recipe_id = model.recipe_id;
            if let Some(row) = model.into_row() {
                translations_by_recipe.entry(recipe_id).or_default().push(row);
            }
        }
    }

    let mut nutrition_by_recipe: HashMap<Uuid, NutritionFacts> = HashMap::new();
    if !ids.is_empty() {
        let nutrition_models: Vec<RecipeNutrition> = recipe_nutrition::table
            .filter(recipe_nutrition::recipe_id.eq_any(&ids))
            .select(RecipeNutrition::as_select())
            .load(conn)?;
        for model in nutrition_models {
            nutrition_by_recipe.insert(model.recipe_id, model.into_facts());
        }
    }

    let cards = recipe_rows
        .iter()
        .map(|recipe| {
            RecipeCard::from_row(
                recipe,
                translations_by_recipe
                    .get(&recipe.id)
                    .map(|v| v.as_slice())
                    .unwrap_or(&[]),
                nutrition_by_recipe.get(&recipe.id),
                lang,
            )
        })
        .collect();

    Ok(RecipePage { cards, total })
}
