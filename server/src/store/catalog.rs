//! Localized tag and category listings, plus the localized path set used
//! to prebuild detail pages.

use std::collections::HashMap;

use diesel::dsl::count_star;
use diesel::prelude::*;
use uuid::Uuid;

use cocotte_core::types::NameTranslation;
use cocotte_core::{resolve_translation, Language};

use crate::models::{Category, CategoryTranslation, RecipeTranslation, Tag, TagTranslation};
use crate::schema::{
    categories, category_translations, recipe_categories, recipe_translations, recipes,
    tag_translations, tags,
};

/// A tag with its display name resolved to one language.
#[derive(Debug, Clone)]
pub struct TagItem {
    pub id: Uuid,
    pub name: String,
}

/// All tags, names resolved to `lang`, sorted alphabetically by the
/// resolved name.
pub fn list_tags(conn: &mut PgConnection, lang: Language) -> QueryResult<Vec<TagItem>> {
    let tag_models: Vec<Tag> = tags::table.select(Tag::as_select()).load(conn)?;
    let names_by_tag = load_names(
        tag_translations::table
            .select(TagTranslation::as_select())
            .load::<TagTranslation>(conn)?
            .into_iter()
            .map(|t| (t.tag_id, t.into_name())),
    );

    let mut items: Vec<TagItem> = tag_models
        .into_iter()
        .map(|tag| {
            let names = names_by_tag.get(&tag.id).map(|v| v.as_slice()).unwrap_or(&[]);
            let name = resolve_translation(names, lang)
                .map(|n| n.name.clone())
                .unwrap_or(tag.name);
            TagItem { id: tag.id, name }
        })
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

/// A category with its resolved name and how many recipes sit in it.
#[derive(Debug, Clone)]
pub struct CategoryItem {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub icon: Option<String>,
    pub recipe_count: i64,
}

/// All categories in display order with resolved names and recipe counts.
pub fn list_categories(conn: &mut PgConnection, lang: Language) -> QueryResult<Vec<CategoryItem>> {
    let category_models: Vec<Category> = categories::table
        .order((categories::position.asc(), categories::name.asc()))
        .select(Category::as_select())
        .load(conn)?;
    let names_by_category = load_names(
        category_translations::table
            .select(CategoryTranslation::as_select())
            .load::<CategoryTranslation>(conn)?
            .into_iter()
            .map(|t| (t.category_id, t.into_name())),
    );

    let counts: HashMap<Uuid, i64> = recipe_categories::table
        .group_by(recipe_categories::category_id)
        .select((recipe_categories::category_id, count_star()))
        .load::<(Uuid, i64)>(conn)?
        .into_iter()
        .collect();

    Ok(category_models
        .into_iter()
        .map(|category| {
            let names = names_by_category
                .get(&category.id)
                .map(|v| v.as_slice())
                .unwrap_or(&[]);
            let name = resolve_translation(names, lang)
                .map(|n| n.name.clone())
                .unwrap_or(category.name);
            CategoryItem {
                recipe_count: counts.get(&category.id).copied().unwrap_or(0),
                id: category.id,
                slug: category.slug,
                name,
                icon: category.icon,
            }
        })
        .collect())
}

/// One prebuildable detail page: a recipe in one of its languages.
#[derive(Debug, Clone)]
pub struct RecipePath {
    pub recipe_id: Uuid,
    pub lang: Language,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Every `(recipe, language)` pair that has its own translation row. A
/// recipe only gets a page in the languages it is translated into.
pub fn list_recipe_paths(conn: &mut PgConnection) -> QueryResult<Vec<RecipePath>> {
    let rows: Vec<(RecipeTranslation, Option<String>)> = recipe_translations::table
        .inner_join(recipes::table)
        .order((recipe_translations::lang.asc(), recipe_translations::slug.asc()))
        .select((RecipeTranslation::as_select(), recipes::image_url))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .filter_map(|(translation, image_url)| {
            let recipe_id = translation.recipe_id;
            let row = translation.into_row()?;
            Some(RecipePath {
                recipe_id,
                lang: row.lang,
                slug: row.slug,
                title: row.title,
                description: row.description,
                image_url,
            })
        })
        .collect())
}

fn load_names<I>(rows: I) -> HashMap<Uuid, Vec<NameTranslation>>
where
    I: Iterator<Item = (Uuid, Option<NameTranslation>)>,
{
    let mut map: HashMap<Uuid, Vec<NameTranslation>> = HashMap::new();
    for (id, name) in rows {
        if let Some(name) = name {
            map.entry(id).or_default().push(name);
        }
    }
    map
}
