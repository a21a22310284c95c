//! Merges a [`RecipeBundle`] into a single-language [`FullLocalizedRecipe`].
//!
//! Assembly is total: data gaps degrade field by field instead of failing
//! the whole recipe. A missing translation falls back per the resolver
//! chain, a step with no usable instruction anywhere and an ingredient
//! entry without an ingredient record are dropped with a warning, and an
//! absent nutrition record stays absent. Blank text never survives into
//! the output; canonical text on the base record is the floor.

use crate::lang::Language;
use crate::localize::resolve_translation;
use crate::types::{
    FullLocalizedRecipe, LocalizedIngredient, LocalizedStep, LocalizedTag, RecipeBundle,
};

pub(crate) fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Recipe-level text fields after translation resolution.
pub(crate) struct ResolvedText {
    pub lang: Language,
    pub title: String,
    pub description: Option<String>,
    pub slug: String,
}

/// Resolve title, description and slug against the translation set, with
/// canonical text as the floor. The slug degrades to the recipe id when no
/// translation row carries one, so links stay constructible.
pub(crate) fn resolve_recipe_text(
    recipe: &crate::types::RecipeRow,
    translations: &[crate::types::RecipeTranslationRow],
    lang: Language,
) -> ResolvedText {
    match resolve_translation(translations, lang) {
        Some(t) => ResolvedText {
            lang: t.lang,
            title: non_blank(&t.title).unwrap_or_else(|| recipe.title.clone()),
            description: t
                .description
                .as_deref()
                .and_then(non_blank)
                .or_else(|| recipe.description.clone()),
            slug: non_blank(&t.slug).unwrap_or_else(|| recipe.id.to_string()),
        },
        None => {
            tracing::warn!(recipe_id = %recipe.id, "recipe has no translation rows, serving canonical text");
            ResolvedText {
                lang,
                title: recipe.title.clone(),
                description: recipe.description.clone(),
                slug: recipe.id.to_string(),
            }
        }
    }
}

/// Resolve every translatable field of `bundle` to `lang` and produce the
/// renderable view-model.
pub fn assemble_recipe(bundle: RecipeBundle, lang: Language) -> FullLocalizedRecipe {
    let RecipeBundle {
        recipe,
        translations,
        ingredients,
        steps,
        tags,
        nutrition,
        times,
    } = bundle;

    let ResolvedText {
        lang: resolved_lang,
        title,
        description,
        slug,
    } = resolve_recipe_text(&recipe, &translations, lang);

    let mut localized_ingredients: Vec<LocalizedIngredient> = ingredients
        .into_iter()
        .filter_map(|entry| {
            let Some(ingredient) = entry.ingredient else {
                tracing::warn!(
                    recipe_id = %recipe.id,
                    entry_id = %entry.id,
                    "ingredient entry without ingredient record, dropping"
                );
                return None;
            };
            let name = resolve_translation(&ingredient.translations, lang)
                .and_then(|t| non_blank(&t.name))
                .unwrap_or(ingredient.name);
            Some(LocalizedIngredient {
                id: ingredient.id,
                name,
                quantity: entry.quantity,
                unit: entry.unit,
                section: entry.section,
                note: entry.note,
                position: entry.position,
            })
        })
        .collect();
    // Stable sort keeps authored order for entries sharing a position;
    // entries without one sort as position 0.
    localized_ingredients.sort_by_key(|i| i.position.unwrap_or(0));

    let mut localized_steps: Vec<LocalizedStep> = steps
        .into_iter()
        .filter_map(|step| {
            let instruction = resolve_translation(&step.translations, lang)
                .and_then(|t| non_blank(&t.instruction))
                .or_else(|| step.instruction.as_deref().and_then(non_blank));
            match instruction {
                Some(instruction) => Some(LocalizedStep {
                    position: step.position,
                    instruction,
                    note: step.note,
                }),
                None => {
                    tracing::warn!(
                        recipe_id = %recipe.id,
                        position = step.position,
                        "step has no instruction in any language, dropping"
                    );
                    None
                }
            }
        })
        .collect();
    localized_steps.sort_by_key(|s| s.position);

    let localized_tags: Vec<LocalizedTag> = tags
        .into_iter()
        .map(|tag| {
            let name = resolve_translation(&tag.translations, lang)
                .and_then(|t| non_blank(&t.name))
                .unwrap_or(tag.name);
            LocalizedTag {
                id: tag.id,
                name,
                translations: tag.translations,
            }
        })
        .collect();

    FullLocalizedRecipe {
        id: recipe.id,
        lang: resolved_lang,
        slug,
        title,
        description,
        image_url: recipe.image_url,
        servings: recipe.servings,
        serving_type: recipe.serving_type,
        prep_time: recipe.prep_time,
        cook_time: recipe.cook_time,
        total_time: recipe.total_time,
        difficulty: recipe.difficulty,
        season: recipe.season,
        featured: recipe.featured,
        rating: recipe.rating,
        rating_count: recipe.rating_count,
        ingredients: localized_ingredients,
        steps: localized_steps,
        nutrition,
        tags: localized_tags,
        times,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;
    use uuid::Uuid;

    fn recipe_row(id: u128) -> RecipeRow {
        RecipeRow {
            id: Uuid::from_u128(id),
            title: "Tomato Soup".to_string(),
            description: Some("A classic.".to_string()),
            image_url: None,
            servings: Some(4),
            serving_type: None,
            prep_time: Some(10),
            cook_time: Some(20),
            total_time: Some(30),
            difficulty: Some(Difficulty::Easy),
            season: vec![Season::Summer],
            featured: false,
            rating: None,
            rating_count: 0,
        }
    }

    fn translation(lang: Language, title: &str, slug: &str) -> RecipeTranslationRow {
        RecipeTranslationRow {
            lang,
            title: title.to_string(),
            description: None,
            slug: slug.to_string(),
        }
    }

    fn step(position: i32, canonical: Option<&str>, translations: Vec<(Language, &str)>) -> StepRow {
        StepRow {
            id: Uuid::new_v4(),
            position,
            instruction: canonical.map(String::from),
            note: None,
            translations: translations
                .into_iter()
                .map(|(lang, instruction)| StepTranslation {
                    lang,
                    instruction: instruction.to_string(),
                })
                .collect(),
        }
    }

    fn ingredient_entry(
        position: Option<i32>,
        name: Option<&str>,
    ) -> IngredientEntryRow {
        IngredientEntryRow {
            id: Uuid::new_v4(),
            quantity: Some(1.0),
            unit: None,
            section: None,
            note: None,
            position,
            ingredient: name.map(|n| IngredientRef {
                id: Uuid::new_v4(),
                name: n.to_string(),
                translations: vec![],
            }),
        }
    }

    fn bundle(recipe: RecipeRow) -> RecipeBundle {
        RecipeBundle {
            recipe,
            translations: vec![],
            ingredients: vec![],
            steps: vec![],
            tags: vec![],
            nutrition: None,
            times: vec![],
        }
    }

    #[test]
    fn test_steps_sorted_by_position() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![
            step(3, Some("Serve."), vec![]),
            step(1, Some("Chop."), vec![]),
            step(2, Some("Simmer."), vec![]),
        ];
        let full = assemble_recipe(b, Language::En);
        let instructions: Vec<&str> = full.steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(instructions, vec!["Chop.", "Simmer.", "Serve."]);
    }

    #[test]
    fn test_step_position_ties_keep_input_order() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![
            step(2, Some("First of the tied pair."), vec![]),
            step(2, Some("Second of the tied pair."), vec![]),
            step(1, Some("Opening step."), vec![]),
        ];
        let full = assemble_recipe(b, Language::En);
        let instructions: Vec<&str> = full.steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(
            instructions,
            vec!["Opening step.", "First of the tied pair.", "Second of the tied pair."]
        );
    }

    #[test]
    fn test_step_instruction_falls_back_to_default_language() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![step(
            1,
            None,
            vec![(Language::En, "Chop the tomatoes."), (Language::Nl, "Snijd de tomaten.")],
        )];
        let full = assemble_recipe(b, Language::Fr);
        assert_eq!(full.steps[0].instruction, "Chop the tomatoes.");
    }

    #[test]
    fn test_step_falls_back_to_canonical_instruction() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![step(1, Some("Stir well."), vec![])];
        let full = assemble_recipe(b, Language::Es);
        assert_eq!(full.steps[0].instruction, "Stir well.");
    }

    #[test]
    fn test_step_without_any_instruction_is_dropped() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![
            step(1, Some("Keep me."), vec![]),
            step(2, None, vec![]),
            step(3, Some("   "), vec![]),
        ];
        let full = assemble_recipe(b, Language::En);
        assert_eq!(full.steps.len(), 1);
        assert_eq!(full.steps[0].instruction, "Keep me.");
    }

    #[test]
    fn test_blank_translated_instruction_falls_through() {
        let mut b = bundle(recipe_row(1));
        b.steps = vec![step(1, Some("Canonical text."), vec![(Language::En, "  ")])];
        let full = assemble_recipe(b, Language::En);
        assert_eq!(full.steps[0].instruction, "Canonical text.");
    }

    #[test]
    fn test_ingredients_sorted_missing_position_first() {
        let mut b = bundle(recipe_row(1));
        b.ingredients = vec![
            ingredient_entry(Some(2), Some("salt")),
            ingredient_entry(None, Some("water")),
            ingredient_entry(Some(1), Some("tomato")),
        ];
        let full = assemble_recipe(b, Language::En);
        let names: Vec<&str> = full.ingredients.iter().map(|i| i.name.as_str()).collect();
        // A missing position sorts as 0, ahead of the numbered entries.
        assert_eq!(names, vec!["water", "tomato", "salt"]);
    }

    #[test]
    fn test_ingredient_entry_without_record_is_dropped() {
        let mut b = bundle(recipe_row(1));
        b.ingredients = vec![
            ingredient_entry(Some(1), Some("tomato")),
            ingredient_entry(Some(2), None),
        ];
        let full = assemble_recipe(b, Language::En);
        assert_eq!(full.ingredients.len(), 1);
        assert_eq!(full.ingredients[0].name, "tomato");
    }

    #[test]
    fn test_ingredient_name_resolves_to_requested_language() {
        let mut b = bundle(recipe_row(1));
        let mut entry = ingredient_entry(Some(1), Some("tomato"));
        if let Some(ingredient) = entry.ingredient.as_mut() {
            ingredient.translations = vec![
                NameTranslation { lang: Language::En, name: "tomato".to_string() },
                NameTranslation { lang: Language::Fr, name: "tomate".to_string() },
            ];
        }
        b.ingredients = vec![entry];
        let full = assemble_recipe(b, Language::Fr);
        assert_eq!(full.ingredients[0].name, "tomate");
    }

    #[test]
    fn test_title_falls_back_to_default_language_row() {
        let mut b = bundle(recipe_row(1));
        b.translations = vec![
            translation(Language::En, "Tomato Soup", "tomato-soup"),
            translation(Language::Nl, "Tomatensoep", "tomatensoep"),
        ];
        let full = assemble_recipe(b, Language::Fr);
        assert_eq!(full.title, "Tomato Soup");
        assert_eq!(full.slug, "tomato-soup");
        assert_eq!(full.lang, Language::En);
    }

    #[test]
    fn test_no_translation_rows_serve_canonical_text() {
        let b = bundle(recipe_row(7));
        let full = assemble_recipe(b, Language::Fr);
        assert_eq!(full.title, "Tomato Soup");
        assert_eq!(full.description.as_deref(), Some("A classic."));
        assert_eq!(full.lang, Language::Fr);
        assert_eq!(full.slug, Uuid::from_u128(7).to_string());
    }

    #[test]
    fn test_blank_translated_title_falls_back_to_canonical() {
        let mut b = bundle(recipe_row(1));
        b.translations = vec![translation(Language::En, "   ", "tomato-soup")];
        let full = assemble_recipe(b, Language::En);
        assert_eq!(full.title, "Tomato Soup");
    }

    #[test]
    fn test_absent_nutrition_stays_absent() {
        let b = bundle(recipe_row(1));
        let full = assemble_recipe(b, Language::En);
        assert!(full.nutrition.is_none());
    }

    #[test]
    fn test_nutrition_passes_through() {
        let mut b = bundle(recipe_row(1));
        b.nutrition = Some(NutritionFacts {
            calories: Some(120.0),
            protein: Some(3.5),
            ..NutritionFacts::default()
        });
        let full = assemble_recipe(b, Language::En);
        let nutrition = full.nutrition.unwrap();
        assert_eq!(nutrition.calories, Some(120.0));
        assert_eq!(nutrition.fat, None);
    }

    #[test]
    fn test_tags_keep_full_translation_sets() {
        let mut b = bundle(recipe_row(1));
        b.tags = vec![TagRow {
            id: Uuid::new_v4(),
            name: "vegetarian".to_string(),
            translations: vec![
                NameTranslation { lang: Language::En, name: "vegetarian".to_string() },
                NameTranslation { lang: Language::Fr, name: "végétarien".to_string() },
            ],
        }];
        let full = assemble_recipe(b, Language::Fr);
        assert_eq!(full.tags[0].name, "végétarien");
        assert_eq!(full.tags[0].translations.len(), 2);
    }

    #[test]
    fn test_times_pass_through() {
        let mut b = bundle(recipe_row(1));
        b.times = vec![NamedTime { name: Some("resting".to_string()), minutes: 45 }];
        let full = assemble_recipe(b, Language::En);
        assert_eq!(full.times, vec![NamedTime { name: Some("resting".to_string()), minutes: 45 }]);
    }
}
