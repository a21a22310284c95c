//! Domain logic for the cocotte recipe site.
//!
//! Everything in this crate is pure: translation resolution, recipe
//! assembly, card projection, filter state and pagination arithmetic all
//! operate on plain values handed in by the caller. Store access and HTTP
//! live in the server crate.

pub mod assemble;
pub mod card;
pub mod filters;
pub mod format;
pub mod lang;
pub mod localize;
pub mod page;
pub mod types;

pub use assemble::assemble_recipe;
pub use card::RecipeCard;
pub use filters::{ListingQuery, RecipeFilters, SortBy};
pub use lang::Language;
pub use localize::{resolve_translation, Translated};
pub use page::{PageInfo, Pagination};
pub use types::{
    Difficulty, FullLocalizedRecipe, IngredientEntryRow, IngredientRef, LocalizedIngredient,
    LocalizedStep, LocalizedTag, NameTranslation, NamedTime, NutritionFacts, RecipeBundle,
    RecipeRow, RecipeTranslationRow, Season, StepRow, StepTranslation, TagRow,
};
