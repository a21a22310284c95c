pub mod get;
pub mod list;
pub mod paths;
pub mod view;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/recipes endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_recipes))
        .route("/paths", get(paths::list_paths))
        .route("/by-slug/{lang}/{slug}", get(get::get_recipe_by_slug))
        .route("/{id}", get(get::get_recipe))
        .route("/{id}/view", post(view::record_view))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_recipes,
        get::get_recipe,
        get::get_recipe_by_slug,
        paths::list_paths,
        view::record_view,
    ),
    components(schemas(
        list::ListRecipesResponse,
        list::RecipeCardResponse,
        list::PageInfoResponse,
        get::RecipeResponse,
        get::IngredientResponse,
        get::StepResponse,
        get::NutritionResponse,
        get::TagResponse,
        get::TimeResponse,
        paths::PathsResponse,
        paths::RecipePathResponse,
        view::ViewCountResponse,
    ))
)]
pub struct ApiDoc;
