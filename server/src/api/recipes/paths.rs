use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use cocotte_core::lang::recipe_path;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipePathResponse {
    pub recipe_id: Uuid,
    pub lang: String,
    pub slug: String,
    /// Site-relative page path, e.g. `/fr/recipes/soupe-a-l-oignon`
    pub path: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PathsResponse {
    pub paths: Vec<RecipePathResponse>,
}

/// Every `(lang, slug)` address a recipe page exists at. Static page
/// generation walks this list; there is deliberately no fallback here,
/// a page only exists in languages the recipe is translated into.
#[utoipa::path(
    get,
    path = "/api/recipes/paths",
    tag = "recipes",
    responses(
        (status = 200, description = "All localized recipe page paths", body = PathsResponse),
        (status = 500, description = "Failed to fetch paths", body = ErrorResponse)
    )
)]
pub async fn list_paths(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::catalog::list_recipe_paths(&mut conn) {
        Ok(paths) => {
            let paths = paths
                .into_iter()
                .map(|p| RecipePathResponse {
                    path: recipe_path(p.lang, &p.slug),
                    recipe_id: p.recipe_id,
                    lang: p.lang.as_str().to_string(),
                    slug: p.slug,
                    title: p.title,
                    description: p.description,
                    image_url: p.image_url,
                })
                .collect();
            (StatusCode::OK, Json(PathsResponse { paths })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to list recipe paths: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe paths".to_string(),
                }),
            )
                .into_response()
        }
    }
}
