use crate::api::{ErrorResponse, LangParam};
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub slug: String,
    /// Name in the requested language
    pub name: String,
    pub icon: Option<String>,
    /// Number of recipes filed under this category
    pub recipe_count: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    params(LangParam),
    responses(
        (status = 200, description = "All categories with localized names and recipe counts", body = CategoriesResponse),
        (status = 500, description = "Failed to fetch categories", body = ErrorResponse)
    )
)]
pub async fn list_categories(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<LangParam>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);
    let lang = params.language();

    match store::catalog::list_categories(&mut conn, lang) {
        Ok(categories) => (
            StatusCode::OK,
            Json(CategoriesResponse {
                categories: categories
                    .into_iter()
                    .map(|c| CategoryResponse {
                        id: c.id,
                        slug: c.slug,
                        name: c.name,
                        icon: c.icon,
                        recipe_count: c.recipe_count,
                    })
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch categories: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch categories".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(list_categories),
    components(schemas(CategoriesResponse, CategoryResponse))
)]
pub struct ApiDoc;
