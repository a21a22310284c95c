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
pub struct TagItemResponse {
    pub id: Uuid,
    /// Name in the requested language, falling back like any other
    /// translated text.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TagsResponse {
    pub tags: Vec<TagItemResponse>,
}

#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "tags",
    params(LangParam),
    responses(
        (status = 200, description = "All tags with localized names, sorted by name", body = TagsResponse),
        (status = 500, description = "Failed to fetch tags", body = ErrorResponse)
    )
)]
pub async fn list_tags(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<LangParam>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);
    let lang = params.language();

    match store::catalog::list_tags(&mut conn, lang) {
        Ok(tags) => (
            StatusCode::OK,
            Json(TagsResponse {
                tags: tags
                    .into_iter()
                    .map(|t| TagItemResponse {
                        id: t.id,
                        name: t.name,
                    })
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch tags: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch tags".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(list_tags),
    components(schemas(TagsResponse, TagItemResponse))
)]
pub struct ApiDoc;
