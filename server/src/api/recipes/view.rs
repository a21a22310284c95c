use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::store;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViewCountResponse {
    pub view_count: i32,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/view",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "View recorded; returns the new count", body = ViewCountResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn record_view(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::mutate::increment_view_count(&mut conn, id) {
        Ok(Some(view_count)) => (StatusCode::OK, Json(ViewCountResponse { view_count })).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to record view for recipe {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to record view".to_string(),
                }),
            )
                .into_response()
        }
    }
}
