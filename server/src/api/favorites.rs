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
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

#[utoipa::path(
    put,
    path = "/api/users/{user_id}/favorites/{recipe_id}",
    tag = "favorites",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 204, description = "Recipe favorited (idempotent)"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn add_favorite(
    State(pool): State<Arc<DbPool>>,
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    match store::mutate::add_favorite(&mut conn, user_id, recipe_id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _)) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to favorite recipe {} for user {}: {}",
                recipe_id,
                user_id,
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to favorite recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/{recipe_id}",
    tag = "favorites",
    params(
        ("user_id" = Uuid, Path, description = "User ID"),
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 204, description = "Recipe unfavorited; also returned when it was not a favorite"),
        (status = 500, description = "Failed to unfavorite recipe", body = ErrorResponse)
    )
)]
pub async fn remove_favorite(
    State(pool): State<Arc<DbPool>>,
    Path((user_id, recipe_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Removing a favorite that does not exist is not an error.
    match store::mutate::remove_favorite(&mut conn, user_id, recipe_id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!(
                "Failed to unfavorite recipe {} for user {}: {}",
                recipe_id,
                user_id,
                e
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to unfavorite recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[derive(OpenApi)]
#[openapi(paths(add_favorite, remove_favorite))]
pub struct ApiDoc;
