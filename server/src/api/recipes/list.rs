use crate::db::DbPool;
use crate::store;
use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use cocotte_core::{ListingQuery, PageInfo, Pagination, RecipeCard};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageInfoResponse {
    /// 1-based page number that was served
    pub page: i64,
    /// Page size that was applied
    pub limit: i64,
    /// Total number of recipes matching the filters
    pub total: i64,
    /// Total number of pages at this page size
    pub total_pages: i64,
}

impl From<PageInfo> for PageInfoResponse {
    fn from(info: PageInfo) -> Self {
        PageInfoResponse {
            page: info.page,
            limit: info.limit,
            total: info.total,
            total_pages: info.total_pages,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeCardResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub season: Vec<String>,
    pub difficulty: Option<String>,
    pub total_time: Option<i32>,
    pub servings: Option<i32>,
    pub featured: bool,
    pub rating: Option<f32>,
    pub calories: Option<f32>,
    pub protein: Option<f32>,
}

impl From<RecipeCard> for RecipeCardResponse {
    fn from(card: RecipeCard) -> Self {
        RecipeCardResponse {
            id: card.id,
            slug: card.slug,
            title: card.title,
            description: card.description,
            image_url: card.image_url,
            season: card.season.iter().map(|s| s.as_str().to_string()).collect(),
            difficulty: card.difficulty.map(|d| d.as_str().to_string()),
            total_time: card.total_time,
            servings: card.servings,
            featured: card.featured,
            rating: card.rating,
            calories: card.calories,
            protein: card.protein,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeCardResponse>,
    pub pagination: PageInfoResponse,
    /// Set when the store could not be queried; the page is then empty but
    /// the response is still well-formed.
    pub error: Option<String>,
}

/// A listing failure degrades to an empty page with an error note so the
/// grid can render its empty state instead of breaking the whole page.
fn degraded(pagination: Pagination, message: &str) -> Response {
    (
        StatusCode::OK,
        Json(ListRecipesResponse {
            recipes: vec![],
            pagination: pagination.page_info(0).into(),
            error: Some(message.to_string()),
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(
        ("lang" = Option<String>, Query, description = "Display language code (en, es, fr, nl). Defaults to en."),
        ("page" = Option<i64>, Query, description = "1-based page number (default 1)"),
        ("limit" = Option<i64>, Query, description = "Page size (default 12, max 100)"),
        ("search" = Option<String>, Query, description = "Substring match on localized and canonical title/description"),
        ("difficulty" = Option<String>, Query, description = "easy, medium or hard"),
        ("minTime" = Option<i32>, Query, description = "Minimum total time in minutes"),
        ("maxTime" = Option<i32>, Query, description = "Maximum total time in minutes"),
        ("season" = Option<String>, Query, description = "spring, summer, autumn or winter"),
        ("category" = Option<String>, Query, description = "Category id; repeat the key to match any of several"),
        ("tag" = Option<String>, Query, description = "Tag id; repeat the key to match any of several"),
        ("featured" = Option<bool>, Query, description = "Only featured (or only non-featured) recipes"),
        ("sort" = Option<String>, Query, description = "newest (default), popular, rating or quickest"),
        ("rating" = Option<f32>, Query, description = "Minimum average rating, 0 to 5"),
    ),
    responses(
        (status = 200, description = "One page of recipe cards; on store failure an empty page with the error field set", body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<Arc<DbPool>>,
    RawQuery(raw): RawQuery,
) -> impl IntoResponse {
    // The filter vocabulary allows repeated keys (tag, category), which
    // Query<T> cannot express, so the raw string is parsed by the core
    // codec instead. Malformed values are ignored, never 400s.
    let raw = raw.unwrap_or_default();
    let ListingQuery { lang, pagination, filters } = ListingQuery::from_query(&raw);

    let mut conn = match pool.get() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to get database connection: {}", e);
            return degraded(pagination, "Database connection failed");
        }
    };

    match store::list::list_recipes(&mut conn, &filters, pagination, lang) {
        Ok(page) => (
            StatusCode::OK,
            Json(ListRecipesResponse {
                recipes: page.cards.into_iter().map(RecipeCardResponse::from).collect(),
                pagination: pagination.page_info(page.total).into(),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            degraded(pagination, "Failed to fetch recipes")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cocotte_core::{Difficulty, Season};

    #[test]
    fn test_card_enums_serialize_as_lowercase_strings() {
        let card = RecipeCard {
            id: Uuid::from_u128(9),
            slug: "tarte-tatin".to_string(),
            title: "Tarte Tatin".to_string(),
            description: None,
            image_url: None,
            season: vec![Season::Autumn],
            difficulty: Some(Difficulty::Medium),
            total_time: Some(90),
            servings: Some(6),
            featured: true,
            rating: Some(4.5),
            calories: None,
            protein: None,
        };
        let json = serde_json::to_value(RecipeCardResponse::from(card)).unwrap();
        assert_eq!(json["season"][0], "autumn");
        assert_eq!(json["difficulty"], "medium");
        assert_eq!(json["featured"], true);
    }

    #[test]
    fn test_page_info_projection() {
        let info = Pagination::new(Some(2), Some(10)).page_info(25);
        let page: PageInfoResponse = info.into();
        assert_eq!(page.page, 2);
        assert_eq!(page.limit, 10);
        assert_eq!(page.total, 25);
        assert_eq!(page.total_pages, 3);
    }
}
