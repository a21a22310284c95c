//! Write operations: view counting and favorites.

use diesel::prelude::*;
use uuid::Uuid;

use crate::models::NewFavorite;
use crate::schema::{recipes, user_favorites};

/// Bump a recipe's view counter and return the new value. `Ok(None)` when
/// the recipe does not exist. Deliberately does not touch `updated_at`;
/// being viewed is not an edit.
pub fn increment_view_count(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> QueryResult<Option<i32>> {
    diesel::update(recipes::table.find(recipe_id))
        .set(recipes::view_count.eq(recipes::view_count + 1))
        .returning(recipes::view_count)
        .get_result(conn)
        .optional()
}

/// Mark a recipe as a user's favorite. Idempotent: favoriting twice is one
/// favorite.
pub fn add_favorite(conn: &mut PgConnection, user_id: Uuid, recipe_id: Uuid) -> QueryResult<()> {
    diesel::insert_into(user_favorites::table)
        .values(&NewFavorite { user_id, recipe_id })
        .on_conflict((user_favorites::user_id, user_favorites::recipe_id))
        .do_nothing()
        .execute(conn)?;
    Ok(())
}

/// Remove a favorite, reporting how many rows went away. Zero is fine;
/// unfavoriting something never favorited is a no-op.
pub fn remove_favorite(
    conn: &mut PgConnection,
    user_id: Uuid,
    recipe_id: Uuid,
) -> QueryResult<usize> {
    diesel::delete(
        user_favorites::table
            .filter(user_favorites::user_id.eq(user_id))
            .filter(user_favorites::recipe_id.eq(recipe_id)),
    )
    .execute(conn)
}
