//! User repository functions.

use sqlx::PgPool;

use crate::models::{NewUser, UserRow};
use crate::DbError;

/// Fetch a user by username, or `None` if no such account exists.
pub async fn find_by_username(pool: &PgPool, username: &str) -> Result<Option<UserRow>, DbError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, username, email, first_name, last_name, is_active, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new demo user.
///
/// The caller must have created the user's home and inbox folders first and
/// disabled the special-folder trigger — the product normally provisions
/// those folders itself on insert.
pub async fn insert(pool: &PgPool, user: &NewUser<'_>) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO users (id, username, email, password, first_name, last_name,
            is_active, is_superuser, is_staff, tenant_id, created_at, updated_at, date_joined)
        VALUES ($1, $2, $3, $4, $5, $6, true, false, false, $7, NOW(), NOW(), NOW())
        "#,
    )
    .bind(user.id)
    .bind(user.username)
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.first_name)
    .bind(user.last_name)
    .bind(user.tenant_id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Toggle the trigger that auto-provisions special folders on user insert.
///
/// The seeder creates the folders explicitly, so the trigger must be off
/// while demo users are inserted and back on afterwards.
pub async fn set_special_folder_trigger(pool: &PgPool, enabled: bool) -> Result<(), DbError> {
    let sql = if enabled {
        "ALTER TABLE users ENABLE TRIGGER ensure_user_special_folders_after_insert"
    } else {
        "ALTER TABLE users DISABLE TRIGGER ensure_user_special_folders_after_insert"
    };

    sqlx::query(sql).execute(pool).await?;
    Ok(())
}
