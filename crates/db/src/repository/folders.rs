//! Folder repository functions.
//!
//! dArchiva models folders as a `nodes` row (`ctype = 'folder'`) plus a
//! `folders` row keyed by the node id.  Special folders (home, inbox) get an
//! additional `special_folders` row tying them to their owner.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SpecialFolderKind;
use crate::DbError;

/// Insert a folder: one `nodes` row and one `folders` row.
///
/// Two statements, no transaction — a failure between them is recovered by
/// re-running the seeder, which skips the owning user entirely.
pub async fn insert_folder(
    pool: &PgPool,
    node_id: Uuid,
    title: &str,
    parent_id: Option<Uuid>,
    created_by: Uuid,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO nodes (id, title, ctype, lang, parent_id, created_at, updated_at, created_by, updated_by)
        VALUES ($1, $2, 'folder', 'eng', $3, NOW(), NOW(), $4, $4)
        "#,
    )
    .bind(node_id)
    .bind(title)
    .bind(parent_id)
    .bind(created_by)
    .execute(pool)
    .await?;

    sqlx::query("INSERT INTO folders (node_id) VALUES ($1)")
        .bind(node_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Register a folder as a user's special folder (home or inbox).
pub async fn insert_special_folder(
    pool: &PgPool,
    owner_id: Uuid,
    kind: SpecialFolderKind,
    folder_id: Uuid,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO special_folders (id, owner_type, owner_id, folder_type, folder_id, created_at, updated_at)
        VALUES ($1, 'user', $2, $3, $4, NOW(), NOW())
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(owner_id)
    .bind(kind.to_string())
    .bind(folder_id)
    .execute(pool)
    .await?;

    Ok(())
}
