//! Document type repository functions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::DocumentTypeRow;
use crate::DbError;

/// Fetch a live (non-soft-deleted) document type by name.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<DocumentTypeRow>, DbError> {
    let row = sqlx::query_as::<_, DocumentTypeRow>(
        r#"
        SELECT id, name
        FROM document_types
        WHERE name = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new document type.
pub async fn insert(pool: &PgPool, id: Uuid, name: &str, created_by: Uuid) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO document_types (id, name, created_at, updated_at, created_by, updated_by)
        VALUES ($1, $2, NOW(), NOW(), $3, $3)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(created_by)
    .execute(pool)
    .await?;

    Ok(())
}
