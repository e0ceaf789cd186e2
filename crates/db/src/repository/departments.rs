//! Department repository functions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::DepartmentRow;
use crate::DbError;

/// Fetch a live (non-soft-deleted) department by name.
pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<DepartmentRow>, DbError> {
    let row = sqlx::query_as::<_, DepartmentRow>(
        r#"
        SELECT id, name, code, description, is_active
        FROM departments
        WHERE name = $1 AND deleted_at IS NULL
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Insert a new active department.
pub async fn insert(
    pool: &PgPool,
    id: Uuid,
    name: &str,
    code: &str,
    description: &str,
    created_by: Uuid,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO departments (id, name, code, description, is_active, created_at, updated_at, created_by, updated_by)
        VALUES ($1, $2, $3, $4, true, NOW(), NOW(), $5, $5)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(code)
    .bind(description)
    .bind(created_by)
    .execute(pool)
    .await?;

    Ok(())
}

/// Make `user_id` a primary member of `department_id`.
///
/// `ON CONFLICT DO NOTHING` keeps repeat seeder runs from duplicating the
/// membership row.
pub async fn assign_user(
    pool: &PgPool,
    user_id: Uuid,
    department_id: Uuid,
    created_by: Uuid,
) -> Result<(), DbError> {
    sqlx::query(
        r#"
        INSERT INTO user_departments (id, user_id, department_id, is_primary, created_at, updated_at, created_by, updated_by)
        VALUES ($1, $2, $3, true, NOW(), NOW(), $4, $4)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(department_id)
    .bind(created_by)
    .execute(pool)
    .await?;

    Ok(())
}
