use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ProjectType;

pub async fn list(pool: &PgPool) -> Result<Vec<ProjectType>, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>("SELECT * FROM project_types ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn create(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
) -> Result<ProjectType, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>(
        "INSERT INTO project_types (id, name, description) VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(Uuid::now_v7())
    .bind(name)
    .bind(description)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<ProjectType>, sqlx::Error> {
    sqlx::query_as::<_, ProjectType>("SELECT * FROM project_types WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
