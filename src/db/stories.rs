use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Story;

pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Story>, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        "SELECT * FROM stories WHERE project_id = $1 ORDER BY rank ASC, created_at ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

pub async fn create(pool: &PgPool, story: &Story) -> Result<Story, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        "INSERT INTO stories (id, project_id, name, description, rank, created_at)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(story.id)
    .bind(story.project_id)
    .bind(&story.name)
    .bind(&story.description)
    .bind(story.rank)
    .bind(story.created_at)
    .fetch_one(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Story>, sqlx::Error> {
    sqlx::query_as::<_, Story>("SELECT * FROM stories WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM stories WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
