use sqlx::PgPool;
use uuid::Uuid;

use crate::mapping::Mapped;
use crate::models::{Project, Story};

const PRIORITY_ORDER: &str = "rank ASC, created_at ASC";

/// Persists a new project. Binds follow the column order of `Project::MAPPING`.
pub async fn create(pool: &PgPool, project: &Project) -> Result<Project, sqlx::Error> {
    let sql = Project::MAPPING.insert();
    let backlog = project.backlog();
    sqlx::query_as::<_, Project>(&sql)
        .bind(backlog.id)
        .bind(&backlog.name)
        .bind(&backlog.description)
        .bind(backlog.created_at)
        .bind(backlog.updated_at)
        .bind(project.product_id())
        .bind(project.project_type_id())
        .bind(project.start_date())
        .bind(project.end_date())
        .bind(project.rank())
        .bind(project.status())
        .fetch_one(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let sql = Project::MAPPING.select_by_id();
    sqlx::query_as::<_, Project>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Projects under a product, highest priority first.
pub async fn list_by_product(pool: &PgPool, product_id: Uuid) -> Result<Vec<Project>, sqlx::Error> {
    let sql = Project::MAPPING.select_where("product_id", PRIORITY_ORDER);
    sqlx::query_as::<_, Project>(&sql)
        .bind(product_id)
        .fetch_all(pool)
        .await
}

/// Writes every mutable field of `project` back to its row.
pub async fn update(pool: &PgPool, project: &Project) -> Result<Project, sqlx::Error> {
    let sql = format!(
        "UPDATE projects SET name = $2, description = $3, product_id = $4,
         project_type_id = $5, start_date = $6, end_date = $7, rank = $8, status = $9,
         updated_at = now()
         WHERE id = $1 RETURNING {}",
        Project::MAPPING.column_list()
    );
    let backlog = project.backlog();
    sqlx::query_as::<_, Project>(&sql)
        .bind(backlog.id)
        .bind(&backlog.name)
        .bind(&backlog.description)
        .bind(project.product_id())
        .bind(project.project_type_id())
        .bind(project.start_date())
        .bind(project.end_date())
        .bind(project.rank())
        .bind(project.status())
        .fetch_one(pool)
        .await
}

pub async fn set_rank(pool: &PgPool, id: Uuid, rank: i32) -> Result<Project, sqlx::Error> {
    let sql = format!(
        "UPDATE projects SET rank = $2, updated_at = now() WHERE id = $1 RETURNING {}",
        Project::MAPPING.column_list()
    );
    sqlx::query_as::<_, Project>(&sql)
        .bind(id)
        .bind(rank)
        .fetch_one(pool)
        .await
}

/// Stories of a deleted project stay behind with no owner.
pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Fills `stories` on each project, one query per `batch_size` projects.
pub async fn load_stories(pool: &PgPool, projects: &mut [Project]) -> Result<(), sqlx::Error> {
    let mapping = Project::MAPPING;
    let Some(sql) = mapping.select_related("stories", PRIORITY_ORDER) else {
        tracing::warn!("No stories relation mapped for {}", mapping.table);
        return Ok(());
    };

    for chunk in projects.chunks_mut(mapping.batch_size) {
        let ids: Vec<Uuid> = chunk.iter().map(Project::id).collect();
        let stories = sqlx::query_as::<_, Story>(&sql)
            .bind(&ids)
            .fetch_all(pool)
            .await?;

        for project in chunk.iter_mut() {
            let id = project.id();
            let owned = stories
                .iter()
                .filter(|s| s.project_id == Some(id))
                .cloned()
                .collect();
            project.set_stories(owned);
        }
    }

    Ok(())
}
