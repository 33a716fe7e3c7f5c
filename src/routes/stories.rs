use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::Story;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateStory {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub rank: i32,
}

pub async fn list_by_project(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Story>>, AppError> {
    let mut project = db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    db::projects::load_stories(&state.pool, std::slice::from_mut(&mut project)).await?;
    if !project.stories_consistent() {
        return Err(AppError::Internal(format!(
            "Stories loaded for project {project_id} reference another project"
        )));
    }

    Ok(Json(project.stories().to_vec()))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateStory>,
) -> Result<Json<Story>, AppError> {
    db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let mut story = Story::new(req.name, Some(project_id));
    story.description = req.description;
    story.rank = req.rank;

    let story = db::stories::create(&state.pool, &story)
        .await
        .map_err(|e| AppError::from_write(e, "Story not found", "Project not found"))?;

    tracing::info!(story_id = %story.id, %project_id, "story created");
    Ok(Json(story))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Story>, AppError> {
    let story = db::stories::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Story not found".to_string()))?;
    Ok(Json(story))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::stories::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Story not found".to_string()));
    }

    tracing::info!(story_id = %id, "story deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
