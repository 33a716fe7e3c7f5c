use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::models::ProjectType;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateProjectType {
    pub name: String,
    pub description: Option<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<ProjectType>>, AppError> {
    let types = db::project_types::list(&state.pool).await?;
    Ok(Json(types))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProjectType>,
) -> Result<Json<ProjectType>, AppError> {
    let project_type =
        db::project_types::create(&state.pool, &req.name, req.description.as_deref())
            .await
            .map_err(|e| {
                AppError::from_write(e, "Project type not found", "Invalid project type")
            })?;

    tracing::info!(project_type_id = %project_type.id, "project type created");
    Ok(Json(project_type))
}
