use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::json::{expose_all, Exposed};
use crate::models::{Project, Status};
use crate::state::SharedState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub project_type_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub status: Status,
}

/// Full replacement of a project's mutable fields. `productId` moves the
/// project to another product when present.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: String,
    pub description: Option<String>,
    pub product_id: Option<Uuid>,
    pub project_type_id: Option<Uuid>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub rank: i32,
    #[serde(default)]
    pub status: Status,
}

#[derive(Deserialize)]
pub struct RankProject {
    pub rank: i32,
}

const NOT_FOUND: &str = "Project not found";
const BAD_REFERENCE: &str = "Unknown product or project type";

pub async fn list_by_product(
    State(state): State<SharedState>,
    Path(product_id): Path<Uuid>,
) -> Result<Json<Vec<Exposed<Project>>>, AppError> {
    db::products::find_by_id(&state.pool, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let projects = db::projects::list_by_product(&state.pool, product_id).await?;
    Ok(Json(expose_all(projects)))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<CreateProject>,
) -> Result<Json<Exposed<Project>>, AppError> {
    db::products::find_by_id(&state.pool, product_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;

    let mut project = Project::new(req.name, product_id);
    project.backlog_mut().description = req.description;
    project.set_project_type_id(req.project_type_id);
    project.set_start_date(req.start_date);
    project.set_end_date(req.end_date);
    project.set_rank(req.rank);
    project.set_status(req.status);

    let project = db::projects::create(&state.pool, &project)
        .await
        .map_err(|e| AppError::from_write(e, NOT_FOUND, BAD_REFERENCE))?;

    tracing::info!(project_id = %project.id(), %product_id, "project created");
    Ok(Json(Exposed(project)))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Exposed<Project>>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(Exposed(project)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProject>,
) -> Result<Json<Exposed<Project>>, AppError> {
    let mut project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    let backlog = project.backlog_mut();
    backlog.name = req.name;
    backlog.description = req.description;
    if let Some(product_id) = req.product_id {
        project.set_product_id(product_id);
    }
    project.set_project_type_id(req.project_type_id);
    project.set_start_date(req.start_date);
    project.set_end_date(req.end_date);
    project.set_rank(req.rank);
    project.set_status(req.status);

    let project = db::projects::update(&state.pool, &project)
        .await
        .map_err(|e| AppError::from_write(e, NOT_FOUND, BAD_REFERENCE))?;

    tracing::info!(project_id = %id, "project updated");
    Ok(Json(Exposed(project)))
}

pub async fn set_rank(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<RankProject>,
) -> Result<Json<Exposed<Project>>, AppError> {
    let project = db::projects::set_rank(&state.pool, id, req.rank)
        .await
        .map_err(|e| AppError::from_write(e, NOT_FOUND, BAD_REFERENCE))?;

    tracing::info!(project_id = %id, rank = req.rank, "project re-ranked");
    Ok(Json(Exposed(project)))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::projects::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(project_id = %id, "project deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
