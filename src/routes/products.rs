use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::Product;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CreateProduct {
    pub name: String,
    pub description: Option<String>,
}

pub async fn list(State(state): State<SharedState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = db::products::list(&state.pool).await?;
    Ok(Json(products))
}

pub async fn create(
    State(state): State<SharedState>,
    Json(req): Json<CreateProduct>,
) -> Result<Json<Product>, AppError> {
    let product = db::products::create(&state.pool, &req.name, req.description.as_deref())
        .await
        .map_err(|e| AppError::from_write(e, "Product not found", "Invalid product"))?;

    tracing::info!(product_id = %product.id(), "product created");
    Ok(Json(product))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, AppError> {
    let product = db::products::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Product not found".to_string()))?;
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if !db::products::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(product_id = %id, "product deleted");
    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}
