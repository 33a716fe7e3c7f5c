use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work. The owning project is referenced by id only.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub rank: i32,
    pub created_at: DateTime<Utc>,
}

impl Story {
    pub fn new(name: impl Into<String>, project_id: Option<Uuid>) -> Self {
        Self {
            id: Uuid::now_v7(),
            project_id,
            name: name.into(),
            description: None,
            rank: 0,
            created_at: Utc::now(),
        }
    }
}
