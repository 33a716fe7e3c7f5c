use serde::Serialize;
use uuid::Uuid;

use super::Backlog;

/// The parent grouping that projects live under.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
pub struct Product {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub backlog: Backlog,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            backlog: Backlog::new(name),
        }
    }

    pub fn id(&self) -> Uuid {
        self.backlog.id
    }
}
