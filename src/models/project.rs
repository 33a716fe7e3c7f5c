use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::{Backlog, Status, Story};
use crate::json::JsonPolicy;
use crate::mapping::{Column, EntityMapping, Mapped, Relation};

/// A backlog that belongs to a product and collects stories.
///
/// `rank` has no meaning on its own: a project with a lower rank than another
/// has the higher priority of the two. `stories` is never stored with the
/// project row; it is filled from the `stories` table on demand.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[sqlx(flatten)]
    #[serde(flatten)]
    backlog: Backlog,
    product_id: Uuid,
    project_type_id: Option<Uuid>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    #[sqlx(skip)]
    stories: Vec<Story>,
    rank: i32,
    status: Status,
}

impl Project {
    pub fn new(name: impl Into<String>, product_id: Uuid) -> Self {
        Self {
            backlog: Backlog::new(name),
            product_id,
            project_type_id: None,
            start_date: None,
            end_date: None,
            stories: Vec::new(),
            rank: 0,
            status: Status::default(),
        }
    }

    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }

    pub fn backlog_mut(&mut self) -> &mut Backlog {
        &mut self.backlog
    }

    pub fn id(&self) -> Uuid {
        self.backlog.id
    }

    pub fn name(&self) -> &str {
        &self.backlog.name
    }

    pub fn product_id(&self) -> Uuid {
        self.product_id
    }

    pub fn set_product_id(&mut self, product_id: Uuid) {
        self.product_id = product_id;
    }

    pub fn project_type_id(&self) -> Option<Uuid> {
        self.project_type_id
    }

    pub fn set_project_type_id(&mut self, project_type_id: Option<Uuid>) {
        self.project_type_id = project_type_id;
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: Option<DateTime<Utc>>) {
        self.start_date = start_date;
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: Option<DateTime<Utc>>) {
        self.end_date = end_date;
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Replaces the loaded stories wholesale.
    pub fn set_stories(&mut self, stories: Vec<Story>) {
        self.stories = stories;
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    pub fn set_rank(&mut self, rank: i32) {
        self.rank = rank;
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn has_priority_over(&self, other: &Project) -> bool {
        self.rank < other.rank
    }

    /// Orders projects from highest to lowest priority.
    pub fn priority_cmp(&self, other: &Project) -> Ordering {
        self.rank.cmp(&other.rank)
    }

    /// True when every loaded story points back at this project.
    pub fn stories_consistent(&self) -> bool {
        let id = self.id();
        self.stories.iter().all(|s| s.project_id == Some(id))
    }
}

impl Mapped for Project {
    const MAPPING: EntityMapping = EntityMapping {
        table: "projects",
        columns: &[
            Column::required("id", "id"),
            Column::required("name", "name"),
            Column::optional("description", "description"),
            Column::required("createdAt", "created_at"),
            Column::required("updatedAt", "updated_at"),
            Column::required("product", "product_id"),
            Column::optional("projectType", "project_type_id"),
            Column::optional("startDate", "start_date"),
            Column::optional("endDate", "end_date"),
            Column::required("rank", "rank"),
            Column::ordinal("status", "status"),
        ],
        relations: &[
            Relation::ManyToOne {
                field: "product",
                column: "product_id",
                target: "products",
                optional: false,
            },
            Relation::ManyToOne {
                field: "projectType",
                column: "project_type_id",
                target: "project_types",
                optional: true,
            },
            Relation::OneToMany {
                field: "stories",
                target: "stories",
                mapped_by: "project_id",
            },
        ],
        batch_size: 20,
    };
}

impl JsonPolicy for Project {
    const JSON_FIELDS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "startDate",
        "endDate",
        "rank",
        "status",
    ];
}
