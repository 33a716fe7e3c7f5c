pub mod products;
pub mod project_types;
pub mod projects;
pub mod stories;

use axum::routing::{get, put};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Products
        .route("/api/v1/products", get(products::list).post(products::create))
        .route(
            "/api/v1/products/{id}",
            get(products::get).delete(products::delete),
        )
        .route(
            "/api/v1/products/{id}/projects",
            get(projects::list_by_product).post(projects::create),
        )
        // Project types
        .route(
            "/api/v1/project-types",
            get(project_types::list).post(project_types::create),
        )
        // Projects
        .route(
            "/api/v1/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route("/api/v1/projects/{id}/rank", put(projects::set_rank))
        // Stories
        .route(
            "/api/v1/projects/{id}/stories",
            get(stories::list_by_project).post(stories::create),
        )
        .route(
            "/api/v1/stories/{id}",
            get(stories::get).delete(stories::delete),
        )
}
