pub mod products;
pub mod project_types;
pub mod projects;
pub mod stories;
