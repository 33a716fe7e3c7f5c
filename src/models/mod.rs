mod backlog;
mod product;
mod project;
mod project_type;
mod status;
mod story;

pub use backlog::Backlog;
pub use product::Product;
pub use project::Project;
pub use project_type::ProjectType;
pub use status::Status;
pub use story::Story;
