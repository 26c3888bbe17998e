// src/api/http/mod.rs

mod analytics;
mod handlers;
mod projects;
mod router;
mod tasks;
mod users;

pub use analytics::analytics_summary;
pub use handlers::{health_handler, index_handler};
pub use projects::{create_project, get_project, list_projects};
pub use router::http_router;
pub use tasks::{create_task, get_task, list_tasks};
pub use users::{create_user, get_user, list_users};
