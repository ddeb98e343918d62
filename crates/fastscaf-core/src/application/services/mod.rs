//! Application services.

pub mod generate_service;
pub mod project_service;

pub use generate_service::{GenerateReport, GenerateService, IndexStatus};
pub use project_service::{ProjectReport, ProjectService};
