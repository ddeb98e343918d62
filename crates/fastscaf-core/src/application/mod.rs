//! Application layer: orchestration behind ports.
//!
//! Services here own the generation workflow but never touch `std::fs`
//! directly — all I/O goes through the [`ports::Filesystem`] trait so the
//! whole layer runs against the in-memory adapter in tests.

pub mod error;
pub mod ports;
pub mod provision;
pub mod services;

pub use error::ApplicationError;
pub use services::generate_service::{GenerateReport, GenerateService, IndexStatus};
pub use services::project_service::{ProjectReport, ProjectService};
