//! Fastscaf Core - domain and application layers.
//!
//! This crate holds everything that does not touch the real filesystem or a
//! terminal: name transformation, managed-index classification and merging,
//! project-name validation, and the orchestration services that drive
//! generation through the [`application::ports::Filesystem`] port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          fastscaf-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (GenerateService, ProjectService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │     (Filesystem, TemplateProvider)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    fastscaf-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem, …)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (names, exports, index, validation)    │
//! └─────────────────────────────────────────┘
//! ```

// Domain layer (pure, no I/O)
pub mod domain;

// Application layer (orchestration behind ports)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, ProjectService,
        ports::{Filesystem, TemplateProvider},
        provision::{WriteOutcome, create_if_absent, ensure_gitignore, ensure_package},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactName, DbEngine, ExportEntry, IndexFile, IndexKind, ManagedRegion,
        MergeOutcome, ProjectName, classify, upsert,
    };
    pub use crate::error::{FastscafError, FastscafResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
