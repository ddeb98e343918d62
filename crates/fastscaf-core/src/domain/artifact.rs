//! Artifact kinds and derived naming.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity. All
//! path and symbol derivation for a generated artifact lives here so the
//! services never hard-code a directory or suffix.

use std::fmt;

use crate::domain::exports::ExportEntry;
use crate::domain::names::camel_to_snake;

// ── ArtifactKind ──────────────────────────────────────────────────────────────

/// A kind of generated source file and where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Model,
    Schema,
    Route,
    Service,
    Util,
    Factory,
    Script,
    Test,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Schema => "schema",
            Self::Route => "route",
            Self::Service => "service",
            Self::Util => "util",
            Self::Factory => "factory",
            Self::Script => "script",
            Self::Test => "test",
        }
    }

    /// Directory of this artifact kind, relative to the project root.
    ///
    /// Factories live inside the `database` package; the service ensures
    /// that parent package exists before provisioning the factories folder.
    pub const fn directory(&self) -> &'static str {
        match self {
            Self::Model => "models",
            Self::Schema => "schemas",
            Self::Route => "routes",
            Self::Service => "service",
            Self::Util => "utils",
            Self::Factory => "database/factories",
            Self::Script => "scripts",
            Self::Test => "tests",
        }
    }

    /// File name for an artifact of this kind.
    pub fn file_name(&self, name: &ArtifactName) -> String {
        match self {
            Self::Test => format!("test_{}.py", name.snake()),
            _ => format!("{}.py", self.module_name(name)),
        }
    }

    /// Module name (file stem) for an artifact of this kind.
    pub fn module_name(&self, name: &ArtifactName) -> String {
        match self {
            Self::Test => format!("test_{}", name.snake()),
            _ => format!("{}_{}", name.snake(), self.as_str()),
        }
    }

    /// The export this kind registers in its directory's aggregator.
    ///
    /// Only models and services re-export a symbol; the other kinds write
    /// their file and leave the aggregator alone.
    pub fn export_entry(&self, name: &ArtifactName) -> Option<ExportEntry> {
        match self {
            Self::Model => Some(ExportEntry::new(self.module_name(name), name.camel())),
            Self::Service => Some(ExportEntry::new(
                self.module_name(name),
                format!("{}Service", name.camel()),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ArtifactName ──────────────────────────────────────────────────────────────

/// The user-supplied identifier and its derived snake_case form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    camel: String,
    snake: String,
}

impl ArtifactName {
    pub fn new(identifier: impl Into<String>) -> Self {
        let camel = identifier.into();
        let snake = camel_to_snake(&camel);
        Self { camel, snake }
    }

    /// The identifier as given on the command line.
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// The snake_case form used for files and modules.
    pub fn snake(&self) -> &str {
        &self.snake
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.camel)
    }
}

// ── DbEngine ──────────────────────────────────────────────────────────────────

/// Database engine a project is initialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DbEngine {
    Mysql,
    Postgres,
}

impl DbEngine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for DbEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_match_project_layout() {
        assert_eq!(ArtifactKind::Model.directory(), "models");
        assert_eq!(ArtifactKind::Service.directory(), "service");
        assert_eq!(ArtifactKind::Factory.directory(), "database/factories");
        assert_eq!(ArtifactKind::Test.directory(), "tests");
    }

    #[test]
    fn file_names_use_snake_case_and_suffix() {
        let name = ArtifactName::new("UserProfile");
        assert_eq!(ArtifactKind::Model.file_name(&name), "user_profile_model.py");
        assert_eq!(ArtifactKind::Schema.file_name(&name), "user_profile_schema.py");
        assert_eq!(ArtifactKind::Factory.file_name(&name), "user_profile_factory.py");
    }

    #[test]
    fn test_files_use_prefix_not_suffix() {
        let name = ArtifactName::new("UserProfile");
        assert_eq!(ArtifactKind::Test.file_name(&name), "test_user_profile.py");
    }

    #[test]
    fn only_models_and_services_register_exports() {
        let name = ArtifactName::new("User");

        let model = ArtifactKind::Model.export_entry(&name).unwrap();
        assert_eq!(model.module, "user_model");
        assert_eq!(model.symbol, "User");

        let service = ArtifactKind::Service.export_entry(&name).unwrap();
        assert_eq!(service.module, "user_service");
        assert_eq!(service.symbol, "UserService");

        for kind in [
            ArtifactKind::Schema,
            ArtifactKind::Route,
            ArtifactKind::Util,
            ArtifactKind::Factory,
            ArtifactKind::Script,
            ArtifactKind::Test,
        ] {
            assert!(kind.export_entry(&name).is_none(), "{kind} should not export");
        }
    }

    #[test]
    fn artifact_name_derives_snake() {
        let name = ArtifactName::new("OrderItem");
        assert_eq!(name.camel(), "OrderItem");
        assert_eq!(name.snake(), "order_item");
    }
}
