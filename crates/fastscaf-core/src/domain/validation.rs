//! Project-name validation.
//!
//! Runs before any filesystem mutation; a rejected name leaves the target
//! tree untouched.

use crate::domain::error::DomainError;
use crate::domain::names::camel_to_snake;

/// A validated CamelCase project name and its snake_case slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName {
    camel: String,
    slug: String,
}

impl ProjectName {
    pub fn camel(&self) -> &str {
        &self.camel
    }

    /// snake_case form, used as the default database name.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

/// Validate a user-supplied project name.
///
/// Accepted names are genuine CamelCase: non-empty after trimming, free of
/// separator characters, starting with an uppercase ASCII letter, and mixing
/// cases (neither all-lower nor all-upper).
pub fn validate_project_name(raw: &str) -> Result<ProjectName, DomainError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(invalid(raw, "name must not be empty"));
    }
    if name.contains(' ') || name.contains('-') || name.contains('_') {
        return Err(invalid(
            raw,
            "name must not contain spaces, hyphens, or underscores",
        ));
    }

    let first = name.chars().next().expect("non-empty checked above");
    if !first.is_ascii_alphabetic() || !first.is_uppercase() {
        return Err(invalid(raw, "name must start with an uppercase letter"));
    }

    if name == name.to_lowercase() || name == name.to_uppercase() {
        return Err(invalid(
            raw,
            "use CamelCase (for example: MyAwesomeApp)",
        ));
    }

    Ok(ProjectName {
        camel: name.to_owned(),
        slug: camel_to_snake(name),
    })
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidProjectName {
        name: name.to_owned(),
        reason: reason.to_owned(),
    }
}
