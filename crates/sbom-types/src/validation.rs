//! Required-field validation for component drafts.
//!
//! Checks run in a fixed order (name, version, checksum, source, then
//! license when the policy requires it) and stop at the first failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::component::ComponentDraft;

/// Whether `license` must be non-empty on create and replace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicensePolicy {
    /// An empty license is accepted.
    #[default]
    Optional,
    /// License is validated like the other required fields.
    Required,
}

impl LicensePolicy {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }
}

/// A component field subject to validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Version,
    Checksum,
    Source,
    License,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Version => "version",
            Self::Checksum => "checksum",
            Self::Source => "source",
            Self::License => "license",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required field was empty or whitespace-only.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{field} is required")]
pub struct ValidationError {
    pub field: Field,
}

/// Validate a draft against the required-field rules.
///
/// # Examples
///
/// ```
/// use sbom_types::{validate, ComponentDraft, Field, LicensePolicy};
///
/// let ok = ComponentDraft::new("lib-a", "1.0", "abc", "github.com/x/lib-a", "");
/// assert!(validate(&ok, LicensePolicy::Optional).is_ok());
///
/// let err = validate(&ok, LicensePolicy::Required).unwrap_err();
/// assert_eq!(err.field, Field::License);
/// assert_eq!(err.to_string(), "license is required");
/// ```
pub fn validate(draft: &ComponentDraft, policy: LicensePolicy) -> Result<(), ValidationError> {
    let required = [
        (Field::Name, &draft.name),
        (Field::Version, &draft.version),
        (Field::Checksum, &draft.checksum),
        (Field::Source, &draft.source),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError { field });
        }
    }

    if policy.is_required() && draft.license.trim().is_empty() {
        return Err(ValidationError {
            field: Field::License,
        });
    }

    Ok(())
}
