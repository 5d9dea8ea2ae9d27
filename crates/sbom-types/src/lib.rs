//! Foundation types for the SBOM registry.
//!
//! This crate holds the data model shared by the store, the HTTP layer and the
//! command-line binary. It performs no I/O.
//!
//! # Key Types
//!
//! - [`ComponentId`] — Store-assigned, monotonically increasing identifier
//! - [`Component`] — A stored software-component record
//! - [`ComponentDraft`] — Candidate record for create and replace
//! - [`ComponentPatch`] — Typed optional field set for partial updates
//! - [`LicensePolicy`] — Whether `license` is a required field
//!
//! Validation lives in [`validation`]: [`validate`] checks a draft's required
//! fields in a fixed order and reports the first one that is missing.

pub mod component;
pub mod error;
pub mod id;
pub mod patch;
pub mod validation;

pub use component::{Component, ComponentDraft};
pub use error::TypesError;
pub use id::ComponentId;
pub use patch::ComponentPatch;
pub use validation::{validate, Field, LicensePolicy, ValidationError};
