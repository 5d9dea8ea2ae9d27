//! Component records and the candidates they are built from.

use serde::{Deserialize, Serialize};

use crate::id::ComponentId;

/// A stored software-component record.
///
/// The `id` is assigned by the store and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: ComponentId,
    pub name: String,
    pub version: String,
    pub checksum: String,
    /// Where the component was obtained from (repository URL, registry, ...).
    pub source: String,
    pub license: String,
}

impl Component {
    /// Build a stored record from a draft and the id the store allocated.
    pub fn from_draft(id: ComponentId, draft: ComponentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            version: draft.version,
            checksum: draft.checksum,
            source: draft.source,
            license: draft.license,
        }
    }

    /// The record's fields without its id.
    pub fn to_draft(&self) -> ComponentDraft {
        ComponentDraft {
            name: self.name.clone(),
            version: self.version.clone(),
            checksum: self.checksum.clone(),
            source: self.source.clone(),
            license: self.license.clone(),
        }
    }
}

/// Candidate record for create and full replace.
///
/// Fields missing from the JSON body decode as empty strings so that they are
/// reported by validation rather than as a decoding failure. Any `id` key in
/// the body is ignored; the store decides the id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentDraft {
    pub name: String,
    pub version: String,
    pub checksum: String,
    pub source: String,
    pub license: String,
}

impl ComponentDraft {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        checksum: impl Into<String>,
        source: impl Into<String>,
        license: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            checksum: checksum.into(),
            source: source.into(),
            license: license.into(),
        }
    }
}
