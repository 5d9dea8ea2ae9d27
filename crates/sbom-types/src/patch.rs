//! Partial updates.
//!
//! A [`ComponentPatch`] names the fields a client wants to change. The merge
//! rules are asymmetric: `name`, `version`, `checksum` and `source` are only
//! overwritten by non-empty values, so a patch can never blank them (use a
//! full replace for that). `license` is overwritten whenever it is present,
//! which lets a client clear it with `""`.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::component::Component;

/// Optional field set for a partial update.
///
/// A JSON `null` or a non-string value is treated the same as an absent key,
/// so `{"version": 2, "license": "MIT"}` only changes the license. Unknown
/// keys (including `id`) are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentPatch {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_absent")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_absent")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_absent")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_absent")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "string_or_absent")]
    pub license: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PatchValue {
    Text(String),
    Other(IgnoredAny),
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<PatchValue>::deserialize(deserializer)? {
        Some(PatchValue::Text(s)) => Some(s),
        Some(PatchValue::Other(_)) | None => None,
    })
}

impl ComponentPatch {
    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.version.is_none()
            && self.checksum.is_none()
            && self.source.is_none()
            && self.license.is_none()
    }

    /// Merge this patch into `component` in place.
    ///
    /// The id is never touched.
    pub fn apply_to(&self, component: &mut Component) {
        overwrite_non_empty(&mut component.name, &self.name);
        overwrite_non_empty(&mut component.version, &self.version);
        overwrite_non_empty(&mut component.checksum, &self.checksum);
        overwrite_non_empty(&mut component.source, &self.source);
        if let Some(license) = &self.license {
            component.license.clone_from(license);
        }
    }
}

fn overwrite_non_empty(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        if !v.is_empty() {
            target.clone_from(v);
        }
    }
}
