use serde::{Deserialize, Deserializer};

use crate::deck::slide::SlideRecord;

/// Format version written into new manifests.
pub const FORMAT_VERSION: &str = "1.0.2";
/// Name of the manifest entry inside a project archive.
pub const MANIFEST_ENTRY: &str = "project.json";
/// Archive directory holding embedded binary assets.
pub const ASSETS_DIR: &str = "assets/";
/// File extension used for project archives.
pub const PROJECT_EXTENSION: &str = "ppproj";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The `project.json` document inside a project archive.
pub struct ProjectManifest {
    /// Format version tag.
    pub version: String,
    /// Slides in deck order, `customImage` rewritten to archive-relative paths.
    pub slides: Vec<SlideRecord>,
    /// Project-wide background audio, if embedded.
    #[serde(default)]
    pub audio: Option<AudioEntry>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub timestamp: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Manifest reference to the embedded audio asset.
pub struct AudioEntry {
    /// Archive-relative entry path.
    pub path: String,
    /// Name shown to the user. Older archives call this field `name`.
    #[serde(default, alias = "name")]
    pub display_name: String,
}

impl ProjectManifest {
    /// Whether the manifest's major version matches the one this crate writes.
    pub fn is_same_major_version(&self) -> bool {
        major(&self.version) == major(FORMAT_VERSION)
    }
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version).trim()
}

fn lenient_millis<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_u64()
        .or_else(|| {
            v.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        })
        .unwrap_or(0))
}

#[cfg(test)]
#[path = "../../tests/unit/project/manifest.rs"]
mod tests;
