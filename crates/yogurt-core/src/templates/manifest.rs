//! Output manifest types and construction

use super::paths;
use crate::config::Configuration;
use crate::error::InvariantViolation;
use crate::request::GenerationRequest;
use crate::rules::TemplateSelection;
use serde::Serialize;
use std::collections::HashMap;

/// A template to render and the file it is written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestEntry {
    /// Logical template identifier (file name in the template directory)
    pub template_id: String,

    /// Output path relative to the project directory
    pub output_path: String,
}

/// Ordered list of files a request produces
///
/// Order follows the rule engine (script, then spec, then template body).
/// Output paths are pairwise distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutputManifest {
    entries: Vec<ManifestEntry>,
}

impl OutputManifest {
    /// Pair every selection with its resolved output path
    pub fn build(
        selections: &[TemplateSelection],
        request: &GenerationRequest,
        config: &Configuration,
    ) -> Result<Self, InvariantViolation> {
        let mut entries: Vec<ManifestEntry> = Vec::with_capacity(selections.len());
        let mut seen: HashMap<String, usize> = HashMap::new();

        for selection in selections {
            let output_path = paths::resolve(selection, request, config);

            if let Some(&index) = seen.get(&output_path) {
                return Err(InvariantViolation::DuplicateOutputPath {
                    path: output_path,
                    first: entries[index].template_id.clone(),
                    second: selection.template_id.to_string(),
                });
            }
            seen.insert(output_path.clone(), entries.len());

            entries.push(ManifestEntry {
                template_id: selection.template_id.to_string(),
                output_path,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestEntry> {
        self.entries.iter()
    }

    pub fn output_paths(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.output_path.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a OutputManifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
