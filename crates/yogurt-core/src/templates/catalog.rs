//! Template catalog and template directory verification

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Every template id the rule engine can select
pub const TEMPLATE_IDS: &[&str] = &[
    "view.jade",
    "view.swig",
    "view.html",
    "server-view.jade",
    "server-view.swig",
    "server-view.html",
    "view.js",
    "view-spec.js",
    "template.html",
    "factory.js",
    "factory.spec.js",
    "model.js",
    "model-spec.js",
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("template directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to scan template directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Result of comparing a template directory against the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    /// Catalog ids with a matching file
    pub found: Vec<&'static str>,
    /// Catalog ids without a file
    pub missing: Vec<&'static str>,
    /// Files no rule ever selects
    pub unused: Vec<String>,
}

impl CatalogReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check that `dir` provides a file for every template id
///
/// Template ids are matched against paths relative to `dir`. Hidden files are
/// skipped.
pub fn verify_template_dir(dir: &Path) -> Result<CatalogReport, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::NotFound(dir.to_path_buf()));
    }

    let mut files = BTreeSet::new();
    let walker = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(dir).unwrap_or(entry.path());
        let id = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.insert(id);
    }

    let mut report = CatalogReport::default();
    for &id in TEMPLATE_IDS {
        if files.remove(id) {
            report.found.push(id);
        } else {
            report.missing.push(id);
        }
    }
    report.unused = files.into_iter().collect();

    Ok(report)
}
