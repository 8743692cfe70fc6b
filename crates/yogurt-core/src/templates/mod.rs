//! Path resolution, manifest building and the template catalog
//!
//! This module provides:
//! - Output path resolution for rule engine selections
//! - `OutputManifest`, the ordered (template id, output path) list
//! - `RenderContext`, the variables the renderer substitutes
//! - Verification of a template directory against the catalog

pub mod catalog;
pub mod context;
pub mod manifest;
pub mod paths;

use crate::config::Configuration;
use crate::error::PlanError;
use crate::request::GenerationRequest;
use crate::rules::{self, Notice};
use serde::Serialize;

pub use catalog::{verify_template_dir, CatalogError, CatalogReport, TEMPLATE_IDS};
pub use context::RenderContext;
pub use manifest::{ManifestEntry, OutputManifest};

/// Everything the renderer needs for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub manifest: OutputManifest,
    pub notices: Vec<Notice>,
    pub context: RenderContext,
}

/// Resolve a request into a plan
///
/// The rule engine runs to completion first; output paths are only computed
/// for an accepted request.
pub fn plan(
    config: &Configuration,
    request: &GenerationRequest,
) -> Result<GenerationPlan, PlanError> {
    let resolution = rules::resolve(config, request)?;
    let manifest = OutputManifest::build(&resolution.selections, request, config)?;

    Ok(GenerationPlan {
        manifest,
        notices: resolution.notices,
        context: RenderContext::new(config, request),
    })
}
