//! Yogurt Core - decision engine for project generators
//!
//! Given a project's persisted settings and a single generate request
//! ("add a view named About"), this library decides which templates to render
//! and where each result goes. It never renders templates or touches the
//! project tree; the caller receives an ordered manifest of
//! `(template id, output path)` pairs and hands it to a renderer.
//!
//! # Architecture
//!
//! The library is organized into layers, each depending only on those above:
//!
//! - **Configuration** - `Configuration`, validated from `.yo-rc.json`
//! - **Rule Engine** - `rules::resolve`, template selection or a `Rejection`
//! - **Path Resolver** - `templates::paths::resolve`, slugged output paths
//! - **Manifest Builder** - `OutputManifest::build`, ordered and duplicate-free
//! - **CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage
//!
//! ```
//! use yogurt_core::{plan, Configuration, GenerationRequest, ViewType};
//!
//! let config = Configuration::parse(
//!     r#"{"projectName": "site", "structure": "Static Site", "htmlOption": "Jade"}"#,
//! )?;
//! let request = GenerationRequest::view(ViewType::Page, "My Page");
//!
//! let plan = plan(&config, &request)?;
//! assert_eq!(plan.manifest.output_paths(), vec!["client/templates/my-page.jade"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod naming;
pub mod request;
pub mod rules;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{
    Configuration, CssOption, HtmlOption, JsFramework, JsOption, JsTemplate, Structure,
    TestFramework,
};
pub use error::{ConfigError, InvariantViolation, PlanError, Rejection, RejectionReason};
pub use request::{GenerationRequest, Kind, RequestOptions, ViewType};
pub use rules::{resolve, Notice, Resolution, TemplateSelection};
pub use templates::{plan, GenerationPlan, ManifestEntry, OutputManifest, RenderContext};
