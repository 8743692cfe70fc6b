//! Variables handed to the template renderer alongside the manifest

use crate::config::Configuration;
use crate::naming::{classify, slugify};
use crate::request::{GenerationRequest, ViewType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContext {
    pub name: String,
    pub slug: String,
    pub class_name: String,
    pub project_name: String,
    pub root_dir: String,
    pub structure: &'static str,
    pub js_framework: &'static str,
    pub js_template: &'static str,
    pub js_option: &'static str,
    pub html_option: &'static str,
    pub css_option: &'static str,
    pub test_framework: &'static str,
    pub use_dashboard: bool,
    pub use_bootstrap: bool,
    pub use_modernizr: bool,
    pub no_import: bool,
    pub use_template: bool,
    pub ie_support: bool,
    pub responsive: bool,
    #[serde(rename = "useGA")]
    pub use_ga: bool,
    pub use_testing: bool,
}

impl RenderContext {
    pub fn new(config: &Configuration, request: &GenerationRequest) -> Self {
        let options = &request.options;
        Self {
            name: request.name.clone(),
            slug: slugify(&request.name),
            class_name: classify(&request.name),
            project_name: config.project_name.clone(),
            root_dir: config.root_dir().to_string(),
            structure: config.structure.display_name(),
            js_framework: config.js_framework.display_name(),
            js_template: config.js_template.display_name(),
            js_option: config.js_option.display_name(),
            html_option: config.html_option.display_name(),
            css_option: config.css_option.display_name(),
            test_framework: config.test_framework.display_name(),
            use_dashboard: options.dashboard || config.has_extra("useDashboard"),
            use_bootstrap: config.has_extra("useBootstrap"),
            use_modernizr: config.has_extra("useModernizr"),
            no_import: options.no_import,
            // only pages extend the layout
            use_template: options.use_template && request.view_type() == Some(ViewType::Page),
            ie_support: config.ie_support,
            responsive: config.responsive,
            use_ga: config.use_ga,
            use_testing: config.use_testing,
        }
    }
}
