//! Backbone models

use super::{Destination, Resolution, TemplateSelection};
use crate::config::{Configuration, JsFramework, Structure};
use crate::error::{Rejection, RejectionReason};

pub(crate) fn resolve(config: &Configuration) -> Result<Resolution, Rejection> {
    if config.structure != Structure::SinglePageApp || config.js_framework != JsFramework::Backbone
    {
        return Err(Rejection::new(
            RejectionReason::ModelRequiresBackbone,
            "Models are only available for Backbone single page applications",
        ));
    }

    let mut selections = vec![TemplateSelection::new(
        "model.js",
        Destination::under_root("scripts/models", "js"),
    )];
    if config.use_testing {
        selections.push(TemplateSelection::new(
            "model-spec.js",
            Destination::under_project("test/spec/models", "js").with_suffix("-spec"),
        ));
    }

    Ok(Resolution::new(selections))
}
