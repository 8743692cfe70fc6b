//! Views for single page applications: script, spec and template body

use super::{Destination, Notice, Resolution, TemplateSelection};
use crate::config::{Configuration, JsFramework, JsTemplate};
use crate::error::{Rejection, RejectionReason};
use crate::request::ViewType;

pub(crate) fn resolve_view(
    config: &Configuration,
    view: ViewType,
) -> Result<Resolution, Rejection> {
    // React projects generate views through their own component generator
    if config.js_framework == JsFramework::React || config.js_template == JsTemplate::React {
        return Err(Rejection::new(
            RejectionReason::ReactUsesDedicatedSubgenerator,
            "This project uses React, so views are not available here. \
             Generate a React component instead",
        ));
    }

    let mut selections = vec![
        TemplateSelection::new("view.js", Destination::under_root("scripts/templates", "js")),
        TemplateSelection::new(
            "view-spec.js",
            Destination::under_project("test/spec/templates", "js").with_suffix("-spec"),
        ),
    ];
    if let Some(extension) = config.js_template.body_extension() {
        selections.push(TemplateSelection::new(
            "template.html",
            Destination::under_root("templates", extension),
        ));
    }

    let mut notices = Vec::new();
    if view != ViewType::Page {
        notices.push(Notice::new(format!(
            "The `{}` type only applies to static sites and will be ignored",
            view
        )));
    }

    Ok(Resolution::new(selections).with_notices(notices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Structure;

    fn spa(framework: JsFramework, template: JsTemplate) -> Configuration {
        let mut config = Configuration::new("app", Structure::SinglePageApp);
        config.js_framework = framework;
        config.js_template = template;
        config
    }

    fn keys(resolution: &Resolution) -> Vec<(&'static str, String)> {
        resolution
            .selections
            .iter()
            .map(|s| (s.template_id, s.destination_key()))
            .collect()
    }

    #[test]
    fn test_script_spec_and_body_in_order() {
        let resolution =
            resolve_view(&spa(JsFramework::Backbone, JsTemplate::Handlebars), ViewType::Page)
                .unwrap();
        assert_eq!(
            keys(&resolution),
            vec![
                ("view.js", "root/scripts/templates/{slug}.js".to_string()),
                (
                    "view-spec.js",
                    "project/test/spec/templates/{slug}-spec.js".to_string()
                ),
                ("template.html", "root/templates/{slug}.hbs".to_string()),
            ]
        );
    }

    #[test]
    fn test_exactly_one_body_per_template_language() {
        for (template, extension) in [
            (JsTemplate::Underscore, "jst"),
            (JsTemplate::Handlebars, "hbs"),
            (JsTemplate::Jade, "jade"),
        ] {
            let resolution =
                resolve_view(&spa(JsFramework::Backbone, template), ViewType::Page).unwrap();
            let bodies: Vec<_> = resolution
                .selections
                .iter()
                .filter(|s| s.template_id == "template.html")
                .collect();
            assert_eq!(bodies.len(), 1);
            assert_eq!(bodies[0].destination.extension, extension);
        }
    }

    #[test]
    fn test_no_template_language_means_script_and_spec_only() {
        let resolution =
            resolve_view(&spa(JsFramework::None, JsTemplate::None), ViewType::Page).unwrap();
        assert_eq!(resolution.selections.len(), 2);
    }

    #[test]
    fn test_react_is_rejected() {
        for config in [
            spa(JsFramework::React, JsTemplate::None),
            spa(JsFramework::Backbone, JsTemplate::React),
        ] {
            let rejection = resolve_view(&config, ViewType::Page).unwrap_err();
            assert_eq!(
                rejection.reason,
                RejectionReason::ReactUsesDedicatedSubgenerator
            );
        }
    }

    #[test]
    fn test_view_type_is_ignored_with_notice() {
        let resolution =
            resolve_view(&spa(JsFramework::Backbone, JsTemplate::Jade), ViewType::Component)
                .unwrap();
        assert_eq!(resolution.selections.len(), 3);
        assert_eq!(resolution.notices.len(), 1);
    }
}
