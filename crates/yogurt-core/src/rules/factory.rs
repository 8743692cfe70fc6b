//! Angular factories

use super::{Destination, Resolution, TemplateSelection};
use crate::config::{Configuration, JsFramework};
use crate::error::{Rejection, RejectionReason};
use crate::request::RequestOptions;

/// Factory directory under the structure root when no location is given
pub const DEFAULT_FACTORY_DIR: &str = "app";

pub(crate) fn resolve(
    config: &Configuration,
    options: &RequestOptions,
) -> Result<Resolution, Rejection> {
    if config.js_framework != JsFramework::Angular {
        return Err(Rejection::new(
            RejectionReason::FactoryRequiresAngular,
            format!(
                "Factories are only available for Angular applications; this project uses {}",
                config.js_framework.display_name()
            ),
        ));
    }

    let base = match options.location.as_deref() {
        Some(location) if !location.trim().is_empty() => {
            Destination::under_project(clean_location(location), "js")
        }
        _ => Destination::under_root(DEFAULT_FACTORY_DIR, "js"),
    }
    .nested();

    let mut selections = vec![TemplateSelection::new(
        "factory.js",
        base.clone().with_suffix(".factory"),
    )];
    if config.use_testing {
        selections.push(TemplateSelection::new(
            "factory.spec.js",
            base.with_suffix(".factory.spec"),
        ));
    }

    Ok(Resolution::new(selections))
}

/// `.` and `./` name the project directory itself
fn clean_location(location: &str) -> &str {
    let trimmed = location.trim();
    if trimmed.starts_with('/') && trimmed.trim_end_matches('/').is_empty() {
        return "/";
    }
    let trimmed = trimmed.trim_end_matches('/');
    match trimmed.strip_prefix("./").unwrap_or(trimmed) {
        "." => "",
        cleaned => cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Structure;

    fn angular(use_testing: bool) -> Configuration {
        let mut config = Configuration::new("app", Structure::SinglePageApp);
        config.js_framework = JsFramework::Angular;
        config.use_testing = use_testing;
        config
    }

    #[test]
    fn test_requires_angular() {
        for framework in [JsFramework::None, JsFramework::Backbone, JsFramework::React] {
            let mut config = angular(true);
            config.js_framework = framework;
            let rejection = resolve(&config, &RequestOptions::default()).unwrap_err();
            assert_eq!(rejection.reason, RejectionReason::FactoryRequiresAngular);
        }
    }

    #[test]
    fn test_spec_only_with_testing() {
        let resolution = resolve(&angular(false), &RequestOptions::default()).unwrap();
        assert_eq!(resolution.selections.len(), 1);
        assert_eq!(
            resolution.selections[0].destination_key(),
            "root/app/{slug}/{slug}.factory.js"
        );

        let resolution = resolve(&angular(true), &RequestOptions::default()).unwrap();
        assert_eq!(resolution.selections.len(), 2);
        assert_eq!(resolution.selections[1].template_id, "factory.spec.js");
        assert_eq!(
            resolution.selections[1].destination_key(),
            "root/app/{slug}/{slug}.factory.spec.js"
        );
    }

    #[test]
    fn test_custom_location_is_project_relative() {
        let options = RequestOptions {
            location: Some("./client/services/".to_string()),
            ..Default::default()
        };
        let resolution = resolve(&angular(false), &options).unwrap();
        assert_eq!(
            resolution.selections[0].destination_key(),
            "project/client/services/{slug}/{slug}.factory.js"
        );
    }

    #[test]
    fn test_blank_location_falls_back_to_default() {
        let options = RequestOptions {
            location: Some("  ".to_string()),
            ..Default::default()
        };
        let resolution = resolve(&angular(false), &options).unwrap();
        assert_eq!(
            resolution.selections[0].destination_key(),
            "root/app/{slug}/{slug}.factory.js"
        );

        let resolution = resolve(&angular(false), &RequestOptions::default()).unwrap();
        assert_eq!(
            resolution.selections[0].destination_key(),
            "root/app/{slug}/{slug}.factory.js"
        );
    }

    #[test]
    fn test_dot_location_is_project_directory() {
        for location in [".", "./", " ./ "] {
            let options = RequestOptions {
                location: Some(location.to_string()),
                ..Default::default()
            };
            let resolution = resolve(&angular(true), &options).unwrap();
            assert_eq!(
                resolution.selections[0].destination_key(),
                "project/{slug}/{slug}.factory.js",
                "{:?}",
                location
            );
            assert_eq!(
                resolution.selections[1].destination_key(),
                "project/{slug}/{slug}.factory.spec.js"
            );
        }
    }
}
