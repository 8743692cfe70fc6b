//! Output path resolution
//!
//! Paths are always `/`-separated and relative to the project directory
//! (unless the user supplied an absolute factory location).

use crate::config::Configuration;
use crate::naming::slugify;
use crate::request::GenerationRequest;
use crate::rules::{Anchor, TemplateSelection};

/// Concrete output path for a selected template
pub fn resolve(
    selection: &TemplateSelection,
    request: &GenerationRequest,
    config: &Configuration,
) -> String {
    let slug = slugify(&request.name);
    let destination = &selection.destination;

    let file_name = format!("{}{}.{}", slug, destination.suffix, destination.extension);
    let absolute = destination.anchor == Anchor::Project && destination.dir.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    if destination.anchor == Anchor::Root {
        segments.extend(split(config.root_dir()));
    }
    segments.extend(split(&destination.dir));
    if destination.nested {
        segments.push(&slug);
    }
    segments.push(&file_name);

    let path = segments.join("/");
    if absolute {
        format!("/{}", path)
    } else {
        path
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Structure;
    use crate::request::ViewType;
    use crate::rules::Destination;

    fn page(name: &str) -> GenerationRequest {
        GenerationRequest::view(ViewType::Page, name)
    }

    #[test]
    fn test_root_is_structure_dependent() {
        let selection =
            TemplateSelection::new("view.jade", Destination::under_root("templates", "jade"));

        let config = Configuration::new("a", Structure::StaticSite);
        assert_eq!(
            resolve(&selection, &page("My Page"), &config),
            "client/templates/my-page.jade"
        );

        let config = Configuration::new("a", Structure::ServerRendered);
        assert_eq!(
            resolve(&selection, &page("My Page"), &config),
            "server/templates/my-page.jade"
        );

        let mut config = Configuration::new("a", Structure::StaticSite);
        config.root_dir = Some("dev/".to_string());
        assert_eq!(
            resolve(&selection, &page("My Page"), &config),
            "dev/templates/my-page.jade"
        );
    }

    #[test]
    fn test_project_anchor_ignores_root() {
        let selection = TemplateSelection::new(
            "view-spec.js",
            Destination::under_project("test/spec/templates", "js").with_suffix("-spec"),
        );
        let config = Configuration::new("a", Structure::SinglePageApp);
        assert_eq!(
            resolve(&selection, &page("Main"), &config),
            "test/spec/templates/main-spec.js"
        );
    }

    #[test]
    fn test_nested_destination() {
        let selection = TemplateSelection::new(
            "factory.js",
            Destination::under_root("app", "js")
                .nested()
                .with_suffix(".factory"),
        );
        let config = Configuration::new("a", Structure::SinglePageApp);
        assert_eq!(
            resolve(&selection, &GenerationRequest::factory("User Service"), &config),
            "client/app/user-service/user-service.factory.js"
        );
    }

    #[test]
    fn test_absolute_location_is_kept() {
        let selection = TemplateSelection::new(
            "factory.js",
            Destination::under_project("/srv/app", "js")
                .nested()
                .with_suffix(".factory"),
        );
        let config = Configuration::new("a", Structure::SinglePageApp);
        assert_eq!(
            resolve(&selection, &GenerationRequest::factory("auth"), &config),
            "/srv/app/auth/auth.factory.js"
        );
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let selection =
            TemplateSelection::new("view.swig", Destination::under_root("templates", "swig"));
        let config = Configuration::new("a", Structure::StaticSite);
        let request = page("About Us");
        assert_eq!(
            resolve(&selection, &request, &config),
            resolve(&selection, &request, &config)
        );
    }
}
