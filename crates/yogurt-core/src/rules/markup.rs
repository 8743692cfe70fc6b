//! Views for projects whose markup is rendered from HTML templates
//! (static sites and server-rendered projects)

use super::{Destination, Notice, Resolution, TemplateSelection};
use crate::config::{Configuration, HtmlOption};
use crate::error::{Rejection, RejectionReason};
use crate::request::{RequestOptions, ViewType};

/// Which template set the view is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flavor {
    Static,
    Server,
}

fn template_id(flavor: Flavor, html: HtmlOption) -> &'static str {
    match (flavor, html) {
        (Flavor::Static, HtmlOption::Jade) => "view.jade",
        (Flavor::Static, HtmlOption::Swig) => "view.swig",
        (Flavor::Static, HtmlOption::Vanilla) => "view.html",
        (Flavor::Server, HtmlOption::Jade) => "server-view.jade",
        (Flavor::Server, HtmlOption::Swig) => "server-view.swig",
        (Flavor::Server, HtmlOption::Vanilla) => "server-view.html",
    }
}

pub(crate) fn resolve_view(
    config: &Configuration,
    view: ViewType,
    options: &RequestOptions,
    flavor: Flavor,
) -> Result<Resolution, Rejection> {
    let html = config.html_option;
    let extension = html.extension();

    let destination = match (html, view) {
        (_, ViewType::Page) => Destination::under_root("templates", extension),
        (HtmlOption::Vanilla, other) => {
            return Err(Rejection::new(
                RejectionReason::UnsupportedViewKind,
                format!(
                    "Projects using {} can only generate pages, not {}s. \
                     Try `generate view <name>` to create a page",
                    html, other
                ),
            ));
        }
        (HtmlOption::Jade | HtmlOption::Swig, ViewType::Component | ViewType::Template) => {
            Destination::under_root(format!("templates/{}s", view), extension)
        }
    };

    let mut notices = Vec::new();
    if options.use_template && view != ViewType::Page {
        notices.push(Notice::new(format!(
            "The template option will be ignored as the type is `{}`, not `page`",
            view
        )));
    }

    let selection = TemplateSelection::new(template_id(flavor, html), destination);
    Ok(Resolution::new(vec![selection]).with_notices(notices))
}
