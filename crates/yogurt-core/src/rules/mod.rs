//! Rule engine
//!
//! Resolves a `(Configuration, GenerationRequest)` pair into the ordered list
//! of templates to materialize, or a single [`Rejection`]. The decision tree
//! is keyed on the request kind and project structure first, then on the
//! sub-option that structure cares about:
//!
//! - Static sites and server-rendered projects: `htmlOption` and the view type
//! - Single page applications: `jsFramework` and `jsTemplate`
//! - Factories and models: `jsFramework`
//!
//! Every branch validates completely before selecting anything, so a
//! rejected request never yields a partial selection.

mod factory;
mod markup;
mod model;
mod single_page;

use crate::config::{Configuration, Structure};
use crate::error::{Rejection, RejectionReason};
use crate::naming::slugify;
use crate::request::{GenerationRequest, Kind};
use serde::Serialize;

pub use factory::DEFAULT_FACTORY_DIR;

/// Where a selected template lands, before the project layout is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Under the structure's root directory (`client/`, `server/`, ...)
    Root,
    /// Relative to the project directory itself (`test/`, user-chosen locations)
    Project,
}

/// Abstract output location of a selected template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Destination {
    pub anchor: Anchor,
    pub dir: String,
    /// Place the file inside its own `<slug>/` directory
    pub nested: bool,
    /// Appended to the slug in the file name (`-spec`, `.factory`)
    pub suffix: &'static str,
    pub extension: &'static str,
}

impl Destination {
    pub fn under_root(dir: impl Into<String>, extension: &'static str) -> Self {
        Self::new(Anchor::Root, dir, extension)
    }

    pub fn under_project(dir: impl Into<String>, extension: &'static str) -> Self {
        Self::new(Anchor::Project, dir, extension)
    }

    fn new(anchor: Anchor, dir: impl Into<String>, extension: &'static str) -> Self {
        Self {
            anchor,
            dir: dir.into(),
            nested: false,
            suffix: "",
            extension,
        }
    }

    pub fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Location token such as `root/templates/components/{slug}.jade`
    pub fn key(&self) -> String {
        let mut key = String::from(match self.anchor {
            Anchor::Root => "root",
            Anchor::Project => "project",
        });
        for segment in self.dir.split('/').filter(|s| !s.is_empty()) {
            key.push('/');
            key.push_str(segment);
        }
        if self.nested {
            key.push_str("/{slug}");
        }
        key.push_str(&format!("/{{slug}}{}.{}", self.suffix, self.extension));
        key
    }
}

/// One template chosen by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateSelection {
    pub template_id: &'static str,
    pub destination: Destination,
}

impl TemplateSelection {
    pub fn new(template_id: &'static str, destination: Destination) -> Self {
        Self {
            template_id,
            destination,
        }
    }

    pub fn destination_key(&self) -> String {
        self.destination.key()
    }
}

/// Non-fatal remark about how a request was interpreted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Notice(pub String);

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Successful outcome of the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub selections: Vec<TemplateSelection>,
    pub notices: Vec<Notice>,
}

impl Resolution {
    fn new(selections: Vec<TemplateSelection>) -> Self {
        Self {
            selections,
            notices: Vec::new(),
        }
    }

    fn with_notices(mut self, notices: Vec<Notice>) -> Self {
        self.notices = notices;
        self
    }
}

/// Select templates for a request
pub fn resolve(
    config: &Configuration,
    request: &GenerationRequest,
) -> Result<Resolution, Rejection> {
    check_name(request)?;

    match request.kind {
        Kind::View(view) => match config.structure {
            Structure::StaticSite => {
                markup::resolve_view(config, view, &request.options, markup::Flavor::Static)
            }
            Structure::ServerRendered => {
                markup::resolve_view(config, view, &request.options, markup::Flavor::Server)
            }
            Structure::SinglePageApp => single_page::resolve_view(config, view),
        },
        Kind::Factory => factory::resolve(config, &request.options),
        Kind::Model => model::resolve(config),
    }
}

/// Reject names that cannot produce a file name, whatever the kind
pub fn check_name(request: &GenerationRequest) -> Result<(), Rejection> {
    if request.name.trim().is_empty() {
        return Err(Rejection::new(
            RejectionReason::NameRequired,
            format!("Name cannot be empty; a {} needs a name", request.kind.label()),
        ));
    }
    if slugify(&request.name).is_empty() {
        return Err(Rejection::new(
            RejectionReason::InvalidName,
            format!(
                "Name `{}` has no letters or digits to build a file name from",
                request.name
            ),
        ));
    }
    Ok(())
}
