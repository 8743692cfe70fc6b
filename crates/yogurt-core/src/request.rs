//! Per-invocation generation requests

use std::fmt;

/// Flavour of view requested with `generate view --type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewType {
    #[default]
    Page,
    Component,
    Template,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Page => "page",
            ViewType::Component => "component",
            ViewType::Template => "template",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the user asked to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    View(ViewType),
    Factory,
    Model,
}

impl Kind {
    pub fn label(&self) -> &'static str {
        match self {
            Kind::View(_) => "view",
            Kind::Factory => "factory",
            Kind::Model => "model",
        }
    }
}

/// Flags passed alongside a request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Register the generated page on the project dashboard
    pub dashboard: bool,
    /// Do not add an import for the generated view to the main stylesheet/script
    pub no_import: bool,
    /// Page extends the project's base layout template
    pub use_template: bool,
    /// Directory factories are created in, relative to the project root
    pub location: Option<String>,
}

/// A single generate invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: Kind,
    pub name: String,
    pub options: RequestOptions,
}

impl GenerationRequest {
    pub fn new(kind: Kind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            options: RequestOptions::default(),
        }
    }

    pub fn view(view: ViewType, name: impl Into<String>) -> Self {
        Self::new(Kind::View(view), name)
    }

    pub fn factory(name: impl Into<String>) -> Self {
        Self::new(Kind::Factory, name)
    }

    pub fn model(name: impl Into<String>) -> Self {
        Self::new(Kind::Model, name)
    }

    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// View type for view requests, `None` for scripts
    pub fn view_type(&self) -> Option<ViewType> {
        match self.kind {
            Kind::View(view) => Some(view),
            Kind::Factory | Kind::Model => None,
        }
    }
}
