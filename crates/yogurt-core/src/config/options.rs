//! Recognized values for every enumerated settings key
//!
//! Settings documents written by the project generator store the labels shown
//! in its prompts ("Single Page Application", "None (Vanilla HTML)"), while
//! hand-edited documents tend to use short names ("spa", "vanilla"). Both are
//! accepted, case-insensitively. Anything else is rejected.

use std::fmt;

/// A settings value drawn from a closed set
pub trait ConfigOption: Sized + Copy {
    /// Human-readable list of accepted values, used in error messages
    const EXPECTED: &'static str;

    /// Parse a normalized value (see [`normalize`])
    fn from_normalized(value: &str) -> Option<Self>;

    fn parse(raw: &str) -> Option<Self> {
        Self::from_normalized(&normalize(raw))
    }
}

/// Lower-case, treat `-`/`_` as spaces, collapse whitespace
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Top-level project architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    StaticSite,
    SinglePageApp,
    ServerRendered,
}

impl Structure {
    pub fn display_name(&self) -> &'static str {
        match self {
            Structure::StaticSite => "Static Site",
            Structure::SinglePageApp => "Single Page Application",
            Structure::ServerRendered => "Server Rendered",
        }
    }

    /// Directory generated sources live under unless the project overrides it
    pub fn default_root(&self) -> &'static str {
        match self {
            Structure::StaticSite | Structure::SinglePageApp => "client",
            Structure::ServerRendered => "server",
        }
    }
}

impl ConfigOption for Structure {
    const EXPECTED: &'static str = "Static Site, Single Page Application, Server Rendered";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "static site" | "staticsite" | "static" => Some(Structure::StaticSite),
            "single page application" | "single page app" | "singlepageapp" | "spa" => {
                Some(Structure::SinglePageApp)
            }
            "server rendered" | "serverrendered" | "server" => Some(Structure::ServerRendered),
            _ => None,
        }
    }
}

/// Client-side application framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsFramework {
    #[default]
    None,
    Angular,
    Backbone,
    React,
}

impl JsFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            JsFramework::None => "None",
            JsFramework::Angular => "Angular",
            JsFramework::Backbone => "Backbone",
            JsFramework::React => "React",
        }
    }
}

impl ConfigOption for JsFramework {
    const EXPECTED: &'static str = "None, Angular, Backbone, React";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "none" => Some(JsFramework::None),
            "angular" | "angularjs" => Some(JsFramework::Angular),
            "backbone" => Some(JsFramework::Backbone),
            "react" | "backbone + react" => Some(JsFramework::React),
            _ => None,
        }
    }
}

/// Client-side templating language for single page applications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsTemplate {
    #[default]
    None,
    Underscore,
    Handlebars,
    Jade,
    React,
}

impl JsTemplate {
    pub fn display_name(&self) -> &'static str {
        match self {
            JsTemplate::None => "None",
            JsTemplate::Underscore => "Lo-dash (Underscore)",
            JsTemplate::Handlebars => "Handlebars",
            JsTemplate::Jade => "Jade",
            JsTemplate::React => "React",
        }
    }

    /// Extension of the template body paired with a generated view, if any
    pub fn body_extension(&self) -> Option<&'static str> {
        match self {
            JsTemplate::Underscore => Some("jst"),
            JsTemplate::Handlebars => Some("hbs"),
            JsTemplate::Jade => Some("jade"),
            JsTemplate::None | JsTemplate::React => None,
        }
    }
}

impl ConfigOption for JsTemplate {
    const EXPECTED: &'static str = "None, Lo-dash (Underscore), Handlebars, Jade, React";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "none" => Some(JsTemplate::None),
            "lo dash (underscore)" | "lodash (underscore)" | "underscore" | "lodash"
            | "lo dash" => Some(JsTemplate::Underscore),
            "handlebars" | "hbs" => Some(JsTemplate::Handlebars),
            "jade" => Some(JsTemplate::Jade),
            "react" | "jsx" => Some(JsTemplate::React),
            _ => None,
        }
    }
}

/// Script module loader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JsOption {
    #[default]
    None,
    RequireJs,
    Browserify,
}

impl JsOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            JsOption::None => "None",
            JsOption::RequireJs => "RequireJS",
            JsOption::Browserify => "Browserify",
        }
    }
}

impl ConfigOption for JsOption {
    const EXPECTED: &'static str = "None, RequireJS, Browserify";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "none" => Some(JsOption::None),
            "requirejs" | "require js" | "require" => Some(JsOption::RequireJs),
            "browserify" => Some(JsOption::Browserify),
            _ => None,
        }
    }
}

/// Server or static HTML templating language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HtmlOption {
    Jade,
    Swig,
    #[default]
    Vanilla,
}

impl HtmlOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            HtmlOption::Jade => "Jade",
            HtmlOption::Swig => "Swig",
            HtmlOption::Vanilla => "None (Vanilla HTML)",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            HtmlOption::Jade => "jade",
            HtmlOption::Swig => "swig",
            HtmlOption::Vanilla => "html",
        }
    }
}

impl ConfigOption for HtmlOption {
    const EXPECTED: &'static str = "Jade, Swig, None (Vanilla HTML)";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "jade" => Some(HtmlOption::Jade),
            "swig" => Some(HtmlOption::Swig),
            "none (vanilla html)" | "vanilla html" | "vanilla" | "html" | "none" => {
                Some(HtmlOption::Vanilla)
            }
            _ => None,
        }
    }
}

/// Stylesheet pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CssOption {
    Sass,
    Less,
    #[default]
    Plain,
}

impl CssOption {
    pub fn display_name(&self) -> &'static str {
        match self {
            CssOption::Sass => "Sass",
            CssOption::Less => "LESS",
            CssOption::Plain => "None (Vanilla CSS)",
        }
    }
}

impl ConfigOption for CssOption {
    const EXPECTED: &'static str = "Sass, LESS, None (Vanilla CSS)";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "sass" | "scss" => Some(CssOption::Sass),
            "less" => Some(CssOption::Less),
            "none (vanilla css)" | "vanilla css" | "vanilla" | "css" | "plain" | "none" => {
                Some(CssOption::Plain)
            }
            _ => None,
        }
    }
}

/// Unit test runner used by generated specs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestFramework {
    #[default]
    Jasmine,
    Mocha,
}

impl TestFramework {
    pub fn display_name(&self) -> &'static str {
        match self {
            TestFramework::Jasmine => "Jasmine",
            TestFramework::Mocha => "Mocha",
        }
    }
}

impl ConfigOption for TestFramework {
    const EXPECTED: &'static str = "Jasmine, Mocha";

    fn from_normalized(value: &str) -> Option<Self> {
        match value {
            "jasmine" => Some(TestFramework::Jasmine),
            "mocha" => Some(TestFramework::Mocha),
            _ => None,
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for HtmlOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
