//! Project configuration loaded from the persisted settings document

use super::options::{
    ConfigOption, CssOption, HtmlOption, JsFramework, JsOption, JsTemplate, Structure,
    TestFramework,
};
use super::version;
use crate::error::ConfigError;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::path::Path;

/// Key under which the project generator namespaces its settings in `.yo-rc.json`
pub const GENERATOR_NAMESPACE: &str = "generator-yeogurt";

/// Default settings file name, relative to the project root
pub const SETTINGS_FILE: &str = ".yo-rc.json";

/// Finished project configuration, read-only for the lifetime of a process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub project_name: String,
    pub structure: Structure,
    pub js_framework: JsFramework,
    pub js_template: JsTemplate,
    pub js_option: JsOption,
    pub html_option: HtmlOption,
    pub css_option: CssOption,
    pub test_framework: TestFramework,
    pub extras: BTreeSet<String>,
    pub ie_support: bool,
    pub responsive: bool,
    pub use_ga: bool,
    pub use_testing: bool,
    /// Overrides [`Structure::default_root`]
    pub root_dir: Option<String>,
    /// Version of the CLI that wrote the settings document
    pub generator_version: Option<String>,
}

impl Configuration {
    /// Configuration with every optional key at its default
    pub fn new(project_name: impl Into<String>, structure: Structure) -> Self {
        Self {
            project_name: project_name.into(),
            structure,
            js_framework: JsFramework::default(),
            js_template: JsTemplate::default(),
            js_option: JsOption::default(),
            html_option: HtmlOption::default(),
            css_option: CssOption::default(),
            test_framework: TestFramework::default(),
            extras: BTreeSet::new(),
            ie_support: false,
            responsive: false,
            use_ga: false,
            use_testing: false,
            root_dir: None,
            generator_version: None,
        }
    }

    /// Validate a parsed settings document
    ///
    /// Accepts either the flat settings mapping or the namespaced form
    /// `{"generator-yeogurt": {"config": {...}}}`. Unknown keys are ignored.
    pub fn load(raw: &Value) -> Result<Self, ConfigError> {
        let settings = settings_mapping(raw)?;

        let project_name = required_string(settings, "projectName")?;
        let structure: Structure = required_option(settings, "structure")?;

        let generator_version = optional_string(settings, "generatorVersion")?;
        if let Some(v) = &generator_version {
            version::parse_version(v)
                .map_err(|e| ConfigError::invalid("generatorVersion", e.to_string()))?;
        }

        Ok(Self {
            project_name,
            structure,
            js_framework: optional_option(settings, "jsFramework")?,
            js_template: optional_option(settings, "jsTemplate")?,
            js_option: optional_option(settings, "jsOption")?,
            html_option: optional_option(settings, "htmlOption")?,
            css_option: optional_option(settings, "cssOption")?,
            test_framework: optional_option(settings, "testFramework")?,
            extras: extras(settings)?,
            ie_support: flag(settings, "ieSupport")?,
            responsive: flag(settings, "responsive")?,
            use_ga: flag(settings, "useGA")?,
            use_testing: flag(settings, "useTesting")?,
            root_dir: root_dir(settings)?,
            generator_version,
        })
    }

    /// Parse settings text (JSON or YAML)
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: Value = serde_yaml::from_str(content)?;
        Self::load(&raw)
    }

    /// Read and load a settings file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn has_extra(&self, extra: &str) -> bool {
        self.extras.contains(extra)
    }

    /// Directory generated sources live under
    pub fn root_dir(&self) -> &str {
        self.root_dir
            .as_deref()
            .unwrap_or_else(|| self.structure.default_root())
    }
}

fn settings_mapping(raw: &Value) -> Result<&Mapping, ConfigError> {
    let top = raw
        .as_mapping()
        .ok_or_else(|| ConfigError::invalid("settings", "document must be a mapping"))?;

    let Some(namespaced) = top.get(GENERATOR_NAMESPACE) else {
        return Ok(top);
    };
    let namespaced = namespaced.as_mapping().ok_or_else(|| {
        ConfigError::invalid("settings", format!("`{}` must be a mapping", GENERATOR_NAMESPACE))
    })?;

    match namespaced.get("config") {
        Some(config) => config
            .as_mapping()
            .ok_or_else(|| ConfigError::invalid("settings", "`config` must be a mapping")),
        None => Ok(namespaced),
    }
}

fn optional_string(
    settings: &Mapping,
    field: &'static str,
) -> Result<Option<String>, ConfigError> {
    match settings.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ConfigError::invalid(field, "expected a string")),
    }
}

fn required_string(settings: &Mapping, field: &'static str) -> Result<String, ConfigError> {
    match optional_string(settings, field)? {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(ConfigError::invalid(field, "must not be empty")),
        None => Err(ConfigError::missing(field)),
    }
}

fn parse_option<T: ConfigOption>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    T::parse(value).ok_or_else(|| {
        ConfigError::invalid(
            field,
            format!("unrecognized value `{}` (expected one of: {})", value, T::EXPECTED),
        )
    })
}

fn required_option<T: ConfigOption>(
    settings: &Mapping,
    field: &'static str,
) -> Result<T, ConfigError> {
    let value = optional_string(settings, field)?.ok_or_else(|| ConfigError::missing(field))?;
    parse_option(field, &value)
}

fn optional_option<T: ConfigOption + Default>(
    settings: &Mapping,
    field: &'static str,
) -> Result<T, ConfigError> {
    match optional_string(settings, field)? {
        Some(value) => parse_option(field, &value),
        None => Ok(T::default()),
    }
}

fn flag(settings: &Mapping, field: &'static str) -> Result<bool, ConfigError> {
    match settings.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(ConfigError::invalid(field, "expected true or false")),
    }
}

/// Must stay inside the project directory
fn root_dir(settings: &Mapping) -> Result<Option<String>, ConfigError> {
    let Some(dir) = optional_string(settings, "rootDir")? else {
        return Ok(None);
    };

    if dir.trim().is_empty() {
        return Err(ConfigError::invalid("rootDir", "must not be empty"));
    }
    if dir.starts_with('/') || dir.starts_with('\\') {
        return Err(ConfigError::invalid(
            "rootDir",
            format!("`{}` must be relative to the project directory", dir),
        ));
    }
    if dir.split(['/', '\\']).any(|segment| segment == "..") {
        return Err(ConfigError::invalid(
            "rootDir",
            format!("`{}` must not leave the project directory", dir),
        ));
    }

    Ok(Some(dir))
}

fn extras(settings: &Mapping) -> Result<BTreeSet<String>, ConfigError> {
    let items = match settings.get("extras") {
        None | Some(Value::Null) => return Ok(BTreeSet::new()),
        Some(Value::Sequence(items)) => items,
        Some(_) => return Err(ConfigError::invalid("extras", "expected a list of strings")),
    };

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ConfigError::invalid("extras", "expected a list of strings"))
        })
        .collect()
}
