//! Configuration model
//!
//! This module provides:
//! - The recognized value sets for every enumerated settings key
//! - `Configuration`, validated from a `.yo-rc.json`-style settings document
//! - Version compatibility between the CLI and the project settings

pub mod options;
pub mod settings;
pub mod version;

pub use options::{
    ConfigOption, CssOption, HtmlOption, JsFramework, JsOption, JsTemplate, Structure,
    TestFramework,
};
pub use settings::{Configuration, GENERATOR_NAMESPACE, SETTINGS_FILE};
pub use version::check_compatibility;
