//! Yogurt CLI - generate views, factories and models in an existing project

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use yogurt_core::config::{check_compatibility, SETTINGS_FILE};
use yogurt_core::rules::{check_name, DEFAULT_FACTORY_DIR};
use yogurt_core::templates::verify_template_dir;
use yogurt_core::{
    Configuration, GenerationPlan, GenerationRequest, JsFramework, Kind, Notice, PlanError,
    Rejection, RequestOptions, ViewType,
};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Shown when the project was generated by a newer CLI
const UPGRADE_COMMAND: &str = "cargo install yogurt-tools --force";

const EXIT_SUCCESS: u8 = 0;

/// Exit status for a refused request
const EXIT_REJECTED: u8 = 1;

/// Exit status for rule engine defects (EX_SOFTWARE)
const EXIT_INTERNAL: u8 = 70;

#[derive(Parser, Debug)]
#[command(name = "yogurt")]
#[command(about = "Generate views, factories and models inside a yogurt project")]
#[command(version)]
pub struct Args {
    /// Project settings file
    #[arg(long, global = true, default_value = SETTINGS_FILE)]
    pub config: PathBuf,

    /// Output format for the generated manifest
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Never prompt; use defaults for anything not given on the command line
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan the files for a new view, factory or model
    #[command(subcommand)]
    Generate(GenerateCommand),
    /// Check that a template directory provides every template (for development use)
    Templates(TemplatesArgs),
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    /// A page, component or template view
    View(ViewArgs),
    /// An Angular factory
    Factory(FactoryArgs),
    /// A Backbone model
    Model(NameArg),
}

#[derive(ClapArgs, Debug)]
pub struct NameArg {
    /// Name of the generated item
    pub name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct ViewArgs {
    /// Name of the view
    pub name: Option<String>,

    /// Kind of view to create
    #[arg(long = "type", value_enum, default_value_t = ViewTypeArg::Page)]
    pub view_type: ViewTypeArg,

    /// Extend the base layout template (pages only)
    #[arg(long)]
    pub template: bool,

    /// Do not register the view's imports
    #[arg(long = "no-import")]
    pub no_import: bool,

    /// Add the page to the dashboard
    #[arg(long)]
    pub dashboard: bool,
}

#[derive(ClapArgs, Debug)]
pub struct FactoryArgs {
    /// Name of the factory
    pub name: Option<String>,

    /// Directory to create the factory in, relative to the project root
    #[arg(long)]
    pub dir: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct TemplatesArgs {
    /// Local directory containing templates
    #[arg(long = "template-dir", default_value = "templates")]
    pub template_dir: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewTypeArg {
    Page,
    Component,
    Template,
}

impl From<ViewTypeArg> for ViewType {
    fn from(arg: ViewTypeArg) -> Self {
        match arg {
            ViewTypeArg::Page => ViewType::Page,
            ViewTypeArg::Component => ViewType::Component,
            ViewTypeArg::Template => ViewType::Template,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    code
}

fn run(args: Args) -> Result<ExitCode> {
    match &args.command {
        Command::Generate(generate) => run_generate(&args, generate),
        Command::Templates(templates) => run_templates(templates),
    }
}

fn run_generate(args: &Args, command: &GenerateCommand) -> Result<ExitCode> {
    let config = Configuration::from_path(&args.config).with_context(|| {
        format!(
            "Failed to load project settings from {}",
            args.config.display()
        )
    })?;

    if let Some(version) = &config.generator_version {
        if let Some(warning) = check_compatibility(CLI_VERSION, version, UPGRADE_COMMAND) {
            eprintln!("{} {}", "Warning:".yellow(), warning);
        }
    }

    let interactive = !args.yes && yogurt_core::tui::is_interactive();
    let request = build_request(command, &config, interactive)?;

    let outcome = yogurt_core::plan(&config, &request);
    match &outcome {
        Ok(plan) => {
            print_notices(&plan.notices, interactive)?;
            print_plan(plan, args.format)?;
        }
        Err(PlanError::Rejected(rejection)) => {
            print_rejection(rejection, interactive, args.format)?;
        }
        Err(PlanError::Invariant(violation)) => {
            eprintln!(
                "{} {} (this is a bug, please report it)",
                "Internal error:".red().bold(),
                violation
            );
        }
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}

/// Process exit status for the outcome of a plan
fn exit_status(outcome: &Result<GenerationPlan, PlanError>) -> u8 {
    match outcome {
        Ok(_) => EXIT_SUCCESS,
        Err(PlanError::Rejected(_)) => EXIT_REJECTED,
        Err(PlanError::Invariant(_)) => EXIT_INTERNAL,
    }
}

fn build_request(
    command: &GenerateCommand,
    config: &Configuration,
    interactive: bool,
) -> Result<GenerationRequest> {
    let request = match command {
        GenerateCommand::View(view) => GenerationRequest::new(
            Kind::View(view.view_type.into()),
            view.name.clone().unwrap_or_default(),
        )
        .with_options(RequestOptions {
            dashboard: view.dashboard,
            no_import: view.no_import,
            use_template: view.template,
            location: None,
        }),
        GenerateCommand::Factory(factory) => {
            let mut request = GenerationRequest::factory(factory.name.clone().unwrap_or_default())
                .with_options(RequestOptions {
                    location: factory.dir.clone(),
                    ..Default::default()
                });

            if interactive && should_ask_location(&request, config) {
                let default = format!("{}/{}", config.root_dir(), DEFAULT_FACTORY_DIR);
                let location = yogurt_core::tui::ask_factory_location(&default)?;
                request.options.location = Some(location);
            }

            request
        }
        GenerateCommand::Model(model) => {
            GenerationRequest::model(model.name.clone().unwrap_or_default())
        }
    };

    Ok(request)
}

/// Only worth asking when the rule engine will accept the factory
fn should_ask_location(request: &GenerationRequest, config: &Configuration) -> bool {
    request.options.location.is_none()
        && config.js_framework == JsFramework::Angular
        && check_name(request).is_ok()
}

fn print_notices(notices: &[Notice], interactive: bool) -> Result<()> {
    if interactive {
        return yogurt_core::tui::log_notices(notices);
    }
    for notice in notices {
        eprintln!("{} {}", "Notice:".yellow(), notice.message());
    }
    Ok(())
}

fn print_rejection(rejection: &Rejection, interactive: bool, format: OutputFormat) -> Result<()> {
    if interactive {
        yogurt_core::tui::log_rejection(rejection)?;
    } else {
        eprintln!(
            "{} {} ({})",
            "Aborted:".red().bold(),
            rejection.message,
            rejection.reason
        );
    }

    if let Some(document) = render_document(rejection, format)? {
        print!("{}", document);
    }
    Ok(())
}

/// Machine-readable rendering for `--format yaml|json`; `None` for text output
fn render_document<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    let document = match format {
        OutputFormat::Text => return Ok(None),
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML")?,
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;
            json.push('\n');
            json
        }
    };
    Ok(Some(document))
}

fn print_plan(plan: &GenerationPlan, format: OutputFormat) -> Result<()> {
    if let Some(document) = render_document(plan, format)? {
        print!("{}", document);
        return Ok(());
    }

    for entry in &plan.manifest {
        println!(
            "  {} {} {}",
            "->".blue(),
            entry.output_path,
            format!("({})", entry.template_id).dimmed()
        );
    }
    println!();
    println!(
        "{} {} file(s) for {}",
        "Planned".green().bold(),
        plan.manifest.len(),
        plan.context.project_name
    );
    Ok(())
}

fn run_templates(args: &TemplatesArgs) -> Result<ExitCode> {
    let dir = &args.template_dir;
    let report = verify_template_dir(dir)
        .with_context(|| format!("Failed to verify templates in {}", dir.display()))?;

    println!(
        "{}",
        format!("Checking templates in {}...", dir.display())
            .cyan()
            .bold()
    );
    println!();

    for id in &report.found {
        println!("  {} {} {}", "->".blue(), id, "ok".green());
    }
    for id in &report.missing {
        println!("  {} {} {}", "->".blue(), id, "missing".red());
    }
    for file in &report.unused {
        eprintln!(
            "{} {} is not used by any generator",
            "Warning:".yellow(),
            file
        );
    }

    println!();
    if report.is_complete() {
        println!(
            "{} all {} template(s) present",
            "Done:".green().bold(),
            report.found.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} template(s) missing",
            "Incomplete:".red().bold(),
            report.missing.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_view_flags() {
        let args = Args::try_parse_from([
            "yogurt", "generate", "view", "My Page", "--type", "component", "--template",
            "--no-import", "--dashboard",
        ])
        .unwrap();
        let Command::Generate(GenerateCommand::View(view)) = args.command else {
            panic!("expected view command");
        };
        assert_eq!(view.name.as_deref(), Some("My Page"));
        assert_eq!(view.view_type, ViewTypeArg::Component);
        assert!(view.template && view.no_import && view.dashboard);
    }

    #[test]
    fn test_missing_name_reaches_rule_engine() {
        let args = Args::try_parse_from(["yogurt", "generate", "model"]).unwrap();
        let Command::Generate(command) = &args.command else {
            panic!("expected generate command");
        };
        let config = Configuration::new("app", yogurt_core::Structure::SinglePageApp);
        let request = build_request(command, &config, false).unwrap();
        let err = yogurt_core::plan(&config, &request).unwrap_err();
        assert!(matches!(
            err,
            PlanError::Rejected(Rejection {
                reason: yogurt_core::RejectionReason::NameRequired,
                ..
            })
        ));
    }

    #[test]
    fn test_factory_dir_flag_becomes_location() {
        let args = Args::try_parse_from([
            "yogurt", "--yes", "generate", "factory", "auth", "--dir", "client/core",
        ])
        .unwrap();
        let Command::Generate(command) = &args.command else {
            panic!("expected generate command");
        };
        let mut config = Configuration::new("app", yogurt_core::Structure::SinglePageApp);
        config.js_framework = JsFramework::Angular;
        let request = build_request(command, &config, false).unwrap();
        assert_eq!(request.options.location.as_deref(), Some("client/core"));
        assert_eq!(args.config, PathBuf::from(".yo-rc.json"));
    }

    fn angular() -> Configuration {
        let mut config = Configuration::new("app", yogurt_core::Structure::SinglePageApp);
        config.js_framework = JsFramework::Angular;
        config
    }

    #[test]
    fn test_exit_status_for_each_outcome() {
        let config = angular();

        let planned = yogurt_core::plan(&config, &GenerationRequest::factory("auth"));
        assert_eq!(exit_status(&planned), 0);

        let rejected = yogurt_core::plan(&config, &GenerationRequest::model("todo"));
        assert!(matches!(rejected, Err(PlanError::Rejected(_))));
        assert_eq!(exit_status(&rejected), 1);

        let defect = Err(PlanError::Invariant(
            yogurt_core::InvariantViolation::DuplicateOutputPath {
                path: "client/app/auth/auth.factory.js".to_string(),
                first: "factory.js".to_string(),
                second: "factory.js".to_string(),
            },
        ));
        assert_eq!(exit_status(&defect), 70);
    }

    #[test]
    fn test_rejection_rendered_in_structured_formats() {
        let config = angular();
        let Err(PlanError::Rejected(rejection)) =
            yogurt_core::plan(&config, &GenerationRequest::model("todo"))
        else {
            panic!("expected a rejection");
        };

        assert!(render_document(&rejection, OutputFormat::Text)
            .unwrap()
            .is_none());

        let json = render_document(&rejection, OutputFormat::Json).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["reason"], "model-requires-backbone");
        assert_eq!(value["message"], rejection.message.as_str());

        let yaml = render_document(&rejection, OutputFormat::Yaml).unwrap().unwrap();
        assert!(yaml.contains("reason: model-requires-backbone"));
    }

    #[test]
    fn test_location_prompt_only_for_acceptable_factories() {
        let config = angular();
        assert!(should_ask_location(&GenerationRequest::factory("auth"), &config));

        for name in ["", "   ", "!!!"] {
            assert!(!should_ask_location(&GenerationRequest::factory(name), &config));
        }

        let located = GenerationRequest::factory("auth").with_options(RequestOptions {
            location: Some("client/core".to_string()),
            ..Default::default()
        });
        assert!(!should_ask_location(&located, &config));

        let no_framework = Configuration::new("app", yogurt_core::Structure::SinglePageApp);
        assert!(!should_ask_location(&GenerationRequest::factory("auth"), &no_framework));
    }
}
