//! CLI entry point for the bridge class generator.
//!
//! One invocation processes one root header: parse the inheritance chain,
//! render the two ScriptForward artifacts, and write them out.

use bridgegen::io::{ExitCode, JsonResponse, OutputFormat};
use bridgegen::{BridgeResult, FunctionInfo, HeaderWalker, Settings, generate};
use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// What a generation run produced, for the text and JSON reports.
#[derive(Debug, Serialize)]
struct GenerateReport {
    class_name: String,
    bridge_class: String,
    functions: Vec<FunctionInfo>,
    includes: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    header_artifact: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    implementation_artifact: Option<PathBuf>,
    dry_run: bool,
}

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Script-forward bridge class generator
#[derive(Parser)]
#[command(
    name = "bridgegen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Script-forward bridge class generator",
    long_about = "Generate a ScriptForward bridge class from a C++ class header.\n\
                  Each virtual method of the class (and its base classes) becomes a pair of\n\
                  methods dispatching between scripted overrides and native behavior.",
    styles = clap_cargo_style()
)]
struct Cli {
    /// Path to the root C++ header to generate a bridge class for
    #[arg(required_unless_present = "print_config")]
    header: Option<PathBuf>,

    /// Directory to write the artifacts into (overrides configuration)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Parse and render without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Emit a JSON result envelope instead of text
    #[arg(long)]
    json: bool,

    /// Path to a custom bridgegen.toml file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the active configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let cli = Cli::parse();
    let format = OutputFormat::from_json_flag(cli.json);

    // Load configuration
    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with_error(e, format),
    };

    init_tracing(&settings);

    if cli.print_config {
        match toml::to_string_pretty(&settings) {
            Ok(toml_str) => println!("{toml_str}"),
            Err(e) => eprintln!("Error displaying config: {e}"),
        }
        return;
    }

    let header = cli
        .header
        .as_deref()
        .expect("clap enforces the header argument");
    let out_dir = cli.out_dir.as_deref().unwrap_or(&settings.out_dir);

    let report = match run(header, out_dir, cli.dry_run, &settings) {
        Ok(report) => report,
        Err(e) => exit_with_error(e, format),
    };

    if format.is_json() {
        match serde_json::to_string_pretty(&JsonResponse::success(&report)) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize response: {e}");
                std::process::exit(ExitCode::GeneralError as i32);
            }
        }
    } else {
        print_text_report(&report);
    }
}

fn load_settings(cli: &Cli) -> BridgeResult<Settings> {
    match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    }
}

fn init_tracing(settings: &Settings) {
    use tracing_subscriber::EnvFilter;

    let default_directive = if settings.debug { "bridgegen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse, render, and (unless dry-running) write both artifacts.
fn run(
    header: &std::path::Path,
    out_dir: &std::path::Path,
    dry_run: bool,
    settings: &Settings,
) -> BridgeResult<GenerateReport> {
    let model = HeaderWalker::new(settings).parse(header)?;
    let artifacts = generate::render(&model, settings);

    let (header_artifact, implementation_artifact) = if dry_run {
        (None, None)
    } else {
        let (header_path, impl_path) = generate::write_artifacts(out_dir, &artifacts)?;
        (Some(header_path), Some(impl_path))
    };

    info!(
        class = %model.class_name,
        functions = model.functions.len(),
        dry_run,
        "generation finished"
    );
    Ok(GenerateReport {
        bridge_class: format!("{}ScriptForward", model.class_name),
        class_name: model.class_name,
        functions: model.functions,
        includes: model.includes,
        header_artifact,
        implementation_artifact,
        dry_run,
    })
}

fn print_text_report(report: &GenerateReport) {
    println!(
        "Generated {} for {} ({} forwarded method{})",
        report.bridge_class,
        report.class_name,
        report.functions.len(),
        if report.functions.len() == 1 { "" } else { "s" }
    );
    for function in &report.functions {
        println!(
            "  {} {}({} {})",
            function.return_type, function.name, function.argument_type, function.argument_name
        );
    }
    match (&report.header_artifact, &report.implementation_artifact) {
        (Some(header), Some(implementation)) => {
            println!("Wrote {}", header.display());
            println!("Wrote {}", implementation.display());
        }
        _ => println!("Dry run: no files written"),
    }
}

fn exit_with_error(error: bridgegen::BridgeError, format: OutputFormat) -> ! {
    let exit_code = ExitCode::from_error(&error);
    if format.is_json() {
        let response = JsonResponse::from_error(&error);
        match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("Failed to serialize error response: {e}"),
        }
    } else {
        eprintln!("Error: {error}");
        for suggestion in error.recovery_suggestions() {
            eprintln!("  hint: {suggestion}");
        }
    }
    std::process::exit(exit_code as i32);
}
