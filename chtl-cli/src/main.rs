// Command-line interface for chtl
//
// Compiles one CHTL source file into a single HTML document with its CSS and JS
// embedded. The pipeline itself lives in chtl-core; this binary only deals with
// files, configuration and reporting.
//
// Usage:
//  chtl <source> [output]                 - Compile, printing to stdout or writing to output
//  chtl <source> --diagnostics json       - Report diagnostics as JSON on stderr
//  chtl <source> --config site.toml       - Layer a configuration file over the defaults
//
// Configuration:
//
// Built-in defaults come from chtl-config. A chtl.toml in the working directory is layered on
// top when present, then the file given with --config, then the command-line flags.
//
// Exit codes:
//
// Compile diagnostics never change the exit code; malformed input still produces a document.
// Only a missing source, I/O failures and bad configuration exit with 1.

use chtl_config::{ChtlConfig, ConfigError, DiagnosticsFormat, Loader, PROJECT_FILE};
use chtl_core::{compile_with_options, CompileOptions, CompiledDocument};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
enum CliError {
    #[error("source file `{}` does not exist", .0.display())]
    PathNotFound(PathBuf),
    #[error("failed to read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write `{}`: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to serialize diagnostics: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn build_cli() -> Command {
    Command::new("chtl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile CHTL sources to HTML")
        .long_about(
            "chtl compiles a CHTL source file into one HTML document.\n\n\
            Local style and script blocks are hoisted into a single top-level\n\
            <style> and <script> block. CHTL JS selectors ({{ .box }}) and arrows (->)\n\
            are lowered to plain JavaScript.\n\n\
            Examples:\n  \
            chtl page.chtl                        # Print the document to stdout\n  \
            chtl page.chtl page.html              # Write the document to a file\n  \
            chtl page.chtl --diagnostics json     # Machine-readable diagnostics on stderr\n  \
            chtl page.chtl --title Home --lang en # Scaffold options",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("source")
                .help("Path to the CHTL source file")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Output file path (defaults to stdout)")
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chtl.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("diagnostics")
                .long("diagnostics")
                .value_name("FORMAT")
                .help("How diagnostics are reported on stderr")
                .value_parser(clap::builder::PossibleValuesParser::new(
                    DiagnosticsFormat::ALL.map(|format| format.as_str()),
                ))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("no-prelude")
                .long("no-prelude")
                .help("Do not prepend the CHTL JS runtime helper")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Title of the generated document scaffold")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("lang")
                .long("lang")
                .value_name("LANG")
                .help("lang attribute of the generated <html> element")
                .value_hint(ValueHint::Other),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = build_cli().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let source_path = PathBuf::from(
        matches
            .get_one::<String>("source")
            .expect("source is required"),
    );
    if !source_path.exists() {
        return Err(CliError::PathNotFound(source_path));
    }

    let config = load_cli_config(matches, Path::new(PROJECT_FILE))?;
    let options = CompileOptions::from(&config);
    debug!("compile options: {options:?}");

    let source = fs::read_to_string(&source_path).map_err(|source| CliError::Read {
        path: source_path.clone(),
        source,
    })?;

    let document = compile_with_options(&source, &options);
    report_diagnostics(&source_path, &document, config.diagnostics.format)?;

    match matches.get_one::<String>("output") {
        Some(output) => {
            let output = PathBuf::from(output);
            fs::write(&output, &document.html).map_err(|source| CliError::Write {
                path: output.clone(),
                source,
            })?;
            info!("wrote {}", output.display());
        }
        None => print!("{}", document.html),
    }
    Ok(())
}

/// Defaults, then the project file, then `--config`, then flags
fn load_cli_config(matches: &ArgMatches, project_file: &Path) -> Result<ChtlConfig, CliError> {
    let mut loader = Loader::new().with_optional_file(project_file);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    if let Some(format) = matches.get_one::<String>("diagnostics") {
        loader = loader.set_override("diagnostics.format", format.as_str())?;
    }
    if matches.get_flag("no-prelude") {
        loader = loader.set_override("compile.runtime_prelude", false)?;
    }
    if let Some(title) = matches.get_one::<String>("title") {
        loader = loader.set_override("document.title", title.as_str())?;
    }
    if let Some(lang) = matches.get_one::<String>("lang") {
        loader = loader.set_override("document.lang", lang.as_str())?;
    }

    Ok(loader.build()?)
}

fn report_diagnostics(
    path: &Path,
    document: &CompiledDocument,
    format: DiagnosticsFormat,
) -> Result<(), CliError> {
    match format {
        DiagnosticsFormat::None => {}
        DiagnosticsFormat::Text => {
            for diagnostic in &document.diagnostics {
                eprintln!("{}: {diagnostic}", path.display());
            }
        }
        DiagnosticsFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(&document.diagnostics)?);
        }
    }
    Ok(())
}
