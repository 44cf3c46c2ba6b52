use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command defined in src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
const DIAGNOSTIC_FORMATS: &[&str] = &["text", "json", "none"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("chtl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile CHTL sources to HTML")
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
                    DIAGNOSTIC_FORMATS,
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chtl", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chtl", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chtl", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
