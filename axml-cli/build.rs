use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the transforms from src/transforms.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_TRANSFORMS: &[&str] = &[
    "source-json",
    "source-paths",
    "xaml-json",
    "xaml-paths",
    "xaml",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("axml2xaml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Android layout files to Xamarin.Forms XAML pages")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-mappings")
                .long("list-mappings")
                .help("List element, attribute and binding mappings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an axml.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a layout file to a XAML page (default command)")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("namespace")
                        .long("namespace")
                        .short('n')
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .short('x')
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("data-context")
                        .long("data-context")
                        .short('d')
                        .action(ArgAction::SetTrue),
                )
                .arg(Arg::new("image-extension").long("image-extension"))
                .arg(Arg::new("trace").long("trace").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect a layout file before or after conversion")
                .arg(
                    Arg::new("path")
                        .help("Path to the layout file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply")
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "axml2xaml", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "axml2xaml", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "axml2xaml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
