// Command-line interface for axml2xaml
//
// This binary converts Android layout files (AXML) into Xamarin.Forms XAML pages.
// The conversion itself lives in axml-babel; this crate wires arguments, configuration
// (axml-config) and logging around it.
//
// Usage:
//  axml2xaml -i <input> -o <output> -n <namespace> [-x] [-d]   - Convert a layout (default)
//  axml2xaml convert -i <input> -o <output> -n <namespace>     - Same as above (explicit)
//  axml2xaml inspect <path> [<transform>]                      - Show a layout at some stage
//  axml2xaml --list-mappings                                   - Print the mapping tables
//
// Configuration:
//
// Defaults are embedded (see axml-config). An `axml.toml` in the working directory and a file
// given with --config are layered on top, then command-line flags override single keys.
// Logging goes to stderr; RUST_LOG takes precedence over --verbose.

mod transforms;

use axml_babel::binding::BINDING_MAP;
use axml_babel::mapping::{ATTRIBUTE_MAP, ELEMENT_MAP};
use axml_babel::spacing::{MARGIN, PADDING};
use axml_babel::{export, ConvertOptions, ExportOutcome};
use axml_config::{AxmlConfig, Loader, PROJECT_CONFIG_FILE};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::fs;
use std::io::IsTerminal;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "help"];

fn build_cli() -> Command {
    Command::new("axml2xaml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Android layout files to Xamarin.Forms XAML pages")
        .long_about(
            "axml2xaml converts Android layout XML (AXML) into Xamarin.Forms XAML.\n\n\
            Commands:\n  \
            - convert: Write a XAML page for a layout file (default command)\n  \
            - inspect: View a layout before or after conversion\n\n\
            Examples:\n  \
            axml2xaml -i Main.axml -o MainPage.xaml -n MyApp.Views\n  \
            axml2xaml convert -i Main.axml -o MainPage.xaml -n MyApp.Views -x -d\n  \
            axml2xaml inspect Main.axml xaml-paths",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-mappings")
                .long("list-mappings")
                .help("List element, attribute and binding mappings")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an axml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log conversion details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a layout file to a XAML page (default command)")
                .long_about(
                    "Convert an Android layout file to a Xamarin.Forms ContentPage.\n\n\
                    The page class is <namespace>.<output file name without extension>.\n\
                    Without a namespace (from -n or the configuration) the class is just\n\
                    the output file name.\n\
                    An existing output file is only replaced with --overwrite.\n\
                    A layout whose root element has no Forms counterpart produces no file.",
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .short('i')
                        .help("Path to the layout file")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Path of the XAML page to write")
                        .required(true)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("namespace")
                        .long("namespace")
                        .short('n')
                        .help("Namespace of the generated page class")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("overwrite")
                        .long("overwrite")
                        .short('x')
                        .help("Replace the output file if it exists")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("data-context")
                        .long("data-context")
                        .short('d')
                        .help("Add design-time data context declarations to the page")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("image-extension")
                        .long("image-extension")
                        .value_name("EXT")
                        .help("Extension appended to image sources (default: png)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("trace")
                        .long("trace")
                        .help("Print the path of every produced node to stdout")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect a layout file before or after conversion")
                .long_about(
                    "View a layout at different stages.\n\n\
                    Transforms (stage-format):\n  \
                    - source-json:   Source elements and attributes as JSON\n  \
                    - source-paths:  Source element paths\n  \
                    - xaml-json:     Converted tree as JSON\n  \
                    - xaml-paths:    Converted node paths (default)\n  \
                    - xaml:          The full page",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the layout file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply. Defaults to 'xaml-paths'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => {
            // Flags without a subcommand are convert flags: inject "convert" and retry
            if should_inject_convert(&args) {
                let mut new_args = vec![args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&args[1..]);
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-mappings") {
        handle_list_mappings_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, config),
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                eprintln!("Error: a layout path is required");
                std::process::exit(1);
            };
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or(transforms::DEFAULT_TRANSFORM);
            handle_inspect_command(path, transform, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn should_inject_convert(args: &[String]) -> bool {
    match args.get(1) {
        Some(first) => {
            !SUBCOMMANDS.contains(&first.as_str())
                && !matches!(
                    first.as_str(),
                    "-h" | "--help" | "-V" | "--version" | "--list-mappings"
                )
        }
        None => false,
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Handle the convert command
fn handle_convert_command(matches: &ArgMatches, config: AxmlConfig) {
    let (Some(input), Some(output)) = (
        matches.get_one::<String>("input"),
        matches.get_one::<String>("output"),
    ) else {
        eprintln!("Error: both --input and --output are required");
        std::process::exit(1);
    };

    let options = convert_options(matches, config);
    let trace = matches.get_flag("trace");
    tracing::debug!(
        input = %input,
        output = %output,
        namespace = %options.namespace,
        overwrite = options.overwrite,
        data_context = options.data_context,
        image_extension = %options.image_extension,
        "resolved convert options"
    );

    let outcome = export(Path::new(input), Path::new(output), &options, &mut |path| {
        if trace {
            println!("{path}");
        }
    })
    .unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    if outcome == ExportOutcome::NoOutput {
        eprintln!("No output produced: the root element of '{input}' has no XAML counterpart");
    }
}

/// Handle the inspect command
fn handle_inspect_command(path: &str, transform: &str, config: &AxmlConfig) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let class = Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let options = ConvertOptions::from(config);

    let output = transforms::execute_transform(&source, transform, class, &options)
        .unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the list-mappings command
fn handle_list_mappings_command() {
    println!("Elements (first matching fragment wins):");
    for (fragment, target) in ELEMENT_MAP {
        println!("  {fragment:<16} -> {target}");
    }

    println!("\nAttributes:");
    for (name, transform) in ATTRIBUTE_MAP {
        println!("  {name:<16} -> {transform:?}");
    }

    println!("\nSpacing:");
    for rule in [PADDING, MARGIN] {
        println!("  {:<16} -> {}", rule.shorthand, rule.output);
    }

    println!("\nBindings (MvxBind):");
    for (key, target) in BINDING_MAP {
        println!("  {key:<16} -> {target}");
    }

    println!("\nInspect transforms:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> AxmlConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Command-line flags override the loaded configuration. Switches can only turn a setting on.
fn convert_options(matches: &ArgMatches, config: AxmlConfig) -> ConvertOptions {
    let mut options = ConvertOptions::from(config);
    if let Some(namespace) = matches.get_one::<String>("namespace") {
        options.namespace = namespace.clone();
    }
    if let Some(extension) = matches.get_one::<String>("image-extension") {
        options.image_extension = extension.trim_start_matches('.').to_string();
    }
    options.overwrite |= matches.get_flag("overwrite");
    options.data_context |= matches.get_flag("data-context");
    options
}
