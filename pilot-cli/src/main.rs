// Command-line interface for formatpilot
//
// This binary converts text between Markdown, HTML and LinkedIn-ready plain text.
// The conversion routines live in the pilot-babel crate; this crate only reads input,
// resolves the (from, to) pair, layers configuration and writes the result.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. Reading from stdin ("-") requires --from.
// Usage:
//  formatpilot <input|-> --to <format> [--from <format>] [--output <file>]  - Convert (default)
//  formatpilot convert <input|-> --to <format> [--from <format>] [--output <file>]  - Same as above
//  formatpilot --list-formats [--json]                                    - List formats and pairs
//
// Extra Parameters:
//
// LinkedIn options can be overridden per run using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the values over the loaded config.
// Example:
//  formatpilot post.md --to linkedin --extra-bold-style plain --extra-char-limit 1300

mod cli;

use cli::build_cli;
use pilot_babel::{
    convert_with_options, BoldStyle, Conversion, ConvertOptions, FormatRegistry, SourceFormat,
    TargetFormat,
};
use pilot_config::{FormatPilotConfig, Loader, LOCAL_CONFIG_FILE};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Input path meaning "read from standard input"
const STDIN_PATH: &str = "-";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following "-" is a bullet value here, not stdin
            let has_value = match args.get(i + 1) {
                Some(next) => !next.starts_with("--") && (next == "-" || !next.starts_with('-')),
                None => false,
            };

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && (cleaned_args[1] == STDIN_PATH || !cleaned_args[1].starts_with('-'))
                && cleaned_args[1] != "convert"
                && cleaned_args[1] != "help"
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(matches.get_flag("json"));
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        warn!("ignoring unknown option --extra-{key}");
    }

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => detect_source_format(input),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Pick the source format from the input file extension
fn detect_source_format(input: &str) -> String {
    if input == STDIN_PATH {
        eprintln!("Error: --from is required when reading from stdin");
        std::process::exit(1);
    }

    let registry = FormatRegistry::default();
    match registry.detect_format_from_filename(input) {
        Some(detected) => detected,
        None => {
            eprintln!("Error: Could not detect format from filename '{input}'");
            eprintln!("Please specify --from explicitly");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    config: &FormatPilotConfig,
) {
    let registry = FormatRegistry::default();

    let conversion = registry.resolve(from, to).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });

    let source = read_input(input).unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    });
    debug!(%conversion, input, "converting");

    let options = ConvertOptions::from(config);
    let result = convert_with_options(&source, conversion.source(), conversion.target(), &options)
        .unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => {
            fs::write(path, format!("{result}\n")).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => println!("{result}"),
    }
}

fn read_input(input: &str) -> io::Result<String> {
    if input == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(input)
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(json: bool) {
    if json {
        let listing = serde_json::json!({
            "sources": SourceFormat::ALL,
            "targets": TargetFormat::ALL,
            "conversions": Conversion::ALL,
        });
        match serde_json::to_string_pretty(&listing) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let registry = FormatRegistry::default();

    println!("Source formats:");
    for name in registry.source_formats() {
        println!("  {name}");
    }

    println!("\nTarget formats:");
    for name in registry.target_formats() {
        println!("  {name}");
    }

    println!("\nConversions:");
    for conversion in Conversion::ALL {
        println!("  {conversion}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> FormatPilotConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
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

fn apply_config_overrides(
    config: &mut FormatPilotConfig,
    extra_params: &mut HashMap<String, String>,
) {
    let linkedin = &mut config.linkedin;

    if let Some(raw) = take_override(extra_params, &["char-limit", "limit"]) {
        linkedin.char_limit = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid number '{raw}' for --extra-char-limit");
            std::process::exit(1);
        });
    }
    if let Some(raw) = extra_params.remove("bold-style") {
        linkedin.bold_style = parse_bold_style(&raw);
    }
    if let Some(raw) = extra_params.remove("bullet") {
        linkedin.bullet = raw;
    }
    if let Some(raw) = take_override(extra_params, &["flatten-tables", "tables"]) {
        linkedin.flatten_tables = parse_bool_arg("flatten-tables", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["emoji", "emoji-shortcodes"]) {
        linkedin.emoji_shortcodes = parse_bool_arg("emoji", &raw);
    }
    if let Some(raw) = extra_params.remove("word-counts") {
        linkedin.word_counts = parse_bool_arg("word-counts", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bold_style(raw: &str) -> BoldStyle {
    match raw.to_lowercase().as_str() {
        "uppercase" | "upper" => BoldStyle::Uppercase,
        "plain" => BoldStyle::Plain,
        other => {
            eprintln!("Invalid bold style '{other}' for --extra-bold-style (uppercase, plain)");
            std::process::exit(1);
        }
    }
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
