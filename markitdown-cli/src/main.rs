// Command-line interface for markitdown
//
// This binary turns pasted HTML (saved to a file, or piped on stdin) into Markdown, renders
// Markdown previews and exports the converted file.
//
// The conversion logic lives in markitdown-core; this crate only reads input, picks formats,
// layers configuration and writes output.
//
// Usage:
//  markitdown <input> [--to <format>] [--output <file>]          - Convert (default command)
//  markitdown convert <input> [--from html] [--to <format>] [-o]  - Same as above (explicit)
//  markitdown preview <input.md>                                 - Render Markdown to HTML
//  markitdown export <input> [--dir <dir>]                        - Save as converted.md
//  markitdown inspect <input>                                    - Print the parsed node tree
//  markitdown --list-formats                                     - List available formats
//
// `-` reads the input from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Known keys update the loaded configuration,
// the rest are handed to the target format.
// Example:
//  markitdown page.html --to html --extra-raw-html

use clap::{Arg, ArgAction, Command, ValueHint};
use markitdown_config::{LogConfig, Loader, MarkitdownConfig};
use markitdown_core::export::{export_path, save_markdown};
use markitdown_core::formats::html::{parse_html, HtmlFormat};
use markitdown_core::preview::parse_bool;
use markitdown_core::{
    payload_to_markdown, render_preview, ClipboardPayload, FormatError, FormatRegistry,
    PreviewOptions,
};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SUBCOMMANDS: &[&str] = &["convert", "preview", "export", "inspect", "help"];

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
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

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

fn input_arg(help: &'static str) -> Arg {
    Arg::new("input")
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("markitdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert pasted HTML to Markdown")
        .long_about(
            "markitdown converts the HTML a browser puts on the clipboard into Markdown.\n\n\
            Commands:\n  \
            - convert: HTML to Markdown, or to an HTML preview of that Markdown (default)\n  \
            - preview: Render a Markdown file to HTML\n  \
            - export:  Write the converted Markdown to converted.md\n  \
            - inspect: Print the parsed node tree as JSON\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass options (raw-html, table, strikethrough,\n  \
            autolink, tasklist, filename). Boolean flags can omit the value.\n\n\
            Examples:\n  \
            markitdown page.html                      # Markdown to stdout\n  \
            markitdown page.html -o notes.md          # Markdown to a file\n  \
            markitdown page.html -o page.preview.html # Preview HTML (detected from -o)\n  \
            pbpaste | markitdown -                    # Read stdin",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a markitdown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert HTML to Markdown (default command)")
                .long_about(
                    "Convert HTML to Markdown.\n\n\
                    Targets:\n  \
                    - markdown: the converted Markdown (.md)\n  \
                    - html:     a preview rendered from the converted Markdown (.html)\n\n\
                    The target is taken from --to, else from the extension of -o,\n\
                    else from [convert] to in the configuration.",
                )
                .arg(input_arg("Input HTML file, or - for stdin"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension, else html)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_hint(ValueHint::Other),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Render Markdown to HTML")
                .arg(input_arg("Input Markdown file, or - for stdin"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Convert HTML and save it as a Markdown file")
                .long_about(
                    "Convert HTML and write the Markdown to <dir>/<filename>.\n\n\
                    The file name comes from [export] filename (converted.md by default)\n\
                    or --extra-filename. The written path is printed on stdout.",
                )
                .arg(input_arg("Input HTML file, or - for stdin"))
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Directory to write into (defaults to the current directory)")
                        .default_value(".")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed node tree as JSON")
                .arg(input_arg("Input HTML file, or - for stdin")),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // If no subcommand is provided, inject "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1 && looks_like_input(&cleaned_args[1]) {
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

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_tracing(&config.log, matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    if let Err(e) = apply_config_overrides(&mut config, &mut extra_params) {
        exit_with(e);
    }

    let result = match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let registry = registry_from_config(&config);
            let from = resolve_source_format(
                &registry,
                input,
                sub_matches.get_one::<String>("from").map(|s| s.as_str()),
            );
            let to = resolve_target_format(
                &registry,
                sub_matches.get_one::<String>("to").map(|s| s.as_str()),
                output,
                &config,
            );
            handle_convert_command(&registry, input, &from, &to, output, &extra_params)
        }
        Some(("preview", sub_matches)) => {
            warn_unused(&extra_params);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_preview_command(input, output, &config)
        }
        Some(("export", sub_matches)) => {
            warn_unused(&extra_params);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let dir = sub_matches
                .get_one::<String>("dir")
                .expect("dir has a default");
            handle_export_command(input, Path::new(dir), &config)
        }
        Some(("inspect", sub_matches)) => {
            warn_unused(&extra_params);
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_inspect_command(input)
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }
}

fn looks_like_input(arg: &str) -> bool {
    arg == "-" || (!arg.starts_with('-') && !SUBCOMMANDS.contains(&arg))
}

fn exit_with(err: FormatError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(log: &LogConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) -> Result<(), FormatError> {
    registry.get(from)?;
    registry.get(to)?;

    let source = read_input(input)?;
    let doc = registry.parse(&source, from)?;
    let text = registry.serialize_with_options(&doc, to, extra_params)?;

    tracing::debug!(input, from, to, "converted");
    write_output(output, &text)
}

/// Handle the preview command
fn handle_preview_command(
    input: &str,
    output: Option<&str>,
    config: &MarkitdownConfig,
) -> Result<(), FormatError> {
    let markdown = read_input(input)?;
    let html = render_preview(&markdown, &PreviewOptions::from(&config.preview));
    write_output(output, &html)
}

/// Handle the export command
fn handle_export_command(
    input: &str,
    dir: &Path,
    config: &MarkitdownConfig,
) -> Result<(), FormatError> {
    let payload = ClipboardPayload::from_html(read_input(input)?);
    let markdown = payload_to_markdown(&payload);

    let path = export_path(dir, Some(&config.export.filename));
    let written = save_markdown(&markdown, &path)?;
    println!("{}", written.display());
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(input: &str) -> Result<(), FormatError> {
    let doc = parse_html(&read_input(input)?);
    let json = serde_json::to_string_pretty(&doc.body)
        .map_err(|e| FormatError::SerializationError(e.to_string()))?;
    println!("{json}");
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &MarkitdownConfig) {
    let registry = registry_from_config(config);

    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "in/out",
            (true, false) => "in",
            (false, true) => "out",
            (false, false) => "-",
        };
        println!(
            "  {name:<10} {direction:<7} .{:<16} {}",
            format.file_extensions().join(", ."),
            format.description()
        );
    }

    println!("\nPreview parameters (--extra-<name>):");
    for param in PreviewOptions::PARAMS {
        println!("  {param}");
    }
    println!("  filename");
}

/// Formats with the HTML preview configured from `config`.
fn registry_from_config(config: &MarkitdownConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::default();
    registry.register(HtmlFormat::new(PreviewOptions::from(&config.preview)));
    registry
}

fn resolve_source_format(registry: &FormatRegistry, input: &str, explicit: Option<&str>) -> String {
    if let Some(from) = explicit {
        return from.to_string();
    }
    registry
        .detect_format_from_filename(input)
        .unwrap_or_else(|| "html".to_string())
}

/// `--to` wins, then the extension of `-o`, then the configured default.
fn resolve_target_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &MarkitdownConfig,
) -> String {
    if let Some(to) = explicit {
        return to.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.to.clone())
}

fn read_input(input: &str) -> Result<String, FormatError> {
    if input == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(|source| FormatError::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        return Ok(source);
    }

    fs::read_to_string(input).map_err(|source| FormatError::Io {
        path: PathBuf::from(input),
        source,
    })
}

fn write_output(output: Option<&str>, text: &str) -> Result<(), FormatError> {
    match output {
        Some(path) => fs::write(path, text.as_bytes()).map_err(|source| FormatError::Io {
            path: PathBuf::from(path),
            source,
        }),
        None => {
            if text.ends_with('\n') {
                print!("{text}");
            } else {
                println!("{text}");
            }
            Ok(())
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MarkitdownConfig {
    let loader = Loader::new().with_optional_file("markitdown.toml");
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

/// Move known `--extra-*` keys into the configuration.
fn apply_config_overrides(
    config: &mut MarkitdownConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<(), FormatError> {
    if let Some(raw) = take_override(extra_params, &["raw-html", "raw_html", "unsafe"]) {
        config.preview.raw_html = parse_bool("raw-html", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["table", "tables"]) {
        config.preview.table = parse_bool("table", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["strikethrough"]) {
        config.preview.strikethrough = parse_bool("strikethrough", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["autolink"]) {
        config.preview.autolink = parse_bool("autolink", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["tasklist"]) {
        config.preview.tasklist = parse_bool("tasklist", &raw)?;
    }
    if let Some(name) = take_override(extra_params, &["filename"]) {
        config.export.filename = name;
    }
    Ok(())
}

fn warn_unused(extra_params: &HashMap<String, String>) {
    for key in extra_params.keys() {
        tracing::warn!(key = %key, "ignoring unknown --extra parameter");
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
