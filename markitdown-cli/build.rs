use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs
// Build scripts can't access src/ modules, so the shape is duplicated here
fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file, or - for stdin")
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markitdown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert pasted HTML to Markdown")
        .arg_required_else_help(true)
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
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(["html"]),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(["markdown", "html"]),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Render Markdown to HTML")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Convert HTML and save it as a Markdown file")
                .arg(input_arg())
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .value_name("DIR")
                        .help("Directory to write into")
                        .value_hint(ValueHint::DirPath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the parsed node tree as JSON")
                .arg(input_arg()),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "markitdown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "markitdown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "markitdown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
