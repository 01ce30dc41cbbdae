//! rapidframe-bake - offline content baker
//!
//! Compiles authoring files (script and sprite-sheet metadata) into the JSON
//! and JS artifacts loaded by the rapidframe runtime.

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;

use rapidframe_cli::commands::bake::{self, BakeOptions};
use rapidframe_cli::commands::json_output::{usage_error, BakeReport};
use rapidframe_content::JsStyle;

/// rapidframe content baker
#[derive(Parser, Debug)]
#[command(name = "rapidframe-bake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing sheet.json, script.json and optional glsl/
    input_dir: String,

    /// Directory to write game.json, game.js and glsl.js into
    output_dir: String,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    json: bool,

    /// Embed indented JSON in game.js instead of a single line
    #[arg(long)]
    pretty_js: bool,

    /// Skip baking glsl/*.c into glsl.js
    #[arg(long)]
    no_shaders: bool,

    /// Do not list classified sheet entries
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn options(&self) -> BakeOptions {
        BakeOptions {
            js_style: if self.pretty_js {
                JsStyle::Indented
            } else {
                JsStyle::Compact
            },
            shaders: !self.no_shaders,
            quiet: self.quiet,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(e),
    };

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    let result = bake::run(&cli.input_dir, &cli.output_dir, &cli.options(), cli.json);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

/// Help and version exit 0; every other argument error exits 1.
fn usage_exit(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            if std::env::args().any(|a| a == "--json") {
                let report = BakeReport::failure(vec![usage_error(
                    err.kind().as_str().unwrap_or("invalid arguments"),
                )]);
                if let Ok(json) = serde_json::to_string_pretty(&report) {
                    println!("{}", json);
                }
            }
            let _ = err.print();
            ExitCode::from(1)
        }
    }
}
