//! Bake command implementation
//!
//! Reads `sheet.json`, `script.json` and the optional `glsl/` directory from
//! the input directory, then writes `game.json`, `game.js` and `glsl.js` to the
//! output directory. All inputs are decoded and all artifacts rendered before
//! the first write.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use rapidframe_content::{
    Artifact, BakeError, FrameEntry, FrameKind, FrameLayout, JsStyle, SheetSummary,
    WrittenArtifact, GAME_JSON_FILE, GAME_JS_FILE, SHADER_JS_FILE,
};
use serde::{Deserialize, Serialize};

use super::json_output::{BakeReport, JsonError};
use crate::input::{load_script, load_shaders, load_sheet};

/// Options collected from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BakeOptions {
    /// Layout of the JSON embedded in `game.js`.
    pub js_style: JsStyle,
    /// Whether to bake `glsl/*.c` into `glsl.js`.
    pub shaders: bool,
    /// Suppress per-entry classification lines.
    pub quiet: bool,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            js_style: JsStyle::Compact,
            shaders: true,
            quiet: false,
        }
    }
}

/// Everything a bake will write, rendered in memory.
#[derive(Debug, Clone)]
pub struct BakePlan {
    /// Layout of the sheet's `frames` field.
    pub layout: FrameLayout,
    /// Classified sheet entries, in sorted name order.
    pub entries: Vec<FrameEntry>,
    /// Artifacts in write order.
    pub artifacts: Vec<Artifact>,
    /// Input file path to BLAKE3 hash of its raw content.
    pub sources: BTreeMap<String, String>,
    /// Names of inlined shaders.
    pub shaders: Vec<String>,
}

/// Result of a completed bake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakeOutcome {
    pub input_dir: String,
    pub output_dir: String,
    pub layout: FrameLayout,
    pub summary: SheetSummary,
    pub artifacts: Vec<WrittenArtifact>,
    pub sources: BTreeMap<String, String>,
    pub shaders: Vec<String>,
}

/// Decodes and validates every input and renders every artifact.
///
/// No filesystem writes happen here.
pub fn plan(input_dir: &Path, options: &BakeOptions) -> Result<BakePlan, BakeError> {
    let mut sources = BTreeMap::new();

    let (sheet, sheet_src) = load_sheet(input_dir)?;
    let entries = sheet.classify()?;
    sources.insert(sheet_src.path.display().to_string(), sheet_src.source_hash);

    let (script, script_src) = load_script(input_dir)?;
    sources.insert(script_src.path.display().to_string(), script_src.source_hash);

    let mut artifacts = vec![
        Artifact::new(GAME_JSON_FILE, script.to_json()?),
        Artifact::new(GAME_JS_FILE, script.to_js(options.js_style)?),
    ];

    let mut shaders = Vec::new();
    if options.shaders {
        if let Some(store) = load_shaders(input_dir)? {
            shaders = store.names().map(str::to_string).collect();
            artifacts.push(Artifact::new(SHADER_JS_FILE, store.to_js()?));
        }
    }

    Ok(BakePlan {
        layout: sheet.layout(),
        entries,
        artifacts,
        sources,
        shaders,
    })
}

/// Writes a plan's artifacts, creating the output directory if needed.
///
/// `on_write` is called after each file is written.
pub fn write_plan(
    plan: BakePlan,
    input_dir: &Path,
    output_dir: &Path,
    mut on_write: impl FnMut(&WrittenArtifact),
) -> Result<BakeOutcome, BakeError> {
    fs::create_dir_all(output_dir).map_err(|source| BakeError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(plan.artifacts.len());
    for artifact in &plan.artifacts {
        let path = output_dir.join(&artifact.file_name);
        fs::write(&path, &artifact.contents).map_err(|source| BakeError::Write {
            path: path.clone(),
            source,
        })?;

        let record = WrittenArtifact {
            path: path.display().to_string(),
            size: artifact.contents.len(),
            hash: artifact.hash(),
        };
        on_write(&record);
        written.push(record);
    }

    Ok(BakeOutcome {
        input_dir: input_dir.display().to_string(),
        output_dir: output_dir.display().to_string(),
        layout: plan.layout,
        summary: SheetSummary::from_entries(&plan.entries),
        artifacts: written,
        sources: plan.sources,
        shaders: plan.shaders,
    })
}

/// Bakes `input_dir` into `output_dir` without printing anything.
pub fn bake(
    input_dir: &Path,
    output_dir: &Path,
    options: &BakeOptions,
) -> Result<BakeOutcome, BakeError> {
    let plan = plan(input_dir, options)?;
    write_plan(plan, input_dir, output_dir, |_| {})
}

/// Run the bake command
///
/// # Arguments
/// * `input_dir` - Directory holding `sheet.json` and `script.json`
/// * `output_dir` - Directory to write artifacts into
/// * `options` - Bake options
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(
    input_dir: &str,
    output_dir: &str,
    options: &BakeOptions,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(input_dir, output_dir, options)
    } else {
        run_human(input_dir, output_dir, options)
    }
}

/// Run bake with human-readable (colored) output
fn run_human(input_dir: &str, output_dir: &str, options: &BakeOptions) -> Result<ExitCode> {
    println!(
        "{} {} to {}",
        "Compiling content from".cyan().bold(),
        input_dir,
        output_dir
    );

    let input = Path::new(input_dir);
    let plan = plan(input, options)
        .with_context(|| format!("Failed to bake content from {}", input_dir))?;

    if !options.quiet {
        print_entries(&plan.entries);
        if !plan.shaders.is_empty() {
            println!(
                "  {} {}",
                "Shaders".blue(),
                plan.shaders.join(", ").dimmed()
            );
        }
    }

    let outcome = write_plan(plan, input, Path::new(output_dir), |written| {
        println!(
            "  {}",
            format!("Writing {} b to {}.", written.size, written.path).cyan()
        );
    })?;

    println!(
        "{} Done. {}",
        "SUCCESS".green().bold(),
        format!(
            "({} texture(s), {} animation(s), {} file(s))",
            outcome.summary.textures.len(),
            outcome.summary.animations.len(),
            outcome.artifacts.len()
        )
        .dimmed()
    );

    Ok(ExitCode::SUCCESS)
}

/// Run bake with machine-readable JSON output
fn run_json(input_dir: &str, output_dir: &str, options: &BakeOptions) -> Result<ExitCode> {
    let (report, code) = match bake(Path::new(input_dir), Path::new(output_dir), options) {
        Ok(outcome) => (BakeReport::success(outcome), ExitCode::SUCCESS),
        Err(e) => (
            BakeReport::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize bake report")?;
    println!("{}", json);

    Ok(code)
}

/// Prints one line per texture and per animation frame group.
fn print_entries(entries: &[FrameEntry]) {
    let summary = SheetSummary::from_entries(entries);
    for name in &summary.textures {
        println!("  {} {}", "Texture".blue(), name);
    }
    for (name, indices) in &summary.animations {
        let frames: Vec<String> = indices.iter().map(u32::to_string).collect();
        println!(
            "  {} {} {}",
            "Animation".magenta(),
            name,
            format!("[{}]", frames.join(", ")).dimmed()
        );
    }
    let frame_count = entries
        .iter()
        .filter(|e| matches!(e.kind, FrameKind::Animation { .. }))
        .count();
    println!(
        "  {}",
        format!("{} sheet entries, {} animation frame(s)", entries.len(), frame_count).dimmed()
    );
}
