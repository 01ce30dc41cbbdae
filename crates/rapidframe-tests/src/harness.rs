//! Test harness utilities for running the baker and inspecting its outputs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

use rapidframe_content::{GAME_GLOBAL, GAME_JSON_FILE, GAME_JS_FILE};

/// Result of running the rapidframe-bake CLI.
#[derive(Debug)]
pub struct CliResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Create a CliResult from a Command Output.
    pub fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Assert that the command succeeded.
    pub fn assert_success(&self) {
        assert!(
            self.success,
            "Command failed with exit code {}.\nstdout: {}\nstderr: {}",
            self.exit_code, self.stdout, self.stderr
        );
    }

    /// Assert that the command failed with exit code 1.
    pub fn assert_failure(&self) {
        assert!(
            !self.success,
            "Expected command to fail, but it succeeded.\nstdout: {}",
            self.stdout
        );
        assert_eq!(
            self.exit_code, 1,
            "Expected exit code 1.\nstdout: {}\nstderr: {}",
            self.stdout, self.stderr
        );
    }

    /// Parses stdout as a single JSON document.
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// A test harness for running rapidframe-bake commands.
pub struct TestHarness {
    /// Working directory for test outputs.
    pub work_dir: TempDir,
}

impl TestHarness {
    /// Create a new test harness.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
        }
    }

    /// Get the working directory path.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }

    /// Default output directory inside the work dir.
    pub fn out_dir(&self) -> PathBuf {
        self.path().join("out")
    }

    /// Run the CLI with the given arguments.
    ///
    /// Uses `RAPIDFRAME_BIN` when set, otherwise `cargo run` on the workspace.
    pub fn run_cli(&self, args: &[&str]) -> CliResult {
        let mut command = match std::env::var("RAPIDFRAME_BIN") {
            Ok(bin) => Command::new(bin),
            Err(_) => {
                let mut cmd = Command::new(env!("CARGO"));
                cmd.args(["run", "--quiet", "--manifest-path"])
                    .arg(workspace_manifest_path())
                    .args(["-p", "rapidframe-cli", "--bin", "rapidframe-bake", "--"]);
                cmd
            }
        };

        let output = command
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .output();

        match output {
            Ok(out) => CliResult::from_output(out),
            Err(e) => CliResult {
                success: false,
                exit_code: -1,
                stdout: String::new(),
                stderr: format!("Failed to run CLI: {}", e),
            },
        }
    }

    /// Bake `input` into the default output directory.
    pub fn bake(&self, input: &Path, extra: &[&str]) -> CliResult {
        let out = self.out_dir();
        let mut args = vec![
            input.to_str().expect("non UTF-8 input path"),
            out.to_str().expect("non UTF-8 output path"),
        ];
        args.extend_from_slice(extra);
        self.run_cli(&args)
    }

    /// Names of the files in the default output directory (empty if absent).
    pub fn output_files(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(self.out_dir()) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn workspace_manifest_path() -> PathBuf {
    static PATH: OnceLock<PathBuf> = OnceLock::new();
    PATH.get_or_init(|| {
        let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let manifest_path = manifest_dir.join("..").join("..").join("Cargo.toml");
        manifest_path.canonicalize().unwrap_or(manifest_path)
    })
    .clone()
}

/// Reads and decodes `game.json` from an output directory.
pub fn read_game_json(out_dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(out_dir.join(GAME_JSON_FILE)).expect("Failed to read game.json");
    serde_json::from_str(&text).expect("game.json is not valid JSON")
}

/// Reads `game.js`, strips the `GAME = ` prefix, and decodes the rest.
pub fn read_game_js(out_dir: &Path) -> serde_json::Value {
    let text = fs::read_to_string(out_dir.join(GAME_JS_FILE)).expect("Failed to read game.js");
    let prefix = format!("{} = ", GAME_GLOBAL);
    let json = text
        .strip_prefix(&prefix)
        .unwrap_or_else(|| panic!("game.js does not start with {:?}: {}", prefix, text));
    serde_json::from_str(json).expect("game.js payload is not valid JSON")
}
