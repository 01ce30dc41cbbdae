//! End-to-End Bake Tests for rapidframe
//!
//! Tests run the `rapidframe-bake` binary and verify:
//! - Output artifacts for valid content
//! - Exit codes and absence of outputs on every failure mode
//! - Machine-readable `--json` output
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p rapidframe-tests --test e2e_bake
//! ```

use std::fs;

use pretty_assertions::assert_eq;
use rapidframe_content::{GAME_JSON_FILE, GAME_JS_FILE, SCRIPT_FILE, SHADER_JS_FILE, SHEET_FILE};
use rapidframe_tests::fixtures::ContentFixture;
use rapidframe_tests::harness::{read_game_js, read_game_json, TestHarness};
use serde_json::json;

// ============================================================================
// Success
// ============================================================================

#[test]
fn test_sample_content_bakes() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample();

    let result = harness.bake(content.path(), &[]);
    result.assert_success();

    assert_eq!(harness.output_files(), [GAME_JS_FILE, GAME_JSON_FILE]);
    assert_eq!(read_game_json(&harness.out_dir()), json!({"start": "intro"}));
    assert_eq!(read_game_js(&harness.out_dir()), json!({"start": "intro"}));

    let game_json = fs::read_to_string(harness.out_dir().join(GAME_JSON_FILE)).unwrap();
    assert_eq!(game_json, "{\n    \"start\": \"intro\"\n}\n");

    assert!(result.stdout.contains("Compiling content from"));
    assert!(result.stdout.contains("Animation hero [1, 2]"));
    assert!(result.stdout.contains("Texture wall"));
    assert!(result.stdout.contains("SUCCESS Done."));
}

#[test]
fn test_quiet_hides_classification() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample();

    let result = harness.bake(content.path(), &["--quiet"]);
    result.assert_success();
    assert!(!result.stdout.contains("Texture wall"));
    assert!(result.stdout.contains("SUCCESS"));
}

#[test]
fn test_array_layout_sheet() {
    let harness = TestHarness::new();
    let content = ContentFixture::new()
        .with_sheet(&json!({"frames": [{"filename": "run1.ase"}, {"filename": "tile.ase"}]}))
        .with_script(&json!([1, "two", null]));

    harness.bake(content.path(), &[]).assert_success();
    assert_eq!(read_game_js(&harness.out_dir()), json!([1, "two", null]));
}

#[test]
fn test_shaders_are_inlined() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample()
        .with_shader("sprite.frag", "void main() { gl_FragColor = vec4(1.0); }\n")
        .with_shader("map.vert", "attribute vec2 pos;\n");

    harness.bake(content.path(), &[]).assert_success();

    let text = fs::read_to_string(harness.out_dir().join(SHADER_JS_FILE)).unwrap();
    let store: serde_json::Value =
        serde_json::from_str(text.strip_prefix("glslStore = ").unwrap()).unwrap();
    assert_eq!(
        store,
        json!({
            "map.vert": "attribute vec2 pos;\n",
            "sprite.frag": "void main() { gl_FragColor = vec4(1.0); }\n"
        })
    );
}

// ============================================================================
// Failure
// ============================================================================

#[test]
fn test_missing_arguments_exit_one() {
    let harness = TestHarness::new();

    let result = harness.run_cli(&[]);
    result.assert_failure();
    assert!(result.stderr.contains("Usage"));

    let result = harness.run_cli(&["only-input"]);
    result.assert_failure();
    assert!(result.stderr.contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    let harness = TestHarness::new();
    let result = harness.run_cli(&["--help"]);
    result.assert_success();
    assert!(result.stdout.contains("INPUT_DIR"));
}

#[test]
fn test_naming_violation_writes_nothing() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample().with_frames(&["hero1.ase", "hero 2.ase"]);

    let result = harness.bake(content.path(), &[]);
    result.assert_failure();
    assert!(result.stderr.contains("hero 2.ase"));
    assert!(harness.output_files().is_empty());
}

#[test]
fn test_missing_sheet_writes_nothing() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample().without(SHEET_FILE);

    let result = harness.bake(content.path(), &[]);
    result.assert_failure();
    assert!(result.stderr.contains(SHEET_FILE));
    assert!(harness.output_files().is_empty());
}

#[test]
fn test_missing_script_writes_nothing() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample().without(SCRIPT_FILE);

    let result = harness.bake(content.path(), &[]);
    result.assert_failure();
    assert!(harness.output_files().is_empty());
}

#[test]
fn test_invalid_script_json_writes_nothing() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample().with_raw(SCRIPT_FILE, "{ \"start\": ");

    let result = harness.bake(content.path(), &[]);
    result.assert_failure();
    assert!(result.stderr.contains("JSON parse error"));
    assert!(harness.output_files().is_empty());
}

// ============================================================================
// JSON output
// ============================================================================

#[test]
fn test_json_output_success() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample();

    let result = harness.bake(content.path(), &["--json"]);
    result.assert_success();

    let report = result.stdout_json();
    assert_eq!(report["success"], true);
    assert_eq!(report["errors"], json!([]));
    assert_eq!(report["result"]["summary"]["animations"]["hero"], json!([1, 2]));
    assert_eq!(report["result"]["summary"]["textures"], json!(["wall"]));
    assert_eq!(report["result"]["layout"], "hash");
    assert_eq!(report["result"]["artifacts"].as_array().unwrap().len(), 2);
}

#[test]
fn test_json_output_naming_violation() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample().with_frames(&["bad.png"]);

    let result = harness.bake(content.path(), &["--json"]);
    result.assert_failure();

    let report = result.stdout_json();
    assert_eq!(report["success"], false);
    assert_eq!(report["errors"][0]["code"], "E002");
    assert_eq!(report["errors"][0]["entry"], "bad.png");
    assert!(harness.output_files().is_empty());
}

#[test]
fn test_json_output_write_failure() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample();
    fs::write(harness.out_dir(), "occupied by a regular file").unwrap();

    let result = harness.bake(content.path(), &["--json"]);
    result.assert_failure();

    let report = result.stdout_json();
    assert_eq!(report["success"], false);
    assert_eq!(report["errors"][0]["code"], "E003");
    assert_eq!(
        report["errors"][0]["file"],
        harness.out_dir().display().to_string()
    );
    assert_eq!(
        fs::read_to_string(harness.out_dir()).unwrap(),
        "occupied by a regular file"
    );
}

#[test]
fn test_write_failure_exit_one() {
    let harness = TestHarness::new();
    let content = ContentFixture::sample();
    fs::write(harness.out_dir(), "occupied by a regular file").unwrap();

    let result = harness.bake(content.path(), &[]);
    result.assert_failure();
    assert!(result.stderr.contains("failed to write"));
}

#[test]
fn test_json_output_usage_error() {
    let harness = TestHarness::new();

    let result = harness.run_cli(&["--json", "only-input"]);
    result.assert_failure();

    let report = result.stdout_json();
    assert_eq!(report["success"], false);
    assert_eq!(report["errors"][0]["code"], "E000");
    assert!(result.stderr.contains("Usage"));
}
