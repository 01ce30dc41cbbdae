//! Test fixture utilities for creating content input directories.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use rapidframe_content::{SCRIPT_FILE, SHADER_DIR, SHEET_FILE};
use serde_json::{json, Value};

/// A temp directory laid out like a content source tree.
pub struct ContentFixture {
    pub root: TempDir,
}

impl ContentFixture {
    /// Create a new empty content directory.
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The sample content: two hero frames, one wall texture, a one-key script.
    pub fn sample() -> Self {
        Self::new()
            .with_sheet(&sample_sheet())
            .with_script(&json!({"start": "intro"}))
    }

    /// Get the content directory path.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `sheet.json`.
    pub fn with_sheet(self, sheet: &Value) -> Self {
        self.with_raw(SHEET_FILE, &sheet.to_string())
    }

    /// Write `sheet.json` with the given frame names in the hash layout.
    pub fn with_frames(self, names: &[&str]) -> Self {
        let frames: serde_json::Map<String, Value> = names
            .iter()
            .map(|n| (n.to_string(), json!({"frame": {"x": 0, "y": 0, "w": 16, "h": 16}})))
            .collect();
        self.with_sheet(&json!({ "frames": frames }))
    }

    /// Write `script.json`.
    pub fn with_script(self, script: &Value) -> Self {
        self.with_raw(SCRIPT_FILE, &script.to_string())
    }

    /// Write an arbitrary file relative to the content directory.
    pub fn with_raw(self, name: &str, content: &str) -> Self {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    /// Add `glsl/<name>.c`.
    pub fn with_shader(self, name: &str, source: &str) -> Self {
        let file = format!("{}/{}.c", SHADER_DIR, name);
        self.with_raw(&file, source)
    }

    /// Remove a previously written input file.
    pub fn without(self, name: &str) -> Self {
        let path: PathBuf = self.path().join(name);
        fs::remove_file(&path).expect("Failed to remove fixture file");
        self
    }
}

impl Default for ContentFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// `{"frames": {"hero1.ase": {}, "hero2.ase": {}, "wall.ase": {}}}`
pub fn sample_sheet() -> Value {
    json!({"frames": {"hero1.ase": {}, "hero2.ase": {}, "wall.ase": {}}})
}
