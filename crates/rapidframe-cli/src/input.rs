//! Input loading for the baker.
//!
//! Every loader reads its file fully into memory and maps any failure to
//! [`BakeError::MalformedInput`]. Nothing here writes to disk.

use std::fs;
use std::path::{Path, PathBuf};

use rapidframe_content::shader::SHADER_EXTENSION;
use rapidframe_content::{
    content_hash, BakeError, ScriptDocument, ShaderStore, SheetDocument, SCRIPT_FILE, SHADER_DIR,
    SHEET_FILE,
};
use serde_json::Value;
use walkdir::WalkDir;

/// A decoded JSON input together with its provenance.
#[derive(Debug)]
pub struct LoadedJson {
    /// Path the document was read from.
    pub path: PathBuf,
    /// Decoded value.
    pub value: Value,
    /// BLAKE3 hash of the raw file content (hex string).
    pub source_hash: String,
}

/// Reads and decodes a JSON file.
pub fn load_json(path: &Path) -> Result<LoadedJson, BakeError> {
    let content = fs::read_to_string(path)
        .map_err(|e| BakeError::malformed(path, format!("failed to read file: {}", e)))?;
    let value: Value = serde_json::from_str(&content)
        .map_err(|e| BakeError::malformed(path, format!("JSON parse error: {}", e)))?;

    Ok(LoadedJson {
        path: path.to_path_buf(),
        value,
        source_hash: content_hash(content.as_bytes()),
    })
}

/// Loads `sheet.json` from the input directory.
pub fn load_sheet(input_dir: &Path) -> Result<(SheetDocument, LoadedJson), BakeError> {
    let loaded = load_json(&input_dir.join(SHEET_FILE))?;
    let sheet = SheetDocument::from_value(&loaded.value, &loaded.path)?;
    Ok((sheet, loaded))
}

/// Loads `script.json` from the input directory.
pub fn load_script(input_dir: &Path) -> Result<(ScriptDocument, LoadedJson), BakeError> {
    let loaded = load_json(&input_dir.join(SCRIPT_FILE))?;
    let script = ScriptDocument::new(loaded.value.clone());
    Ok((script, loaded))
}

/// Collects `glsl/*.c` from the input directory.
///
/// Returns `None` when the input directory has no `glsl` directory.
pub fn load_shaders(input_dir: &Path) -> Result<Option<ShaderStore>, BakeError> {
    let shader_dir = input_dir.join(SHADER_DIR);
    if !shader_dir.is_dir() {
        return Ok(None);
    }

    let mut store = ShaderStore::new();
    for entry in WalkDir::new(&shader_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            BakeError::malformed(&shader_dir, format!("failed to read directory: {}", e))
        })?;
        let path = entry.path();
        if !path.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(SHADER_EXTENSION)
        {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            return Err(BakeError::malformed(path, "shader file name is not valid UTF-8"));
        };
        let source = fs::read_to_string(path)
            .map_err(|e| BakeError::malformed(path, format!("failed to read shader: {}", e)))?;
        store.insert(name, source);
    }

    Ok(Some(store))
}
