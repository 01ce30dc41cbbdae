//! Baked output artifacts and content hashing.

use serde::{Deserialize, Serialize};

/// Output file for the indented script JSON.
pub const GAME_JSON_FILE: &str = "game.json";
/// Output file for the script JS assignment.
pub const GAME_JS_FILE: &str = "game.js";
/// Output file for the shader store.
pub const SHADER_JS_FILE: &str = "glsl.js";

/// A fully rendered output file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Exact bytes to write, newline terminated.
    pub contents: String,
}

impl Artifact {
    /// Creates an artifact, terminating `text` with a single newline.
    pub fn new(file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut contents = text.into();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }
        Self {
            file_name: file_name.into(),
            contents,
        }
    }

    /// BLAKE3 hash of the contents.
    pub fn hash(&self) -> String {
        content_hash(self.contents.as_bytes())
    }
}

/// Record of an artifact after it was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenArtifact {
    /// Full output path.
    pub path: String,
    /// Bytes written.
    pub size: usize,
    /// BLAKE3 hash of the written bytes (hex).
    pub hash: String,
}

/// Returns the lowercase hex BLAKE3 hash of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}
