//! GLSL shader store.
//!
//! Shader sources are inlined into a single JS global, keyed by file stem
//! (`sprite.frag.c` becomes `sprite.frag`).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::BakeError;
use crate::script::{js_assignment, to_json_indented};

/// Global the shader artifact assigns the store to.
pub const SHADER_GLOBAL: &str = "glslStore";

/// Extension of shader source files.
pub const SHADER_EXTENSION: &str = "c";

/// Shader name to source text, ordered by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShaderStore {
    sources: BTreeMap<String, String>,
}

impl ShaderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a shader, replacing any previous source with the same name.
    pub fn insert(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.sources.insert(name.into(), source.into());
    }

    /// Shader names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sources.keys().map(String::as_str)
    }

    /// Renders `glslStore = { ... }`.
    pub fn to_js(&self) -> Result<String, BakeError> {
        Ok(js_assignment(SHADER_GLOBAL, &to_json_indented(self)?))
    }
}
