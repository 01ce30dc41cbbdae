//! rapidframe content library
//!
//! Types and pure transformations behind the content baker. Nothing here
//! touches the filesystem; the CLI crate reads inputs and writes artifacts.
//!
//! # Example
//!
//! ```
//! use rapidframe_content::script::{JsStyle, ScriptDocument};
//! use rapidframe_content::sheet::{classify_frame_name, FrameKind};
//!
//! let script = ScriptDocument::new(serde_json::json!({"start": "intro"}));
//! assert_eq!(script.to_js(JsStyle::Compact).unwrap(), r#"GAME = {"start":"intro"}"#);
//!
//! assert_eq!(classify_frame_name("wall.ase").unwrap().kind, FrameKind::Texture);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Bake errors and stable error codes
//! - [`sheet`]: Sprite-sheet decoding and frame-name classification
//! - [`script`]: Script document rendering
//! - [`shader`]: GLSL shader store
//! - [`artifact`]: Output artifacts and hashing

pub mod artifact;
pub mod error;
pub mod script;
pub mod shader;
pub mod sheet;

pub use artifact::{
    content_hash, Artifact, WrittenArtifact, GAME_JSON_FILE, GAME_JS_FILE, SHADER_JS_FILE,
};
pub use error::{BakeError, ErrorCode};
pub use script::{JsStyle, ScriptDocument, GAME_GLOBAL};
pub use shader::{ShaderStore, SHADER_GLOBAL};
pub use sheet::{
    classify_frame_name, FrameEntry, FrameKind, FrameLayout, SheetDocument, SheetSummary,
};

/// Sprite-sheet metadata input file.
pub const SHEET_FILE: &str = "sheet.json";
/// Script input file.
pub const SCRIPT_FILE: &str = "script.json";
/// Optional directory of shader sources.
pub const SHADER_DIR: &str = "glsl";
