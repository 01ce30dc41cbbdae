//! Script document rendering.
//!
//! The script is opaque JSON. It is emitted twice: as indented JSON for
//! `game.json` and as a global assignment for `game.js`, which a `<script>`
//! tag can load without a JSON parser.

use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::BakeError;

/// Global the JS artifact assigns the script to.
pub const GAME_GLOBAL: &str = "GAME";

/// Indentation used for all pretty-printed artifacts.
const INDENT: &[u8] = b"    ";

/// Serializes a value as JSON indented with four spaces.
pub fn to_json_indented<T: Serialize + ?Sized>(value: &T) -> Result<String, BakeError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    let text = String::from_utf8(buf).map_err(serde_json::Error::custom)?;
    Ok(text)
}

/// Renders `<global> = <json>`.
pub fn js_assignment(global: &str, json: &str) -> String {
    format!("{} = {}", global, json)
}

/// How the JSON embedded in `game.js` is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsStyle {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Same indentation as `game.json`.
    Indented,
}

/// The decoded game script. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDocument {
    value: Value,
}

impl ScriptDocument {
    /// Wraps a decoded JSON value.
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// The underlying value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Canonical on-disk representation (`game.json`).
    pub fn to_json(&self) -> Result<String, BakeError> {
        to_json_indented(&self.value)
    }

    /// JS representation (`game.js`).
    pub fn to_js(&self, style: JsStyle) -> Result<String, BakeError> {
        let json = match style {
            JsStyle::Compact => serde_json::to_string(&self.value)?,
            JsStyle::Indented => self.to_json()?,
        };
        Ok(js_assignment(GAME_GLOBAL, &json))
    }
}

impl From<Value> for ScriptDocument {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
