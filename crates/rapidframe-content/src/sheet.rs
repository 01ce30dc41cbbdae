//! Sprite-sheet metadata decoding and frame-name classification.
//!
//! Sheet entries are named `<identifier><digits>.ase`. Names without a digit
//! suffix are static textures; names with one are frames of the animation
//! called `<identifier>`, ordered by the suffix.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BakeError;

/// Frame-name pattern. The identifier group is lazy so a trailing run of
/// ASCII digits always lands in the index group.
const FRAME_NAME_PATTERN: &str = r"^(\w*?)([0-9]*)\.ase$";

static FRAME_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn frame_name_regex() -> &'static Regex {
    FRAME_NAME_REGEX.get_or_init(|| Regex::new(FRAME_NAME_PATTERN).expect("invalid regex pattern"))
}

/// Classification of a single sheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FrameKind {
    /// Static texture (no digit suffix).
    Texture,
    /// Frame `index` of an animation sequence.
    Animation { index: u32 },
}

/// A classified sheet entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameEntry {
    /// Identifier group of the entry name.
    pub name: String,
    /// Texture or animation frame.
    #[serde(flatten)]
    pub kind: FrameKind,
}

/// Classifies an entry name such as `hero12.ase` or `wall.ase`.
///
/// # Example
/// ```
/// use rapidframe_content::sheet::{classify_frame_name, FrameKind};
///
/// let entry = classify_frame_name("hero12.ase").unwrap();
/// assert_eq!(entry.name, "hero");
/// assert_eq!(entry.kind, FrameKind::Animation { index: 12 });
/// ```
pub fn classify_frame_name(name: &str) -> Result<FrameEntry, BakeError> {
    let caps = frame_name_regex().captures(name).ok_or_else(|| {
        BakeError::NamingConventionViolation {
            name: name.to_string(),
            reason: "expected `<identifier><optional digits>.ase`".to_string(),
        }
    })?;

    let ident = caps.get(1).map_or("", |m| m.as_str());
    let digits = caps.get(2).map_or("", |m| m.as_str());

    let kind = if digits.is_empty() {
        FrameKind::Texture
    } else {
        let index = digits
            .parse::<u32>()
            .map_err(|_| BakeError::NamingConventionViolation {
                name: name.to_string(),
                reason: format!("frame index {} is out of range", digits),
            })?;
        FrameKind::Animation { index }
    };

    Ok(FrameEntry {
        name: ident.to_string(),
        kind,
    })
}

/// How the `frames` field was laid out in the source document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameLayout {
    /// `frames` is an object keyed by entry name.
    Hash,
    /// `frames` is an array of objects carrying a `filename`.
    Array,
}

/// Decoded sheet metadata: the entry names, nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDocument {
    layout: FrameLayout,
    names: Vec<String>,
}

impl SheetDocument {
    /// Extracts the entry names from a decoded sheet document.
    ///
    /// `source` is only used for error messages.
    pub fn from_value(value: &Value, source: &Path) -> Result<Self, BakeError> {
        let frames = value
            .get("frames")
            .ok_or_else(|| BakeError::malformed(source, "missing top-level `frames` field"))?;

        let (layout, mut names) = match frames {
            Value::Object(map) => (FrameLayout::Hash, map.keys().cloned().collect::<Vec<_>>()),
            Value::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let name = item.get("filename").and_then(Value::as_str).ok_or_else(|| {
                        BakeError::malformed(
                            source,
                            format!("frames[{}] has no string `filename`", i),
                        )
                    })?;
                    names.push(name.to_string());
                }
                (FrameLayout::Array, names)
            }
            _ => {
                return Err(BakeError::malformed(
                    source,
                    "`frames` must be an object or an array",
                ))
            }
        };

        names.sort();
        Ok(Self { layout, names })
    }

    /// Layout of the `frames` field.
    pub fn layout(&self) -> FrameLayout {
        self.layout
    }

    /// Classifies every entry in sorted order, stopping at the first bad name.
    pub fn classify(&self) -> Result<Vec<FrameEntry>, BakeError> {
        self.names.iter().map(|n| classify_frame_name(n)).collect()
    }
}

/// Classification result for a whole sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSummary {
    /// Texture names.
    pub textures: BTreeSet<String>,
    /// Animation name to ascending frame indices.
    pub animations: BTreeMap<String, Vec<u32>>,
}

impl SheetSummary {
    /// Groups classified entries by name.
    pub fn from_entries(entries: &[FrameEntry]) -> Self {
        let mut summary = SheetSummary::default();
        for entry in entries {
            match entry.kind {
                FrameKind::Texture => {
                    summary.textures.insert(entry.name.clone());
                }
                FrameKind::Animation { index } => {
                    summary
                        .animations
                        .entry(entry.name.clone())
                        .or_default()
                        .push(index);
                }
            }
        }
        for indices in summary.animations.values_mut() {
            indices.sort_unstable();
            indices.dedup();
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_classify_texture() {
        let entry = classify_frame_name("wall.ase").unwrap();
        assert_eq!(entry.name, "wall");
        assert_eq!(entry.kind, FrameKind::Texture);
    }

    #[test]
    fn test_classify_animation_splits_trailing_digits() {
        let entry = classify_frame_name("hero2.ase").unwrap();
        assert_eq!(entry.name, "hero");
        assert_eq!(entry.kind, FrameKind::Animation { index: 2 });

        let entry = classify_frame_name("a1b02.ase").unwrap();
        assert_eq!(entry.name, "a1b");
        assert_eq!(entry.kind, FrameKind::Animation { index: 2 });
    }

    #[test]
    fn test_classify_bare_digits_and_empty_names() {
        let entry = classify_frame_name("7.ase").unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.kind, FrameKind::Animation { index: 7 });

        let entry = classify_frame_name(".ase").unwrap();
        assert_eq!(entry.name, "");
        assert_eq!(entry.kind, FrameKind::Texture);
    }

    #[test]
    fn test_classify_rejects_bad_names() {
        for name in ["hero1.png", "hero-1.ase", "hero.ase.ase", "sub/hero.ase", "hero1.ASE", ""] {
            let err = classify_frame_name(name).unwrap_err();
            assert!(
                matches!(err, BakeError::NamingConventionViolation { .. }),
                "expected violation for {:?}",
                name
            );
        }
    }

    #[test]
    fn test_classify_rejects_index_overflow() {
        let err = classify_frame_name("hero99999999999.ase").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_hash_layout() {
        let value = json!({"frames": {"wall.ase": {}, "hero2.ase": {}, "hero1.ase": {}}});
        let doc = SheetDocument::from_value(&value, Path::new("sheet.json")).unwrap();
        assert_eq!(doc.layout(), FrameLayout::Hash);
        assert_eq!(doc.names, ["hero1.ase", "hero2.ase", "wall.ase"]);

        let summary = SheetSummary::from_entries(&doc.classify().unwrap());
        assert_eq!(summary.animations.get("hero"), Some(&vec![1, 2]));
        assert!(summary.textures.contains("wall"));
        assert_eq!(summary.textures.len() + summary.animations.len(), 2);
    }

    #[test]
    fn test_array_layout_matches_hash_layout() {
        let hash = json!({"frames": {"hero1.ase": {}, "hero2.ase": {}, "wall.ase": {}}});
        let array = json!({"frames": [
            {"filename": "wall.ase", "frame": {"x": 0}},
            {"filename": "hero2.ase"},
            {"filename": "hero1.ase"}
        ]});

        let a = SheetDocument::from_value(&hash, Path::new("sheet.json")).unwrap();
        let b = SheetDocument::from_value(&array, Path::new("sheet.json")).unwrap();
        assert_eq!(b.layout(), FrameLayout::Array);
        assert_eq!(
            SheetSummary::from_entries(&a.classify().unwrap()),
            SheetSummary::from_entries(&b.classify().unwrap())
        );
    }

    #[test]
    fn test_malformed_frames() {
        let path = Path::new("sheet.json");
        for value in [
            json!({}),
            json!({"frames": 3}),
            json!({"frames": [{"name": "hero1.ase"}]}),
            json!([1, 2]),
        ] {
            let err = SheetDocument::from_value(&value, path).unwrap_err();
            assert!(matches!(err, BakeError::MalformedInput { .. }));
        }
    }

    #[test]
    fn test_classify_stops_at_first_violation() {
        let value = json!({"frames": {"a.ase": {}, "b.png": {}, "c.ase": {}}});
        let doc = SheetDocument::from_value(&value, Path::new("sheet.json")).unwrap();
        match doc.classify().unwrap_err() {
            BakeError::NamingConventionViolation { name, .. } => assert_eq!(name, "b.png"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_summary_dedups_indices() {
        let entries = vec![
            classify_frame_name("run3.ase").unwrap(),
            classify_frame_name("run1.ase").unwrap(),
            classify_frame_name("run01.ase").unwrap(),
        ];
        let summary = SheetSummary::from_entries(&entries);
        assert_eq!(summary.animations["run"], vec![1, 3]);
    }

    #[test]
    fn test_frame_entry_serialization() {
        let entry = classify_frame_name("hero4.ase").unwrap();
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"name": "hero", "kind": "animation", "index": 4}));
    }
}
