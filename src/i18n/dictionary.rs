//! Typed translation dictionaries.
//!
//! A dictionary is a tree of string leaves, string-list leaves and nested
//! maps, parsed from JSON once and never mutated afterwards. Keys are dotted
//! paths such as `quiz.email.headline`.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A single localized string
    Text(String),
    /// An ordered list of localized strings (bullet lists, feature lists)
    List(Vec<String>),
    /// A nested group of keys
    Map(BTreeMap<String, TranslationNode>),
}

impl TranslationNode {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationNode::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TranslationNode::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationNode::Text(_) => "text",
            TranslationNode::List(_) => "list",
            TranslationNode::Map(_) => "map",
        }
    }
}

/// An immutable translation dictionary for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dictionary {
    root: BTreeMap<String, TranslationNode>,
}

impl Dictionary {
    /// Parse a dictionary from JSON. The document root must be an object.
    pub fn from_json(json: &str) -> Result<Dictionary> {
        let node: TranslationNode =
            serde_json::from_str(json).context("Failed to parse translation dictionary")?;

        match node {
            TranslationNode::Map(root) => Ok(Dictionary { root }),
            other => bail!(
                "Translation dictionary root must be an object, found {}",
                other.kind()
            ),
        }
    }

    /// Read and parse a dictionary file.
    pub fn from_file(path: &Path) -> Result<Dictionary> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        Dictionary::from_json(&json)
            .with_context(|| format!("Invalid dictionary {}", path.display()))
    }

    /// Walk a dotted key path.
    ///
    /// Returns `None` as soon as a segment is missing or an intermediate
    /// node is not a map.
    pub fn lookup(&self, key: &str) -> Option<&TranslationNode> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;

        for segment in segments {
            match current {
                TranslationNode::Map(children) => current = children.get(segment)?,
                _ => return None,
            }
        }

        Some(current)
    }

    /// Every leaf (text or list) with its full dotted path, in key order.
    pub fn leaves(&self) -> Vec<(String, &TranslationNode)> {
        let mut out = Vec::new();
        collect_leaves(&self.root, "", &mut out);
        out
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn collect_leaves<'a>(
    map: &'a BTreeMap<String, TranslationNode>,
    prefix: &str,
    out: &mut Vec<(String, &'a TranslationNode)>,
) {
    for (segment, node) in map {
        let path = if prefix.is_empty() {
            segment.clone()
        } else {
            format!("{}.{}", prefix, segment)
        };

        match node {
            TranslationNode::Map(children) => collect_leaves(children, &path, out),
            leaf => out.push((path, leaf)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionary {
        Dictionary::from_json(
            r#"{
                "hero": { "headline": "Change Your Direction." },
                "quiz": {
                    "email": { "headline": "Almost there!" },
                    "features": ["One", "Two"]
                },
                "empty": []
            }"#,
        )
        .expect("sample dictionary should parse")
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_from_json_rejects_non_object_root() {
        let err = Dictionary::from_json(r#"["a", "b"]"#).unwrap_err();
        assert!(err.to_string().contains("root must be an object"));
    }

    #[test]
    fn test_from_json_rejects_numbers() {
        assert!(Dictionary::from_json(r#"{ "count": 3 }"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_mixed_arrays() {
        assert!(Dictionary::from_json(r#"{ "items": ["a", 1] }"#).is_err());
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(Dictionary::from_json("{ not json").is_err());
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_nested_text() {
        let dict = sample();
        assert_eq!(
            dict.lookup("quiz.email.headline").and_then(|n| n.as_text()),
            Some("Almost there!")
        );
    }

    #[test]
    fn test_lookup_list() {
        let dict = sample();
        let list = dict.lookup("quiz.features").and_then(|n| n.as_list());
        assert_eq!(list, Some(&["One".to_string(), "Two".to_string()][..]));
    }

    #[test]
    fn test_lookup_returns_map_for_partial_path() {
        let dict = sample();
        assert_eq!(dict.lookup("quiz.email").map(|n| n.kind()), Some("map"));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let dict = sample();
        assert!(dict.lookup("quiz.email.subheadline").is_none());
        assert!(dict.lookup("nope").is_none());
        assert!(dict.lookup("").is_none());
    }

    #[test]
    fn test_lookup_through_leaf_fails() {
        let dict = sample();
        assert!(dict.lookup("hero.headline.extra").is_none());
        assert!(dict.lookup("quiz.features.0").is_none());
    }

    // ==================== Leaf Enumeration Tests ====================

    #[test]
    fn test_leaves_lists_full_paths() {
        let dict = sample();
        let paths: Vec<String> = dict.leaves().into_iter().map(|(path, _)| path).collect();
        assert_eq!(
            paths,
            vec!["empty", "hero.headline", "quiz.email.headline", "quiz.features"]
        );
    }

    #[test]
    fn test_from_file_reports_path() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "[]").expect("write");

        let err = Dictionary::from_file(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("broken.json"));
    }
}
