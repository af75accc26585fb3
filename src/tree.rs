//! Resource tree: the nested key/value document holding one locale's UI strings.
//!
//! A document is either a `Leaf` string or a `Node` of uniquely keyed children
//! kept in insertion order. Every leaf is identified by its [`KeyPath`], and
//! [`flatten`] / [`unflatten`] move between the nested form and the ordered
//! (path, value) list the translation pipeline works on.

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::{LocaleError, Result};

/// Ordered sequence of keys from the document root to one leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Path of a direct child of this path
    pub fn child(&self, key: &str) -> Self {
        let mut keys = self.0.clone();
        keys.push(key.to_string());
        Self(keys)
    }

    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Parses a dot-joined path. Keys containing dots must be built with `child`.
impl From<&str> for KeyPath {
    fn from(dotted: &str) -> Self {
        if dotted.is_empty() {
            return Self::root();
        }
        Self(dotted.split('.').map(str::to_string).collect())
    }
}

impl From<Vec<&str>> for KeyPath {
    fn from(keys: Vec<&str>) -> Self {
        Self(keys.into_iter().map(str::to_string).collect())
    }
}

/// One node of a resource document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceTree {
    Leaf(String),
    Node(Vec<(String, ResourceTree)>),
}

impl ResourceTree {
    /// An interior node with no children
    pub fn empty_node() -> Self {
        Self::Node(Vec::new())
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Self::Node(_))
    }

    /// Leaf value, if this is a leaf
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::Node(_) => None,
        }
    }

    /// Children in stored order; a leaf has none.
    pub fn children(&self) -> &[(String, ResourceTree)] {
        match self {
            Self::Node(children) => children,
            Self::Leaf(_) => &[],
        }
    }

    pub fn get(&self, key: &str) -> Option<&ResourceTree> {
        self.children()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, child)| child)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ResourceTree> {
        match self {
            Self::Node(children) => children
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, child)| child),
            Self::Leaf(_) => None,
        }
    }

    /// Look up a descendant by key path
    pub fn at(&self, path: &KeyPath) -> Option<&ResourceTree> {
        path.keys()
            .iter()
            .try_fold(self, |node, key| node.get(key))
    }

    /// Insert or replace a child, keeping the position of an existing key.
    ///
    /// Returns the replaced child. Inserting into a leaf does nothing and
    /// hands the child back.
    pub fn insert(&mut self, key: impl Into<String>, child: ResourceTree) -> Option<ResourceTree> {
        let key = key.into();
        match self {
            Self::Node(children) => {
                if let Some((_, slot)) = children.iter_mut().find(|(k, _)| *k == key) {
                    Some(std::mem::replace(slot, child))
                } else {
                    children.push((key, child));
                    None
                }
            }
            Self::Leaf(_) => Some(child),
        }
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Node(children) => children.iter().map(|(_, c)| c.leaf_count()).sum(),
        }
    }

    /// Convert a parsed JSON value, rejecting anything but objects and strings.
    pub fn from_value(value: &Value) -> std::result::Result<Self, String> {
        Self::from_value_at(value, &KeyPath::root())
    }

    fn from_value_at(value: &Value, path: &KeyPath) -> std::result::Result<Self, String> {
        match value {
            Value::String(s) => Ok(Self::Leaf(s.clone())),
            Value::Object(map) => {
                let mut children = Vec::with_capacity(map.len());
                for (key, child) in map {
                    children.push((key.clone(), Self::from_value_at(child, &path.child(key))?));
                }
                Ok(Self::Node(children))
            }
            other => {
                let location = if path.is_empty() {
                    "document root".to_string()
                } else {
                    format!("'{}'", path)
                };
                Err(format!(
                    "unsupported {} value at {}; only objects and strings are allowed",
                    json_kind(other),
                    location
                ))
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}

impl Serialize for ResourceTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(s) => serializer.serialize_str(s),
            Self::Node(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ResourceTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}

/// Leaf values and their key paths, index-aligned, in depth-first insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub values: Vec<String>,
    pub paths: Vec<KeyPath>,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// (path, value) pairs in extraction order
    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &String)> {
        self.paths.iter().zip(self.values.iter())
    }
}

/// Collect every leaf of `tree` in depth-first, stored-child order.
pub fn flatten(tree: &ResourceTree) -> Extraction {
    let mut extraction = Extraction::default();
    collect_leaves(tree, &KeyPath::root(), &mut extraction);
    extraction
}

fn collect_leaves(tree: &ResourceTree, path: &KeyPath, out: &mut Extraction) {
    match tree {
        ResourceTree::Leaf(value) => {
            out.values.push(value.clone());
            out.paths.push(path.clone());
        }
        ResourceTree::Node(children) => {
            for (key, child) in children {
                collect_leaves(child, &path.child(key), out);
            }
        }
    }
}

/// Overwrite the leaf at `path` inside `base`.
///
/// Every key but the last must already name an interior node; `base` is
/// expected to be a structural copy of the tree the path was extracted from.
pub fn unflatten(base: &mut ResourceTree, path: &KeyPath, value: impl Into<String>) -> Result<()> {
    let mismatch = || LocaleError::StructuralMismatch { path: path.clone() };

    let (last, parents) = path.keys().split_last().ok_or_else(mismatch)?;

    let mut node = base;
    for key in parents {
        node = node.get_mut(key).ok_or_else(mismatch)?;
    }

    // The final key must land on a leaf slot of an interior node
    if !node.is_node() || node.get(last).is_some_and(ResourceTree::is_node) {
        return Err(mismatch());
    }
    node.insert(last.clone(), ResourceTree::Leaf(value.into()));
    Ok(())
}

/// Deep-copy `source` and write each (path, value) pair into the copy.
///
/// Values are trimmed on the way in.
pub fn rebuild(source: &ResourceTree, paths: &[KeyPath], values: &[String]) -> Result<ResourceTree> {
    let mut document = source.clone();
    for (path, value) in paths.iter().zip(values) {
        unflatten(&mut document, path, value.trim())?;
    }
    Ok(document)
}
