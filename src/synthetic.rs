//! Synthetic locale synchronizer.
//!
//! The synthetic locale (Klingon) cannot be machine-translated, so its
//! document is curated by hand. This module diffs the curated document
//! against the source and reports every leaf that still needs a translation.

use std::path::Path;
use tracing::{info, warn};

use crate::config::Config;
use crate::document::{load_document, write_document};
use crate::error::Result;
use crate::tree::{KeyPath, ResourceTree};

/// Phrases the curated document starts with when it does not exist yet
const SEED_PHRASES: &[(&str, &str)] = &[
    ("header.title", "QaQ"),
    ("header.subtitle", "ta'"),
    ("header.operative", "SuvwI'"),
    ("header.logout", "megh"),
    ("auth.new_identity", "chu' pong"),
    ("auth.jack_in", "yIghoH"),
    ("tasks.active_directives", "yIn ta'mey"),
    ("tasks.new_directive", "chu' ta'"),
    ("common.loading", "yIloStaH..."),
    ("common.save", "choD"),
    ("common.cancel", "qIl"),
    ("common.delete", "Qaw'"),
];

/// Source leaves missing from the curated document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingReport {
    entries: Vec<(KeyPath, String)>,
}

impl MissingReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyPath, &str)> {
        self.entries.iter().map(|(path, value)| (path, value.as_str()))
    }

    /// Source value of a missing entry
    pub fn get(&self, path: &KeyPath) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, value)| value.as_str())
    }

    /// Nested document of the missing entries, ready to translate and merge.
    pub fn to_tree(&self) -> ResourceTree {
        let mut root = ResourceTree::empty_node();
        for (path, value) in &self.entries {
            insert_at(&mut root, path, value);
        }
        root
    }

    fn record(&mut self, path: KeyPath, value: &str) {
        self.entries.push((path, value.to_string()));
    }
}

/// Compare `curated` against `source` and collect every missing or empty leaf.
///
/// Interior nodes absent from `curated` (or shadowed by a leaf) are replaced
/// with empty nodes so the walk can descend. Non-empty curated leaves are
/// never touched.
pub fn synchronize(source: &ResourceTree, curated: &mut ResourceTree) -> MissingReport {
    let mut report = MissingReport::default();
    walk(source, curated, &KeyPath::root(), &mut report);
    report
}

fn walk(source: &ResourceTree, curated: &mut ResourceTree, path: &KeyPath, report: &mut MissingReport) {
    for (key, source_child) in source.children() {
        let child_path = path.child(key);
        match source_child {
            ResourceTree::Node(_) => {
                if !curated.get(key).is_some_and(ResourceTree::is_node) {
                    curated.insert(key.clone(), ResourceTree::empty_node());
                }
                if let Some(curated_child) = curated.get_mut(key) {
                    walk(source_child, curated_child, &child_path, report);
                }
            }
            ResourceTree::Leaf(value) => {
                let translated = curated
                    .get(key)
                    .and_then(ResourceTree::as_leaf)
                    .is_some_and(|v| !v.trim().is_empty());
                if !translated {
                    report.record(child_path, value);
                }
            }
        }
    }
}

/// Place `value` at `path`, creating interior nodes on the way.
///
/// Returns false if an existing leaf blocks the path.
fn insert_at(root: &mut ResourceTree, path: &KeyPath, value: &str) -> bool {
    let Some((last, parents)) = path.keys().split_last() else {
        return false;
    };

    let mut node = root;
    for key in parents {
        if node.get(key).is_none() {
            node.insert(key.clone(), ResourceTree::empty_node());
        }
        match node.get_mut(key) {
            Some(child) if child.is_node() => node = child,
            _ => return false,
        }
    }

    node.insert(last.clone(), ResourceTree::Leaf(value.to_string()));
    true
}

/// Curated document built from the seed phrases that exist in `source`.
pub fn seed_document(source: &ResourceTree) -> ResourceTree {
    let mut curated = ResourceTree::empty_node();
    for (dotted, phrase) in SEED_PHRASES {
        let path = KeyPath::from(*dotted);
        if source.at(&path).and_then(ResourceTree::as_leaf).is_some() {
            insert_at(&mut curated, &path, phrase);
        }
    }
    curated
}

/// Load the curated document, seeding and writing it on first use.
pub fn load_or_seed(path: &Path, source: &ResourceTree) -> Result<ResourceTree> {
    if path.exists() {
        return load_document(path);
    }

    let curated = seed_document(source);
    info!(
        "No curated document at {}, seeding it with {} phrases",
        path.display(),
        curated.leaf_count()
    );
    write_document(path, &curated)?;
    Ok(curated)
}

/// Diff the synthetic locale of `config` against `source` and log the result.
pub fn audit(config: &Config, source: &ResourceTree) -> Result<MissingReport> {
    let path = config.synthetic_path();
    let mut curated = load_or_seed(&path, source)?;
    let report = synchronize(source, &mut curated);

    if report.is_empty() {
        info!("Synthetic locale is complete ({} strings)", source.leaf_count());
    } else {
        warn!(
            "Synthetic locale is missing {} of {} strings",
            report.len(),
            source.leaf_count()
        );
        for (path, value) in report.iter() {
            info!("  missing {} = {:?}", path, value);
        }
    }

    Ok(report)
}
