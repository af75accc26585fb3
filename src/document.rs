//! Reading and writing resource documents on disk.
//!
//! Documents are UTF-8 JSON objects. Output is indented with four spaces,
//! keeps key order, and writes non-ASCII characters as-is.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{LocaleError, Result};
use crate::tree::ResourceTree;

/// Load a resource document, requiring an object at the root.
pub fn load_document(path: &Path) -> Result<ResourceTree> {
    let content = fs::read_to_string(path)
        .map_err(|e| LocaleError::document_load(path, format!("failed to read file: {}", e)))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| LocaleError::document_load(path, format!("invalid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(LocaleError::document_load(
            path,
            "document root must be an object",
        ));
    }

    let tree = ResourceTree::from_value(&value).map_err(|reason| LocaleError::document_load(path, reason))?;
    debug!("Loaded {} ({} strings)", path.display(), tree.leaf_count());
    Ok(tree)
}

/// Render a document the way it is stored on disk.
pub fn render_document(tree: &ResourceTree) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    tree.serialize(&mut serializer)?;
    buffer.push(b'\n');
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write a document, creating its directory and replacing any previous file.
pub fn write_document(path: &Path, tree: &ResourceTree) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            LocaleError::document_write(path, format!("failed to create directory: {}", e))
        })?;
    }

    let rendered =
        render_document(tree).map_err(|e| LocaleError::document_write(path, e.to_string()))?;

    fs::write(path, rendered)
        .map_err(|e| LocaleError::document_write(path, e.to_string()))?;
    debug!("Wrote {}", path.display());
    Ok(())
}
