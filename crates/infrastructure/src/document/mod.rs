//! On-disk shape of the data file and the whole-file read/write helpers.

use domain::{DomainError, FieldMap};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Records of one kind, keyed by id.
pub type Collection = BTreeMap<String, FieldMap>;

/// The whole data file: entity kind name to its collection.
pub type Document = BTreeMap<String, Collection>;

/// Creates the file holding an empty mapping if it does not exist yet.
pub fn initialize(path: &Path) -> Result<(), DomainError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, b"{}")?;
    Ok(())
}

/// Reads the whole document. Text that is not JSON, or JSON whose top level
/// is not an object, reads as an empty document. Otherwise every collection
/// and record that has the expected shape is kept and the rest is skipped.
/// I/O failures are returned.
pub fn load(path: &Path) -> Result<Document, DomainError> {
    initialize(path)?;
    let bytes = std::fs::read(path)?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(Value::Object(kinds)) => Ok(from_kinds(path, kinds)),
        Ok(_) => {
            warn!(path = %path.display(), "data file is not a JSON object, reading it as empty");
            Ok(Document::new())
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "data file is not valid JSON, reading it as empty");
            Ok(Document::new())
        }
    }
}

fn from_kinds(path: &Path, kinds: serde_json::Map<String, Value>) -> Document {
    let mut document = Document::new();

    for (kind, records) in kinds {
        let Value::Object(records) = records else {
            warn!(path = %path.display(), kind = %kind, "skipping top-level entry that is not a collection");
            continue;
        };

        let collection: &mut Collection = document.entry(kind.clone()).or_default();
        for (id, fields) in records {
            match fields {
                Value::Object(fields) => {
                    collection.insert(id, fields);
                }
                _ => {
                    warn!(path = %path.display(), kind = %kind, id = %id, "skipping record that is not an object");
                }
            }
        }
    }

    document
}

/// Serializes the document with four-space indentation.
pub fn encode(document: &Document) -> Result<Vec<u8>, DomainError> {
    let mut bytes = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| DomainError::ParsingError(e.to_string()))?;
    Ok(bytes)
}

/// Replaces the file contents with `document`.
pub fn store(path: &Path, document: &Document) -> Result<(), DomainError> {
    let bytes = encode(document)?;
    atomic_write(path, &bytes)
}

/// New contents go to a `.tmp` sibling that is then renamed onto `path`;
/// the data file holds either the old text or the new text, never a prefix.
fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), DomainError> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    std::fs::write(&staging, bytes)?;
    std::fs::rename(&staging, path)?;
    Ok(())
}
