//! Name→uid mapping persistence.
//!
//! Each provisioning run records the server-assigned uids of the objects it
//! created, keyed by human-readable name or code. The mapping is written as
//! indented JSON and fully overwrites the previous file; later provisioning
//! steps read it to wire created objects together.
//!
//! Parent directories are assumed to exist and are not created here.

use crate::client::Uid;
use crate::{ProvisionError, ProvisionResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// An ordered name→uid mapping produced by one provisioning run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdMapping {
    entries: BTreeMap<String, Uid>,
}

impl IdMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the uid assigned to a named object.
    pub fn insert(&mut self, name: impl Into<String>, uid: Uid) {
        self.entries.insert(name.into(), uid);
    }

    /// Look up the uid for a name.
    pub fn get(&self, name: &str) -> Option<&Uid> {
        self.entries.get(name)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialise to indented JSON and write to `path`, overwriting any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::MappingSerialisation`] if serialisation
    /// fails and [`ProvisionError::MappingWrite`] if the file cannot be
    /// written, including when the parent directory does not exist.
    pub fn save(&self, path: &Path) -> ProvisionResult<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(ProvisionError::MappingSerialisation)?;
        std::fs::write(path, json).map_err(ProvisionError::MappingWrite)?;
        tracing::info!(path = %path.display(), entries = self.len(), "saved id mapping");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn saves_indented_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("map.json");

        let mut mapping = IdMapping::new();
        mapping.insert("Nairobi County", "abcDEF12345".to_string());
        mapping.save(&path).expect("save mapping");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"Nairobi County\": \"abcDEF12345\""));

        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["Nairobi County"], "abcDEF12345");
    }

    #[test]
    fn save_overwrites_rather_than_merges() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("map.json");

        let mut first = IdMapping::new();
        first.insert("Old Entry", "old00000000".to_string());
        first.save(&path).expect("first save");

        let mut second = IdMapping::new();
        second.insert("New Entry", "new00000000".to_string());
        second.save(&path).expect("second save");

        let written = fs::read_to_string(&path).unwrap();
        let parsed: IdMapping = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.get("New Entry").map(String::as_str), Some("new00000000"));
        assert!(parsed.get("Old Entry").is_none());
    }

    #[test]
    fn save_fails_when_parent_directory_is_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("map.json");

        let mapping = IdMapping::new();
        let err = mapping.save(&path).expect_err("missing parent dir");
        assert!(matches!(err, ProvisionError::MappingWrite(_)));
    }

    #[test]
    fn empty_mapping_saves_as_empty_object() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("map.json");

        IdMapping::new().save(&path).expect("save empty mapping");
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), "{}");
    }
}
