//! Artifact manifest: SHA-256 digests binding the model files on disk.
//!
//! `manifest.json` is produced by the `hash_artifacts` binary next to the
//! exported artifacts. When present, every listed file must match its digest.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::ports::ModelError;

/// File name of the manifest inside the model directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Current manifest format version.
pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactManifest {
    pub version: u32,
    /// Relative file name -> lowercase hex SHA-256
    pub files: BTreeMap<String, String>,
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

impl ArtifactManifest {
    /// Hash the given files inside `dir`.
    ///
    /// # Errors
    /// Returns `ModelError::Unavailable` if a file cannot be read.
    pub fn build(dir: &Path, names: &[&str]) -> Result<Self, ModelError> {
        let mut files = BTreeMap::new();
        for name in names {
            let path = dir.join(name);
            let bytes = fs::read(&path)
                .map_err(|e| ModelError::Unavailable(format!("Failed to read {path:?}: {e}")))?;
            files.insert((*name).to_string(), sha256_hex(&bytes));
        }
        Ok(Self {
            version: MANIFEST_VERSION,
            files,
        })
    }

    /// Read `manifest.json` from `dir`, if it exists.
    ///
    /// # Errors
    /// Returns `ModelError::Corrupt` if the manifest exists but is unreadable.
    pub fn read(dir: &Path) -> Result<Option<Self>, ModelError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read(&path)
            .map_err(|e| ModelError::Corrupt(format!("Failed to read manifest: {e}")))?;
        let manifest: Self = serde_json::from_slice(&content)
            .map_err(|e| ModelError::Corrupt(format!("Invalid manifest.json format: {e}")))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(ModelError::Corrupt(format!(
                "Unsupported manifest version {} (expected {MANIFEST_VERSION})",
                manifest.version
            )));
        }
        Ok(Some(manifest))
    }

    /// Verify that `required` files are listed and every listed file matches.
    ///
    /// # Errors
    /// Returns `ModelError::Corrupt` on a missing entry, an unsafe path or a
    /// digest mismatch.
    pub fn verify(&self, dir: &Path, required: &[&str]) -> Result<(), ModelError> {
        for name in required {
            if !self.files.contains_key(*name) {
                return Err(ModelError::Corrupt(format!(
                    "manifest.json does not cover {name}"
                )));
            }
        }

        for (name, expected) in &self.files {
            if name.contains('/') || name.contains('\\') || name.contains("..") {
                return Err(ModelError::Corrupt(format!(
                    "manifest.json lists unsafe path '{name}'"
                )));
            }
            let bytes = fs::read(dir.join(name))
                .map_err(|e| ModelError::Unavailable(format!("Failed to read {name}: {e}")))?;
            let actual = sha256_hex(&bytes);
            if !actual.eq_ignore_ascii_case(expected) {
                tracing::error!("Digest mismatch for {} (manifest {}, file {})", name, expected, actual);
                return Err(ModelError::Corrupt(format!(
                    "{name} does not match its manifest digest"
                )));
            }
        }

        Ok(())
    }

    /// Write this manifest to `dir/manifest.json`.
    ///
    /// # Errors
    /// Returns `ModelError::Unavailable` if the file cannot be written.
    pub fn write(&self, dir: &Path) -> Result<(), ModelError> {
        let bytes = serde_json::to_vec_pretty(self)
            .map_err(|e| ModelError::Corrupt(format!("Failed to serialize manifest: {e}")))?;
        let path = dir.join(MANIFEST_FILE);
        fs::write(&path, bytes)
            .map_err(|e| ModelError::Unavailable(format!("Failed to write {path:?}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sha256_hex_known_value() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_build_write_read_verify() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("model.json"), b"{}").expect("write");

        let manifest = ArtifactManifest::build(dir.path(), &["model.json"]).expect("build");
        manifest.write(dir.path()).expect("write manifest");

        let loaded = ArtifactManifest::read(dir.path())
            .expect("read")
            .expect("present");
        assert_eq!(loaded, manifest);
        loaded.verify(dir.path(), &["model.json"]).expect("verify");
    }

    #[test]
    fn test_tampered_file_rejected() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("model.json"), b"{}").expect("write");
        let manifest = ArtifactManifest::build(dir.path(), &["model.json"]).expect("build");

        fs::write(dir.path().join("model.json"), b"{ }").expect("tamper");
        let err = manifest
            .verify(dir.path(), &["model.json"])
            .expect_err("Should detect tampering");
        assert!(matches!(err, ModelError::Corrupt(_)));
    }

    #[test]
    fn test_required_entry_missing() {
        let dir = tempdir().expect("tempdir");
        fs::write(dir.path().join("model.json"), b"{}").expect("write");
        let manifest = ArtifactManifest::build(dir.path(), &["model.json"]).expect("build");

        let err = manifest
            .verify(dir.path(), &["model.json", "scaler.json"])
            .expect_err("Should require scaler.json");
        assert!(err.to_string().contains("scaler.json"));
    }

    #[test]
    fn test_absent_manifest() {
        let dir = tempdir().expect("tempdir");
        assert!(ArtifactManifest::read(dir.path()).expect("read").is_none());
    }
}
