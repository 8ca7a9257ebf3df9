//! Role-prefixed sequence artifact files.
//!
//! Each pipeline stage persists its output as a single-line text file in the
//! data directory, so every later stage can also be run standalone. The file
//! names follow the original lab convention and are not part of the core
//! library contract.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use islet_seq::ProteinSequence;

/// Cleaned 110-residue precursor.
pub const PREPRO_CLEAN: &str = "preproinsulin_seq_clean.txt";
/// Signal (leader) peptide segment.
pub const SIGNAL_CLEAN: &str = "lsinsulin_seq_clean.txt";
/// B-chain segment.
pub const B_CHAIN_CLEAN: &str = "binsulin_seq_clean.txt";
/// C-peptide segment.
pub const C_PEPTIDE_CLEAN: &str = "cinsulin_seq_clean.txt";
/// A-chain segment.
pub const A_CHAIN_CLEAN: &str = "ainsulin_seq_clean.txt";

/// Every file the pipeline generates, in creation order.
pub const GENERATED: [&str; 5] = [
    PREPRO_CLEAN,
    SIGNAL_CLEAN,
    B_CHAIN_CLEAN,
    C_PEPTIDE_CLEAN,
    A_CHAIN_CLEAN,
];

/// The directory holding sequence artifacts.
///
/// Resolution order is handled by the CLI: `--data-dir` flag, then the
/// `ISLET_DATA_DIR` environment variable, then the `data` default.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute or relative path of a named artifact.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Read an artifact back as a validated sequence.
    pub fn read_sequence(&self, name: &str) -> Result<ProteinSequence> {
        let path = self.path(name);
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        ProteinSequence::new(text.trim().as_bytes())
            .with_context(|| format!("validating {}", path.display()))
    }

    /// Write a sequence as a single-line artifact, creating the directory
    /// if needed.
    pub fn write_sequence(&self, name: &str, seq: &ProteinSequence) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("creating {}", self.root.display()))?;
        let path = self.path(name);
        fs::write(&path, seq.to_string())
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Delete every generated artifact that exists; returns the removed paths.
    pub fn remove_generated(&self) -> Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for name in GENERATED {
            let path = self.path(name);
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("removing {}", path.display()))?;
                removed.push(path);
            }
        }
        Ok(removed)
    }

    /// Generated artifacts currently present on disk.
    pub fn existing_generated(&self) -> Vec<PathBuf> {
        GENERATED
            .iter()
            .map(|name| self.path(name))
            .filter(|p| p.exists())
            .collect()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let store = DataDir::new(dir.path());
        let seq = ProteinSequence::new(b"GIVEQCCTSICSLYQLENYCN").unwrap();

        store.write_sequence(A_CHAIN_CLEAN, &seq).unwrap();
        let back = store.read_sequence(A_CHAIN_CLEAN).unwrap();
        assert_eq!(back.as_bytes(), seq.as_bytes());
    }

    #[test]
    fn read_trims_trailing_newline() {
        let dir = tempdir().unwrap();
        let store = DataDir::new(dir.path());
        fs::write(store.path(B_CHAIN_CLEAN), "fvnqh\n").unwrap();

        let seq = store.read_sequence(B_CHAIN_CLEAN).unwrap();
        assert_eq!(seq.as_bytes(), b"FVNQH");
    }

    #[test]
    fn read_missing_artifact_fails() {
        let dir = tempdir().unwrap();
        let store = DataDir::new(dir.path());
        assert!(store.read_sequence(PREPRO_CLEAN).is_err());
    }

    #[test]
    fn write_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let store = DataDir::new(dir.path().join("nested"));
        let seq = ProteinSequence::new(b"MALW").unwrap();
        let path = store.write_sequence(PREPRO_CLEAN, &seq).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn remove_generated_only_touches_known_names() {
        let dir = tempdir().unwrap();
        let store = DataDir::new(dir.path());
        let seq = ProteinSequence::new(b"MALW").unwrap();
        store.write_sequence(PREPRO_CLEAN, &seq).unwrap();
        store.write_sequence(SIGNAL_CLEAN, &seq).unwrap();
        fs::write(store.path("unrelated.txt"), "keep me").unwrap();

        let removed = store.remove_generated().unwrap();
        assert_eq!(removed.len(), 2);
        assert!(store.existing_generated().is_empty());
        assert!(store.path("unrelated.txt").exists());
    }
}
