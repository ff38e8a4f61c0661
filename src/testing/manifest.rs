//! Manifest loading
//!
//! A manifest is a flat text file with one `<test file>,<expected output>`
//! record per line. A record whose test file name starts with `#` is a
//! comment. Every line must contain a comma, comments included.

use std::path::{Path, PathBuf};

use crate::common::{Error, Result};

/// A runnable manifest record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Test file name, resolved against the input directory
    pub name: String,
    /// Expected prefix of the second output line; empty means "no report"
    pub expected: String,
    /// 1-based line number in the manifest
    pub line: usize,
}

/// One parsed manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestRecord {
    Entry(ManifestEntry),
    /// Commented-out record, never executed
    Comment { name: String, line: usize },
}

/// A fully parsed manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub records: Vec<ManifestRecord>,
}

impl Manifest {
    /// Read and parse a manifest file
    ///
    /// Parsing is eager: a malformed line anywhere aborts before any test runs.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::ManifestRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::parse(path, &content)
    }

    /// Parse manifest text; `path` is only used for error messages
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let origin = path.display().to_string();
        let records = content
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_line(&origin, idx + 1, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    /// Records that will actually be executed, in manifest order
    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.records.iter().filter_map(|record| match record {
            ManifestRecord::Entry(entry) => Some(entry),
            ManifestRecord::Comment { .. } => None,
        })
    }

    /// Number of commented-out records
    pub fn skipped(&self) -> usize {
        self.records.len() - self.entries().count()
    }
}

fn parse_line(origin: &str, line: usize, text: &str) -> Result<ManifestRecord> {
    let (name, expected) = text
        .split_once(',')
        .ok_or_else(|| Error::manifest_malformed(origin, line, text))?;

    if name.starts_with('#') {
        return Ok(ManifestRecord::Comment {
            name: name.to_string(),
            line,
        });
    }

    Ok(ManifestRecord::Entry(ManifestEntry {
        name: name.to_string(),
        expected: expected.trim().to_string(),
        line,
    }))
}
