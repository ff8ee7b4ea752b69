/*!
 * Core types and data structures for the takeout application
 */

use std::path::{Path, PathBuf};

/// A top-level path the run processes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeEntry {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Rendered in the guide but never copied
    pub guide_only: bool,
}

impl IncludeEntry {
    /// An entry that is both listed and copied
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guide_only: false,
        }
    }

    /// An entry that only appears in the guide (e.g. asset folders)
    pub fn guide_only(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guide_only: true,
        }
    }

    /// The entry as written in the configuration
    pub fn display(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// How a path is treated by the guide and the copier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Neither listed nor copied
    Excluded,
    /// Listed in the guide but never copied
    ListedOnly,
    /// Listed and copied
    Included,
}

/// A file copied into the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    /// Source path relative to the project root
    pub source: PathBuf,
    /// File name inside the output directory
    pub output_name: String,
    /// Number of bytes copied
    pub bytes: u64,
}

/// Result of the copy phase
#[derive(Debug, Clone, Default)]
pub struct CollectSummary {
    /// Files copied, in copy order
    pub copied: Vec<CopiedFile>,
    /// Files listed in the guide but skipped because of their extension
    pub listed_only: Vec<PathBuf>,
    /// Top-level entries skipped (guide-only, missing or excluded)
    pub skipped_entries: usize,
}

impl CollectSummary {
    /// Number of files copied
    pub fn files_copied(&self) -> usize {
        self.copied.len()
    }

    /// Total bytes copied
    pub fn total_bytes(&self) -> u64 {
        self.copied.iter().map(|f| f.bytes).sum()
    }

    /// Look up the copy produced for a source path
    pub fn find(&self, source: &Path) -> Option<&CopiedFile> {
        self.copied.iter().find(|f| f.source == source)
    }
}
