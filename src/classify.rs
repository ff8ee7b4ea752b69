/*!
 * Path classification shared by the guide and the copier
 */

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use crate::config::Config;
use crate::types::Classification;

/// True if any segment of `relative_path`, file name included, is in `exclusions`
pub fn is_excluded(relative_path: &Path, exclusions: &BTreeSet<String>) -> bool {
    relative_path.components().any(|component| match component {
        Component::Normal(segment) => exclusions.contains(segment.to_string_lossy().as_ref()),
        _ => false,
    })
}

/// Only the named segments of a path, so `./takeout` and `takeout` compare equal
fn normal_segments(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .collect()
}

/// Decides how paths under the project root are treated
#[derive(Debug, Clone)]
pub struct PathClassifier<'a> {
    config: &'a Config,
    /// Output directory relative to the project root
    output_rel: PathBuf,
}

impl<'a> PathClassifier<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            output_rel: normal_segments(Path::new(&config.output_dir_name)),
        }
    }

    /// Completely excluded: never listed, never copied
    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        // A run never lists or copies its own output, however the path is spelled
        normal_segments(relative_path).starts_with(&self.output_rel)
            || is_excluded(relative_path, &self.config.complete_exclusions)
    }

    /// Listed in the guide but skipped by the copier
    pub fn is_copy_excluded(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| {
                self.config
                    .copy_excluded_extensions
                    .contains(ext.to_string_lossy().as_ref())
            })
            .unwrap_or(false)
    }

    /// Classify a root-relative path
    pub fn classify(&self, relative_path: &Path, is_file: bool) -> Classification {
        if self.is_excluded(relative_path) {
            Classification::Excluded
        } else if is_file && self.is_copy_excluded(relative_path) {
            Classification::ListedOnly
        } else {
            Classification::Included
        }
    }
}
