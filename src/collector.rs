/*!
 * Copying included files into the flat output directory
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::classify::PathClassifier;
use crate::config::Config;
use crate::console::Console;
use crate::error::{Result, ResultExt, TakeoutError};
use crate::types::{Classification, CollectSummary, CopiedFile, IncludeEntry};

/// Flattened output name for a file nested under the project root.
///
/// Every parent segment is joined with `separator`, followed by the file
/// stem, so `windows/runner/main.cpp` becomes `windows_runner_main.txt`.
pub fn flatten_name(relative_path: &Path, separator: &str, extension: &str) -> String {
    let mut parts: Vec<String> = relative_path
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(segment) => Some(segment.to_string_lossy().to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();
    parts.push(stem_of(relative_path));

    format!("{}.{}", parts.join(separator), extension)
}

/// Output name for a top-level file entry: its stem with the output extension
pub fn renamed_file_name(path: &Path, extension: &str) -> String {
    format!("{}.{}", stem_of(path), extension)
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Copies every eligible file of the configured entries into the output directory
pub struct Collector<'a> {
    config: &'a Config,
    classifier: &'a PathClassifier<'a>,
    console: &'a Console,
    output_dir: PathBuf,
    /// Output names claimed so far, mapped to the source that claimed them
    used_names: HashMap<String, PathBuf>,
    summary: CollectSummary,
}

impl<'a> Collector<'a> {
    pub fn new(config: &'a Config, classifier: &'a PathClassifier<'a>, console: &'a Console) -> Self {
        let mut used_names = HashMap::new();
        // The guide lives alongside the copies
        used_names.insert(
            config.guide_file_name.clone(),
            PathBuf::from(&config.output_dir_name).join(&config.guide_file_name),
        );

        Self {
            config,
            classifier,
            console,
            output_dir: config.output_dir(),
            used_names,
            summary: CollectSummary::default(),
        }
    }

    /// Copy all entries and return what was done
    pub fn collect(mut self) -> Result<CollectSummary> {
        self.console.info("Copying project files...");

        let config = self.config;
        for entry in &config.entries {
            self.collect_entry(entry)?;
        }

        self.console.info(format!(
            "\nSuccessfully copied {} files to '{}'.",
            self.summary.files_copied(),
            self.config.output_dir_name
        ));
        Ok(self.summary)
    }

    fn collect_entry(&mut self, entry: &IncludeEntry) -> Result<()> {
        let label = entry.display();
        let path = self.config.project_root.join(&entry.path);

        if entry.guide_only {
            self.console
                .info(format!("Skipping file copy for '{}' as per configuration.", label));
            self.summary.skipped_entries += 1;
            return Ok(());
        }

        if !path.exists() {
            self.console
                .warn(format!("Path '{}' not found, skipping.", label));
            self.summary.skipped_entries += 1;
            return Ok(());
        }

        if self.classifier.is_excluded(&entry.path) {
            self.console
                .info(format!("Skipping blacklisted path: {}", label));
            self.summary.skipped_entries += 1;
            return Ok(());
        }

        if path.is_file() {
            let name = renamed_file_name(&entry.path, &self.config.output_extension);
            self.copy_file(&path, &entry.path, name)
        } else if path.is_dir() {
            self.collect_directory(&path)
        } else {
            self.console
                .warn(format!("Path '{}' is neither a file nor a directory, skipping.", label));
            self.summary.skipped_entries += 1;
            Ok(())
        }
    }

    fn collect_directory(&mut self, dir: &Path) -> Result<()> {
        let root = self.config.project_root.clone();
        let classifier = self.classifier;

        let walker = WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !classifier.is_excluded(relative_to(&root, e.path())));

        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_dir() {
                continue;
            }

            let relative = relative_to(&root, entry.path()).to_path_buf();
            if !entry.path().is_file() {
                self.console.warn(format!(
                    "'{}' is not a regular file, skipping.",
                    relative.display()
                ));
                continue;
            }

            match self.classifier.classify(&relative, true) {
                Classification::Excluded => continue,
                Classification::ListedOnly => {
                    self.console
                        .info(format!("  - Skipping blacklisted file: {}", relative.display()));
                    self.summary.listed_only.push(relative);
                }
                Classification::Included => {
                    let name = flatten_name(
                        &relative,
                        &self.config.separator,
                        &self.config.output_extension,
                    );
                    self.copy_file(entry.path(), &relative, name)?;
                }
            }
        }

        Ok(())
    }

    fn copy_file(&mut self, source: &Path, relative: &Path, output_name: String) -> Result<()> {
        if let Some(first) = self.used_names.get(&output_name) {
            return Err(TakeoutError::NameCollision {
                name: output_name,
                first: first.clone(),
                second: relative.to_path_buf(),
            });
        }

        let destination = self.output_dir.join(&output_name);
        let bytes = fs::copy(source, &destination).with_context(|| {
            format!(
                "Failed to copy {} to {}",
                relative.display(),
                destination.display()
            )
        })?;

        self.console.tick(&output_name);
        self.console.info(format!(
            "  - Copied and converted: {} -> {}",
            relative.display(),
            output_name
        ));

        self.used_names
            .insert(output_name.clone(), relative.to_path_buf());
        self.summary.copied.push(CopiedFile {
            source: relative.to_path_buf(),
            output_name,
            bytes,
        });
        Ok(())
    }
}

fn relative_to<'p>(root: &Path, path: &'p Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}
