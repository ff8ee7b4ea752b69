/*!
 * Utility functions for takeout
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::classify::PathClassifier;
use crate::config::Config;
use crate::error::Result;

/// Count the files a run will copy, for progress tracking
pub fn count_files(config: &Config, classifier: &PathClassifier<'_>) -> Result<u64> {
    let root = &config.project_root;
    let mut count = 0;

    for entry in config.entries.iter().filter(|e| !e.guide_only) {
        if classifier.is_excluded(&entry.path) {
            continue;
        }

        let path = root.join(&entry.path);
        if path.is_file() {
            count += 1;
            continue;
        }
        if !path.is_dir() {
            continue;
        }

        let walker = WalkDir::new(&path)
            .into_iter()
            .filter_entry(|e| !classifier.is_excluded(relative_to(root, e.path())));
        for item in walker {
            let item = item?;
            if item.file_type().is_dir() || !item.path().is_file() {
                continue;
            }
            if !classifier.is_copy_excluded(item.path()) {
                count += 1;
            }
        }
    }

    Ok(count)
}

fn relative_to<'p>(root: &Path, path: &'p Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IncludeEntry;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn formats_sizes() {
        assert_eq!(format_file_size(512), "512 bytes");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.00 MB");
    }

    #[test]
    fn counts_only_copied_files() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("lib/gen")).unwrap();
        fs::create_dir_all(root.join("assets")).unwrap();
        fs::write(root.join("lib/main.dart"), "").unwrap();
        fs::write(root.join("lib/native.h"), "").unwrap();
        fs::write(root.join("lib/gen/out.dart"), "").unwrap();
        fs::write(root.join("assets/logo.png"), "").unwrap();
        fs::write(root.join("pubspec.yaml"), "").unwrap();

        let config = Config::new(root)
            .with_entries(vec![
                IncludeEntry::new("lib"),
                IncludeEntry::guide_only("assets"),
                IncludeEntry::new("pubspec.yaml"),
                IncludeEntry::new("missing"),
            ])
            .with_complete_exclusions(["gen"]);
        let classifier = PathClassifier::new(&config);

        assert_eq!(count_files(&config, &classifier).unwrap(), 2);
    }
}
