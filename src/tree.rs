/*!
 * Box-drawing directory tree rendering for the guide
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::classify::PathClassifier;
use crate::error::Result;
use crate::types::Classification;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";

/// Annotation appended to files that are listed but not copied
pub const NOT_COPIED_NOTE: &str = " (in guide, not copied)";

/// Render the children of `dir`, one line each, recursing into directories.
///
/// Children are sorted by file name and filtered through the classifier using
/// their path relative to `root`. Every line starts with `prefix`; the prefix
/// handed to a nested directory grows by a vertical bar when that directory
/// has following siblings and by blank space when it is the last child.
/// Listing failures are returned, not skipped.
pub fn render_tree(
    root: &Path,
    dir: &Path,
    prefix: &str,
    classifier: &PathClassifier<'_>,
) -> Result<String> {
    let mut items = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        let is_dir = entry.file_type().is_dir();
        match classifier.classify(relative_to(root, entry.path()), !is_dir) {
            Classification::Excluded => {}
            class => items.push((entry, class)),
        }
    }

    let mut structure = String::new();
    let count = items.len();
    for (index, (item, class)) in items.into_iter().enumerate() {
        let is_last = index + 1 == count;
        let pointer = if is_last { CORNER } else { BRANCH };
        let is_dir = item.file_type().is_dir();

        let note = if class == Classification::ListedOnly {
            NOT_COPIED_NOTE
        } else {
            ""
        };

        structure.push_str(prefix);
        structure.push_str(pointer);
        structure.push_str(&item.file_name().to_string_lossy());
        structure.push_str(note);
        structure.push('\n');

        if is_dir {
            let extension = if is_last { BLANK } else { VERTICAL };
            let nested_prefix = format!("{}{}", prefix, extension);
            structure.push_str(&render_tree(root, item.path(), &nested_prefix, classifier)?);
        }
    }

    Ok(structure)
}

fn relative_to<'p>(root: &Path, path: &'p Path) -> &'p Path {
    path.strip_prefix(root).unwrap_or(path)
}
