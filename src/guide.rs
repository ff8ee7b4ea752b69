/*!
 * Directory structure guide generation
 */

use std::fs;
use std::path::PathBuf;

use crate::classify::PathClassifier;
use crate::config::Config;
use crate::console::Console;
use crate::error::{Result, ResultExt};
use crate::tree::render_tree;

/// First line of every guide document
pub const GUIDE_TITLE: &str = "--- Project Structure Guide ---";

/// Indent applied to trees under a top-level directory
const TREE_INDENT: &str = "  ";

/// Build the guide text for every configured entry, in order.
///
/// Excluded entries are left out, missing ones get a `(not found)` line.
pub fn generate_guide(
    config: &Config,
    classifier: &PathClassifier<'_>,
    console: &Console,
) -> Result<String> {
    let root = &config.project_root;
    let mut structure = format!("{}\n\n", GUIDE_TITLE);

    for entry in &config.entries {
        if classifier.is_excluded(&entry.path) {
            continue;
        }

        let path = root.join(&entry.path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| entry.display());

        if !path.exists() {
            console.warn(format!("Path '{}' not found, listing it as missing.", entry.display()));
            structure.push_str(&format!("{} (not found)\n\n", entry.display()));
        } else if path.is_dir() {
            structure.push_str(&format!("{}/\n", name));
            structure.push_str(&render_tree(root, &path, TREE_INDENT, classifier)?);
            structure.push('\n');
        } else {
            structure.push_str(&format!("{}\n\n", name));
        }
    }

    Ok(structure)
}

/// Generate the guide and write it into `output_dir`
pub fn write_guide(
    config: &Config,
    classifier: &PathClassifier<'_>,
    console: &Console,
) -> Result<PathBuf> {
    console.info(format!("Generating '{}'...", config.guide_file_name));

    let guide = generate_guide(config, classifier, console)?;
    let guide_path = config.guide_path();
    fs::write(&guide_path, guide)
        .with_context(|| format!("Failed to write guide {}", guide_path.display()))?;

    console.info("Guide created successfully.");
    Ok(guide_path)
}
