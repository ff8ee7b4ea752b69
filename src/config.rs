/*!
 * Configuration handling for takeout
 *
 * All defaults are compiled in. The command line only overrides where the
 * project lives and how the run reports; the inclusion list and both
 * exclusion sets are edited here before building.
 */

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;
use once_cell::sync::Lazy;

use crate::ensure;
use crate::error::Result;
use crate::types::IncludeEntry;

/// Name of the output directory created under the project root
pub const DEFAULT_OUTPUT_DIR: &str = "takeout";

/// Name of the guide document written into the output directory
pub const GUIDE_FILE_NAME: &str = "directory_structure_guide.txt";

/// Separator used when flattening nested paths into one file name
pub const FLATTEN_SEPARATOR: &str = "_";

/// Extension given to every copied file
pub const OUTPUT_EXTENSION: &str = "txt";

/// Top-level paths processed by a run, in guide order
pub static DEFAULT_ENTRIES: Lazy<Vec<IncludeEntry>> = Lazy::new(|| {
    vec![
        IncludeEntry::new("lib"),
        IncludeEntry::new("windows"),
        IncludeEntry::guide_only("assets"),
        IncludeEntry::new("pubspec.yaml"),
    ]
});

/// Path segments that are ignored entirely (e.g. "build", ".git")
pub static DEFAULT_COMPLETE_EXCLUSIONS: Lazy<Vec<&'static str>> = Lazy::new(Vec::new);

/// Extensions listed in the guide but never copied
pub static DEFAULT_COPY_EXCLUDED_EXTENSIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec![".h", ".rc", ".lock"]);

/// Command-line arguments for takeout
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "takeout",
    version = crate::VERSION,
    about = "Bundle curated project files into a flat folder with a directory guide",
    long_about = "Recreates the output folder, writes a directory structure guide for the configured paths and copies every eligible file into the folder under a flattened .txt name."
)]
pub struct Args {
    /// Project root to process (defaults to the directory the tool was built from)
    #[clap(long)]
    pub root: Option<String>,

    /// Name of the output directory created under the project root
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Suppress per-file progress lines
    #[clap(long)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory containing the source tree
    pub project_root: PathBuf,

    /// Output directory name, relative to the project root
    pub output_dir_name: String,

    /// Top-level paths to process, in order
    pub entries: Vec<IncludeEntry>,

    /// Path segments that exclude a path completely
    pub complete_exclusions: BTreeSet<String>,

    /// Extensions (without the leading dot) that are listed but not copied
    pub copy_excluded_extensions: BTreeSet<String>,

    /// Guide document file name
    pub guide_file_name: String,

    /// Separator joining flattened path segments
    pub separator: String,

    /// Extension of every copied file
    pub output_extension: String,

    /// Suppress per-file progress lines
    pub quiet: bool,
}

impl Config {
    /// Default configuration for a project root
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            output_dir_name: DEFAULT_OUTPUT_DIR.to_string(),
            entries: DEFAULT_ENTRIES.clone(),
            complete_exclusions: DEFAULT_COMPLETE_EXCLUSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            copy_excluded_extensions: normalize_extensions(DEFAULT_COPY_EXCLUDED_EXTENSIONS.iter()),
            guide_file_name: GUIDE_FILE_NAME.to_string(),
            separator: FLATTEN_SEPARATOR.to_string(),
            output_extension: OUTPUT_EXTENSION.to_string(),
            quiet: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let root = args
            .root
            .map(PathBuf::from)
            .unwrap_or_else(default_project_root);

        Self {
            output_dir_name: args.output_dir,
            quiet: args.quiet,
            ..Self::new(root)
        }
    }

    /// Replace the inclusion list
    pub fn with_entries(mut self, entries: Vec<IncludeEntry>) -> Self {
        self.entries = entries;
        self
    }

    /// Replace the complete-exclusion set
    pub fn with_complete_exclusions<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.complete_exclusions = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the copy-exclusion extension set; a leading dot is optional
    pub fn with_copy_excluded_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.copy_excluded_extensions = normalize_extensions(extensions);
        self
    }

    /// Absolute location of the output directory
    pub fn output_dir(&self) -> PathBuf {
        self.project_root.join(&self.output_dir_name)
    }

    /// Absolute location of the guide document
    pub fn guide_path(&self) -> PathBuf {
        self.output_dir().join(&self.guide_file_name)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.project_root.exists() {
            crate::bail!(
                PathNotFound,
                "Project root not found: {}",
                self.project_root.display()
            );
        }
        ensure!(
            self.project_root.is_dir(),
            Config,
            "Project root is not a directory: {}",
            self.project_root.display()
        );
        ensure!(
            is_single_segment(&self.output_dir_name),
            Config,
            "Output directory must be a plain directory name, got '{}'",
            self.output_dir_name
        );
        ensure!(
            is_single_segment(&self.guide_file_name),
            Config,
            "Guide file must be a plain file name, got '{}'",
            self.guide_file_name
        );
        ensure!(
            !self.separator.is_empty(),
            Config,
            "Flatten separator must not be empty"
        );
        ensure!(
            !self.output_extension.is_empty() && !self.output_extension.contains('.'),
            Config,
            "Output extension must be a non-empty extension without dots, got '{}'",
            self.output_extension
        );

        for entry in &self.entries {
            ensure!(
                is_relative_within_root(&entry.path),
                Config,
                "Included path must be relative to the project root: {}",
                entry.display()
            );
        }

        Ok(())
    }
}

/// The directory holding the tool's manifest, i.e. the project the tool lives in
pub fn default_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn normalize_extensions<I, S>(extensions: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extensions
        .into_iter()
        .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn is_relative_within_root(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_flutter_layout() {
        let config = Config::new("/project");
        let paths: Vec<_> = config.entries.iter().map(|e| e.display()).collect();
        assert_eq!(paths, vec!["lib", "windows", "assets", "pubspec.yaml"]);
        assert!(config.entries[2].guide_only);
        assert!(config.complete_exclusions.is_empty());
        assert_eq!(
            config.copy_excluded_extensions.iter().collect::<Vec<_>>(),
            vec!["h", "lock", "rc"]
        );
        assert_eq!(config.output_dir(), PathBuf::from("/project/takeout"));
        assert_eq!(
            config.guide_path(),
            PathBuf::from("/project/takeout/directory_structure_guide.txt")
        );
    }

    #[test]
    fn extensions_accept_optional_dot() {
        let config = Config::new("/project").with_copy_excluded_extensions([".png", "svg", "."]);
        assert_eq!(
            config.copy_excluded_extensions.iter().collect::<Vec<_>>(),
            vec!["png", "svg"]
        );
    }

    #[test]
    fn args_override_root_and_output() {
        let args = Args::parse_from(["takeout", "--root", "/work", "--output-dir", "bundle", "--quiet"]);
        let config = Config::from_args(args);
        assert_eq!(config.project_root, PathBuf::from("/work"));
        assert_eq!(config.output_dir_name, "bundle");
        assert!(config.quiet);

        let config = Config::from_args(Args::parse_from(["takeout"]));
        assert_eq!(config.project_root, default_project_root());
        assert_eq!(config.output_dir_name, DEFAULT_OUTPUT_DIR);
        assert!(!config.quiet);
    }

    #[test]
    fn version_comes_from_the_library() {
        use clap::CommandFactory;
        assert_eq!(Args::command().get_version(), Some(crate::VERSION));
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();

        assert!(Config::new(root).validate().is_ok());

        let missing = Config::new(root.join("nope")).validate().unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::NotFound);

        let mut nested_output = Config::new(root);
        nested_output.output_dir_name = "a/b".to_string();
        assert_eq!(nested_output.validate().unwrap_err().kind(), ErrorKind::Config);

        let mut parent_output = Config::new(root);
        parent_output.output_dir_name = "..".to_string();
        assert!(parent_output.validate().is_err());

        let escaping = Config::new(root).with_entries(vec![IncludeEntry::new("../secrets")]);
        assert!(escaping.validate().is_err());

        let absolute = Config::new(root).with_entries(vec![IncludeEntry::new("/etc")]);
        assert!(absolute.validate().is_err());

        let mut no_separator = Config::new(root);
        no_separator.separator.clear();
        assert!(no_separator.validate().is_err());
    }
}
