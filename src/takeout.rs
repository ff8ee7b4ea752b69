/*!
 * Run orchestration: reset the output directory, write the guide, copy files
 */

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::classify::PathClassifier;
use crate::collector::Collector;
use crate::config::Config;
use crate::console::Console;
use crate::error::{Result, ResultExt};
use crate::guide::write_guide;
use crate::types::CollectSummary;
use crate::utils::count_files;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct TakeoutReport {
    /// Output directory that was populated
    pub output_dir: PathBuf,
    /// Guide document inside the output directory
    pub guide_path: PathBuf,
    /// What the copy phase did
    pub summary: CollectSummary,
    /// Wall-clock time of the whole run
    pub duration: Duration,
}

/// A single takeout run over one project root
pub struct Takeout {
    config: Config,
    console: Console,
}

impl Takeout {
    pub fn new(config: Config, console: Console) -> Self {
        Self { config, console }
    }

    /// Execute the run. Any filesystem failure aborts it and is returned as-is;
    /// the output directory is left as it was at that point.
    pub fn run(&self) -> Result<TakeoutReport> {
        let start_time = Instant::now();
        let config = &self.config;
        let console = &self.console;

        console.info(format!(
            "Running takeout in project root: {}",
            config.project_root.display()
        ));

        let output_dir = self.setup_output_dir()?;
        let classifier = PathClassifier::new(config);

        console.progress().set_prefix("Guide");
        let guide_path = write_guide(config, &classifier, console)?;

        match count_files(config, &classifier) {
            Ok(count) => console.progress().set_length(count),
            Err(e) => console.warn(format!("Failed to count files: {}", e)),
        }
        console.progress().set_prefix("Copying");
        let summary = Collector::new(config, &classifier, console).collect()?;

        Ok(TakeoutReport {
            output_dir,
            guide_path,
            summary,
            duration: start_time.elapsed(),
        })
    }

    /// Remove any previous output directory and create an empty one
    pub fn setup_output_dir(&self) -> Result<PathBuf> {
        let output_dir = self.config.output_dir();
        let name = &self.config.output_dir_name;

        if output_dir.exists() {
            self.console.info(format!(
                "'{}' directory found. Clearing it for a fresh start...",
                name
            ));
            fs::remove_dir_all(&output_dir)
                .with_context(|| format!("Failed to clear {}", output_dir.display()))?;
        }
        fs::create_dir(&output_dir)
            .with_context(|| format!("Failed to create {}", output_dir.display()))?;

        self.console
            .info(format!("Successfully created clean '{}' directory.", name));
        Ok(output_dir)
    }
}
