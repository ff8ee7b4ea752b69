/*!
 * Console progress output
 *
 * Lines are printed around the progress bar so they never tear its
 * rendering. Quiet mode drops progress lines but keeps warnings.
 */

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporting surface shared by every step of a run
#[derive(Clone)]
pub struct Console {
    progress: Arc<ProgressBar>,
    quiet: bool,
}

impl Console {
    pub fn new(progress: Arc<ProgressBar>, quiet: bool) -> Self {
        Self { progress, quiet }
    }

    /// A console that draws and prints nothing
    pub fn hidden() -> Self {
        Self::new(Arc::new(ProgressBar::hidden()), true)
    }

    /// Progress bar styled for the copy phase
    pub fn styled_bar() -> ProgressBar {
        let progress = ProgressBar::new(0);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
        {
            progress.set_style(style);
        }
        progress
    }

    pub fn progress(&self) -> &ProgressBar {
        &self.progress
    }

    /// Major step or per-file progress line
    pub fn info(&self, message: impl AsRef<str>) {
        if !self.quiet {
            self.progress.suspend(|| println!("{}", message.as_ref()));
        }
    }

    /// Non-fatal problem the run continues past; printed even in quiet mode
    pub fn warn(&self, message: impl AsRef<str>) {
        self.progress
            .suspend(|| eprintln!("Warning: {}", message.as_ref()));
    }

    /// Advance the bar by one copied file
    pub fn tick(&self, current: &str) {
        self.progress.inc(1);
        let display_name = if current.len() > 40 {
            let mut start = current.len() - 37;
            while !current.is_char_boundary(start) {
                start += 1;
            }
            format!("...{}", &current[start..])
        } else {
            current.to_string()
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));
    }
}
