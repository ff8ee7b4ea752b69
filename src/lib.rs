/*!
 * Takeout - Bundle curated project files for sharing
 *
 * This library writes a directory structure guide for a configured set of
 * project paths and copies the eligible files into one flat folder under
 * collision-checked `.txt` names.
 */

pub mod classify;
pub mod collector;
pub mod config;
pub mod console;
pub mod error;
pub mod guide;
pub mod report;
pub mod takeout;
pub mod tree;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use classify::{is_excluded, PathClassifier};
pub use collector::{flatten_name, Collector};
pub use config::{Args, Config};
pub use console::Console;
pub use error::{ErrorKind, Result, TakeoutError};
pub use guide::{generate_guide, write_guide};
pub use report::{ReportFormat, Reporter};
pub use takeout::{Takeout, TakeoutReport};
pub use tree::render_tree;
pub use types::{Classification, CollectSummary, CopiedFile, IncludeEntry};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
