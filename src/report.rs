/*!
 * Reporting functionality for takeout
 *
 * Renders the end-of-run summary with the tabled library.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::error::TakeoutError;
use crate::takeout::TakeoutReport;
use crate::utils::format_file_size;

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a finished run
    pub fn generate_report(&self, report: &TakeoutReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &TakeoutReport) {
        println!("\n{}", self.generate_report(report));
    }

    /// Banner printed when a run fails
    pub fn failure_banner(&self, error: &TakeoutError) -> String {
        format!(
            "--- ❌ An error occurred ---\nError ({}): {}\nThe output directory may be incomplete.",
            error.kind(),
            error
        )
    }

    fn create_summary_table(&self, report: &TakeoutReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let summary = &report.summary;
        let rows = vec![
            SummaryRow {
                key: "📂 Output Directory".to_string(),
                value: report.output_dir.display().to_string(),
            },
            SummaryRow {
                key: "🗺️ Guide".to_string(),
                value: report.guide_path.display().to_string(),
            },
            SummaryRow {
                key: "📄 Files Copied".to_string(),
                value: summary.files_copied().to_string(),
            },
            SummaryRow {
                key: "📝 Listed Only".to_string(),
                value: summary.listed_only.len().to_string(),
            },
            SummaryRow {
                key: "⏭️ Skipped Entries".to_string(),
                value: summary.skipped_entries.to_string(),
            },
            SummaryRow {
                key: "📦 Total Size".to_string(),
                value: format_file_size(summary.total_bytes()),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &TakeoutReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "Source")]
            source: String,

            #[tabled(rename = "Copied As")]
            output: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        // Largest first
        let mut files: Vec<_> = report.summary.copied.iter().collect();
        files.sort_by(|a, b| b.bytes.cmp(&a.bytes).then_with(|| a.source.cmp(&b.source)));

        let files_to_show = if files.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|file| FileRow {
                source: file.source.display().to_string(),
                output: file.output_name.clone(),
                size: format_file_size(file.bytes),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &TakeoutReport) -> String {
        let files_title = if report.summary.copied.len() > 15 {
            "📋  TOP 10 LARGEST COPIED FILES  📋"
        } else {
            "📋  COPIED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}\n\n--- ✅ Takeout Complete! ---\nAll files are ready in '{}'.\nYou can now zip this folder or copy-paste the contents of the files.",
            files_title,
            self.create_files_table(report),
            "✅  SUMMARY",
            self.create_summary_table(report),
            report.output_dir.display()
        )
    }
}
