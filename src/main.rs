/*!
 * Command-line interface for takeout
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};

use takeout::config::{Args, Config};
use takeout::console::Console;
use takeout::report::{ReportFormat, Reporter};
use takeout::takeout::Takeout;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "takeout", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = Config::from_args(args);
    let reporter = Reporter::new(ReportFormat::ConsoleTable);

    let progress = Console::styled_bar();
    let console = Console::new(Arc::new(progress.clone()), config.quiet);

    let result = config
        .validate()
        .and_then(|_| Takeout::new(config, console).run());

    progress.finish_and_clear();

    match result {
        Ok(report) => {
            reporter.print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n{}", reporter.failure_banner(&e));
            ExitCode::FAILURE
        }
    }
}
