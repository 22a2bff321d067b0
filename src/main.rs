//! # modsweep CLI
//!
//! Interactively find and delete `node_modules` directories.
//!
//! ```bash
//! # scan the current directory
//! modsweep
//!
//! # scan a folder, only report sizes
//! modsweep ~/code --list
//! ```
//!
//! ## Environment Variables
//!
//! - `MODSWEEP_ROOT`: Directory to scan (default: .)
//! - `MODSWEEP_JOBS`: Worker threads used while scanning
//! - `MODSWEEP_LIST`: Only list directories and sizes
//! - `MODSWEEP_VERBOSE`: Enable verbose output
//! - `MODSWEEP_QUIET`: Silence all output except errors and results

use std::io::IsTerminal;

use modsweep::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // plain output for pipes and CI logs
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    modsweep::commands::execute(&cli).map_err(Into::into)
}
