//! The interactive clean-up flow behind the `modsweep` binary.
//!
//! [`execute`] resolves the scan root and runs [`Clean`], prompting on the
//! terminal. [`execute_with`] does the same with an explicit working
//! directory and [`Prompter`], which is how the tests drive it.
//!
//! # Example
//!
//! ```no_run
//! use modsweep::cli::Cli;
//! use modsweep::commands;
//!
//! let cli = Cli::parse_args();
//! if let Err(e) = commands::execute(&cli) {
//!     eprintln!("Error: {e:?}");
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{Result, SweepError};
use crate::ui::{Prompter, TerminalPrompter};

pub(crate) mod clean;

pub use clean::{Clean, CleanBuilder, CleanOutcome};


/// Run modsweep for the parsed CLI arguments, prompting on the terminal.
pub fn execute(cli: &Cli) -> Result<()> {
    let mut prompter = TerminalPrompter::default();
    execute_with(cli, None, &mut prompter).map(|_| ())
}

/// Run modsweep with an explicit working directory and prompter.
///
/// A relative root is resolved against `working_dir`, or the process's
/// current directory when it is `None`.
pub fn execute_with(
    cli: &Cli,
    working_dir: Option<&Path>,
    prompter: &mut dyn Prompter,
) -> Result<CleanOutcome> {
    let current_dir = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| SweepError::IoError {
            path: PathBuf::from("."),
            source,
        })?,
    };

    let root = cli.resolve_root(&current_dir);
    let opts = cli.global_opts();

    Clean::builder()
        .root(&root)
        .jobs(cli.jobs())
        .list(cli.list())
        .verbose(opts.verbose())
        .quiet(opts.quiet())
        .build()?
        .run(prompter)
}
