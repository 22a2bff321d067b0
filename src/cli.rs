//! Command-line interface definitions for modsweep.
//!
//! This module defines the CLI structure using clap. The main entry point is
//! the [`Cli`] struct; every option can also be supplied through a
//! `MODSWEEP_*` environment variable.
//!
//! # Example
//!
//! ```no_run
//! use modsweep::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Scanning {}", cli.root().display());
//! ```

use std::path::{Component, Path, PathBuf};

use clap::Parser;

use crate::error::{Result, SweepError};

/// Main command-line interface for modsweep.
#[derive(Debug, Parser)]
#[command(
    name = "modsweep",
    bin_name = "modsweep",
    author,
    version,
    about = "Find node_modules directories, see how much space they use, and delete the ones you pick",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    /// Directory to scan (defaults to the current directory)
    #[arg(default_value = ".", env = "MODSWEEP_ROOT")]
    root: PathBuf,

    /// Number of worker threads used while scanning (defaults to twice the
    /// number of CPUs)
    #[arg(short, long, env = "MODSWEEP_JOBS", value_parser = clap::value_parser!(u32).range(1..))]
    jobs: Option<u32>,

    /// Only list the directories found with their sizes; never prompt or
    /// delete
    #[arg(short, long, env = "MODSWEEP_LIST")]
    list: bool,
}

/// Output options shared by every mode.
#[derive(Debug, Parser)]
pub struct GlobalOpts {
    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, env = "MODSWEEP_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        env = "MODSWEEP_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for [`GlobalOpts`]
#[derive(Debug, Default)]
pub struct GlobalOptsBuilder {
    verbose: u8,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the root as given on the command line
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the requested worker count, if any
    pub fn jobs(&self) -> Option<usize> {
        self.jobs.map(|jobs| jobs as usize)
    }

    /// Check if list-only mode is enabled
    pub fn list(&self) -> bool {
        self.list
    }

    /// Resolve the scan root against `working_dir` into an absolute, clean
    /// path.
    pub fn resolve_root(&self, working_dir: &Path) -> PathBuf {
        normalize_path(working_dir, &self.root)
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    root: Option<PathBuf>,
    jobs: Option<u32>,
    list: bool,
    verbose: u8,
    quiet: bool,
}

impl CliBuilder {
    /// Set the directory to scan
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the worker thread count
    pub fn jobs(mut self, jobs: u32) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Enable list-only mode
    pub fn list(mut self, enabled: bool) -> Self {
        self.list = enabled;
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        if self.jobs == Some(0) {
            return Err(SweepError::ConfigError {
                message: "jobs must be at least 1".to_string(),
            });
        }
        if self.quiet && self.verbose > 0 {
            return Err(SweepError::ConfigError {
                message: "quiet and verbose cannot be combined".to_string(),
            });
        }

        Ok(Cli {
            global_opts: GlobalOpts::builder()
                .verbose(self.verbose)
                .quiet(self.quiet)
                .build(),
            root: self.root.unwrap_or_else(|| PathBuf::from(".")),
            jobs: self.jobs,
            list: self.list,
        })
    }
}

/// Make `path` absolute relative to `base` and drop `.` and `..` components,
/// without touching the filesystem.
///
/// Symlinks are not resolved, so the paths shown to the user are the ones
/// they typed.
pub(crate) fn normalize_path(base: &Path, path: &Path) -> PathBuf {
    let absolute = if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    };

    let mut components: Vec<Component<'_>> = Vec::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
