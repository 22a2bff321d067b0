//! Finding, measuring and deleting `node_modules` directories.
//!
//! This module is the core of modsweep. It has three parts:
//!
//! - [`find_node_modules`]: walks a tree and returns every `node_modules`
//!   directory in it, without descending into matches or hidden directories
//! - [`size_of`]: total size of all regular files below a directory
//! - [`delete_all`]: removes directories one after another, recording
//!   failures instead of stopping
//!
//! Both walks fan out over sibling entries with rayon and join before
//! returning. A [`Sweep`] owns a dedicated, bounded worker pool so a very
//! wide tree cannot open an unbounded number of directory handles; the free
//! functions run on rayon's global pool.
//!
//! Symbolic links are never followed by either walk.
//!
//! # Example
//!
//! ```no_run
//! use modsweep::sweep::{Sweep, delete_all};
//!
//! let sweep = Sweep::builder().jobs(8).build()?;
//!
//! let found = sweep.find("/home/dev/code".as_ref())?;
//! let entries = sweep.measure(found);
//! for entry in &entries {
//!     println!("{} {}", entry.path.display(), entry.size);
//! }
//!
//! let paths: Vec<_> = entries.into_iter().map(|e| e.path).collect();
//! let summary = delete_all(&paths, |_| {});
//! println!("deleted {}, failed {}", summary.deleted, summary.failed);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod finder;
mod remover;
mod size;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

pub use finder::find_node_modules;
pub use remover::{
    DeleteProgress, DeletionFailure, DeletionOutcome, DeletionSummary, delete_all,
    delete_directory,
};
pub use size::{format_size, size_of};

use crate::error::{Result, SweepError};

/// Directory name the finder looks for.
pub const TARGET_NAME: &str = "node_modules";

/// Entries whose name starts with this byte are hidden and never traversed.
pub const HIDDEN_PREFIX: u8 = b'.';

/// Stack size for worker threads; recursion depth follows directory depth.
const WORKER_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A discovered directory together with its total size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Absolute path of the `node_modules` directory
    pub path: PathBuf,
    /// Sum of the sizes of all regular files below `path`, in bytes
    pub size: u64,
}

/// Sum of the sizes of `entries`.
pub fn total_size(entries: &[DirectoryEntry]) -> u64 {
    entries.iter().map(|entry| entry.size).sum()
}

/// A scanner with its own bounded worker pool.
pub struct Sweep {
    pool: rayon::ThreadPool,
    jobs: usize,
}

impl std::fmt::Debug for Sweep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sweep").field("jobs", &self.jobs).finish()
    }
}

impl Sweep {
    /// Creates a new builder for [`Sweep`]
    pub fn builder() -> SweepBuilder {
        SweepBuilder::default()
    }

    /// Number of worker threads in the pool
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Find every `node_modules` directory below `root`.
    ///
    /// Fails only when `root` itself cannot be listed.
    pub fn find(&self, root: &Path) -> Result<Vec<PathBuf>> {
        self.pool.install(|| find_node_modules(root))
    }

    /// Total size of the regular files below `path`. Never fails.
    pub fn size_of(&self, path: &Path) -> u64 {
        self.pool.install(|| size_of(path))
    }

    /// Size every path in parallel and return the entries sorted largest
    /// first.
    ///
    /// Ties are ordered by path so the listing is stable between runs.
    pub fn measure(&self, paths: Vec<PathBuf>) -> Vec<DirectoryEntry> {
        let mut entries: Vec<DirectoryEntry> = self.pool.install(|| {
            paths
                .into_par_iter()
                .map(|path| DirectoryEntry {
                    size: size_of(&path),
                    path,
                })
                .collect()
        });

        entries.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));
        entries
    }
}

/// Builder for [`Sweep`]
#[derive(Debug, Default)]
pub struct SweepBuilder {
    jobs: Option<usize>,
}

impl SweepBuilder {
    /// Set the worker thread count (defaults to twice the number of CPUs)
    pub fn jobs(mut self, jobs: usize) -> Self {
        self.jobs = Some(jobs);
        self
    }

    /// Set the worker thread count if one was given
    pub fn maybe_jobs(mut self, jobs: Option<usize>) -> Self {
        if jobs.is_some() {
            self.jobs = jobs;
        }
        self
    }

    /// Build the [`Sweep`], starting its worker pool
    pub fn build(self) -> Result<Sweep> {
        let jobs = self.jobs.unwrap_or_else(default_jobs);
        if jobs == 0 {
            return Err(SweepError::ConfigError {
                message: "jobs must be at least 1".to_string(),
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .stack_size(WORKER_STACK_SIZE)
            .thread_name(|index| format!("modsweep-{index}"))
            .build()?;

        Ok(Sweep { pool, jobs })
    }
}

fn default_jobs() -> usize {
    num_cpus::get().saturating_mul(2).max(1)
}
