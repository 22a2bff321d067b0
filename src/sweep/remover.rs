use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of deleting one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionOutcome {
    /// The path that was deleted
    pub path: PathBuf,
    /// Why the deletion failed, `None` on success
    pub error: Option<String>,
}

impl DeletionOutcome {
    /// Whether the path is gone
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// A path that could not be deleted, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    /// The path that is still there
    pub path: PathBuf,
    /// The operating system's error message
    pub error: String,
}

/// Totals for a [`delete_all`] run.
///
/// `deleted + failed` always equals the number of paths given, and `errors`
/// holds exactly `failed` entries in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    /// Paths removed, or already absent
    pub deleted: usize,
    /// Paths that could not be removed
    pub failed: usize,
    /// One entry per failed path, in input order
    pub errors: Vec<DeletionFailure>,
}

impl DeletionSummary {
    fn record(&mut self, outcome: DeletionOutcome) {
        match outcome.error {
            None => self.deleted += 1,
            Some(error) => {
                self.failed += 1;
                self.errors.push(DeletionFailure {
                    path: outcome.path,
                    error,
                });
            }
        }
    }

    /// Number of paths processed
    pub fn total(&self) -> usize {
        self.deleted + self.failed
    }
}

impl FromIterator<DeletionOutcome> for DeletionSummary {
    fn from_iter<I: IntoIterator<Item = DeletionOutcome>>(iter: I) -> Self {
        let mut summary = DeletionSummary::default();
        for outcome in iter {
            summary.record(outcome);
        }
        summary
    }
}

/// Progress report handed to the [`delete_all`] callback after each path.
#[derive(Debug, Clone, Copy)]
pub struct DeleteProgress<'a> {
    /// 1-based count of paths processed so far
    pub current: usize,
    /// Number of paths in this run
    pub total: usize,
    /// The path just processed
    pub path: &'a Path,
    /// Whether that path was deleted
    pub success: bool,
}

/// Recursively delete `path`.
///
/// A path that does not exist counts as deleted. Anything that is not a
/// directory is removed as a single file.
pub fn delete_directory(path: &Path) -> DeletionOutcome {
    DeletionOutcome {
        path: path.to_path_buf(),
        error: force_remove(path).err().map(|err| err.to_string()),
    }
}

/// Delete every path in order, one at a time.
///
/// A failure is recorded and the remaining paths are still attempted.
/// `on_progress` is called once per path, after the attempt and before the
/// next one starts; pass `|_| {}` when progress is not needed.
pub fn delete_all<P, F>(paths: &[P], mut on_progress: F) -> DeletionSummary
where
    P: AsRef<Path>,
    F: FnMut(DeleteProgress<'_>),
{
    let total = paths.len();
    let mut summary = DeletionSummary::default();

    for (index, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let outcome = delete_directory(path);
        let success = outcome.success();
        summary.record(outcome);

        on_progress(DeleteProgress {
            current: index + 1,
            total,
            path,
            success,
        });
    }

    summary
}

fn force_remove(path: &Path) -> io::Result<()> {
    let removed = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(err) => Err(err),
    };

    match removed {
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
