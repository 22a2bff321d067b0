use std::ffi::OsStr;
use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{HIDDEN_PREFIX, TARGET_NAME};
use crate::error::{Result, SweepError};

/// What the finder does with a subdirectory, decided from its name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    /// A `node_modules` directory: report it, never look inside
    Match,
    /// An ordinary directory: keep searching below it
    Descend,
    /// A hidden directory: ignore it and everything below it
    Skip,
}

fn classify(name: &OsStr) -> Visit {
    if name == TARGET_NAME {
        Visit::Match
    } else if name.as_encoded_bytes().first() == Some(&HIDDEN_PREFIX) {
        Visit::Skip
    } else {
        Visit::Descend
    }
}

/// Finds all `node_modules` directories below `root`.
///
/// Matches are pruned: nothing inside a `node_modules` directory is visited,
/// so no returned path is nested in another. Hidden directories are skipped
/// entirely. Sibling directories are searched in parallel on the current
/// rayon pool. The order of the result is unspecified.
///
/// # Errors
///
/// Returns [`SweepError::RootInaccessible`] if `root` cannot be listed.
/// Directories further down that cannot be listed are treated as empty.
pub fn find_node_modules(root: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|source| SweepError::RootInaccessible {
        path: root.to_path_buf(),
        source,
    })?;

    Ok(search(entries))
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => search(entries),
        Err(_) => Vec::new(),
    }
}

fn search(entries: ReadDir) -> Vec<PathBuf> {
    let mut found = Vec::new();
    let mut descend = Vec::new();

    for entry in entries.flatten() {
        // file_type() does not follow symlinks, so linked directories are
        // neither matched nor entered
        let is_dir = entry.file_type().is_ok_and(|kind| kind.is_dir());
        if !is_dir {
            continue;
        }

        match classify(&entry.file_name()) {
            Visit::Match => found.push(entry.path()),
            Visit::Descend => descend.push(entry.path()),
            Visit::Skip => {}
        }
    }

    // `entries` is consumed here, releasing the directory handle before the
    // fan-out
    found.par_extend(descend.par_iter().flat_map_iter(|dir| walk(dir)));
    found
}
