//! Scan, measure, select, confirm, delete.

use std::path::Path;
use std::time::Instant;

use console::style;

use crate::error::{Result, SweepError};
use crate::logging::Logger;
use crate::sweep::{
    DeletionSummary, DirectoryEntry, Sweep, delete_all, format_size, total_size,
};
use crate::ui::{Prompter, Spinner, Ui};

/// How a [`Clean`] run ended.
#[derive(Debug)]
pub enum CleanOutcome {
    /// The scan found no `node_modules` directories
    NothingFound,
    /// List-only mode: the directories found, largest first
    Listed(Vec<DirectoryEntry>),
    /// The user ticked nothing
    NothingSelected,
    /// The user declined the confirmation
    Cancelled,
    /// Deletion ran; `freed` counts the sizes of directories actually removed
    Deleted {
        summary: DeletionSummary,
        freed: u64,
    },
}

pub struct Clean<'a> {
    root: &'a Path,
    jobs: Option<usize>,
    list: bool,
    verbose: u8,
    quiet: bool,
}

#[derive(Default)]
pub struct CleanBuilder<'a> {
    root: Option<&'a Path>,
    jobs: Option<usize>,
    list: bool,
    verbose: u8,
    quiet: bool,
}

impl<'a> CleanBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute directory to scan
    pub fn root(mut self, root: &'a Path) -> Self {
        self.root = Some(root);
        self
    }

    pub fn jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn list(mut self, list: bool) -> Self {
        self.list = list;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<Clean<'a>> {
        let root = self.root.ok_or_else(|| SweepError::ConfigError {
            message: "A scan root is required".to_string(),
        })?;

        Ok(Clean {
            root,
            jobs: self.jobs,
            list: self.list,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

impl<'a> Clean<'a> {
    pub fn builder<'b>() -> CleanBuilder<'b> {
        CleanBuilder::new()
    }

    /// Execute the whole flow, asking `prompter` for the selection and the
    /// confirmation.
    pub fn run(self, prompter: &mut dyn Prompter) -> Result<CleanOutcome> {
        let log = Logger::new(self.verbose, self.quiet);
        let ui = Ui::new(log.quiet());

        let sweep = Sweep::builder().maybe_jobs(self.jobs).build()?;
        log.verbose(1, format!("Using {} worker threads", sweep.jobs()));

        ui.heading(format!("Scanning: {}", self.root.display()));

        let spinner = ui.spinner("Scanning for node_modules...");
        let started = Instant::now();
        let found = match sweep.find(self.root) {
            Ok(found) => found,
            Err(err) => {
                spinner.fail("Failed to scan directory");
                return Err(err);
            }
        };

        if found.is_empty() {
            spinner.succeed("Scan complete");
            ui.notice("No node_modules directories found.");
            return Ok(CleanOutcome::NothingFound);
        }

        let count = found.len();
        spinner.suspend(|| {
            log.verbose(
                1,
                format!("Scan found {count} directories in {:.2?}", started.elapsed()),
            )
        });
        spinner.set_message(format!(
            "Found {count} directories, calculating sizes..."
        ));

        let started = Instant::now();
        let entries = sweep.measure(found);
        let total = total_size(&entries);
        spinner.suspend(|| {
            log.verbose(1, format!("Sizes calculated in {:.2?}", started.elapsed()));
            for entry in &entries {
                log.verbose(
                    2,
                    format!("{} {}", format_size(entry.size), entry.path.display()),
                );
            }
        });

        spinner.succeed(format!(
            "Found {} node_modules directories ({} total)\n",
            entries.len(),
            format_size(total)
        ));

        if self.list {
            for entry in &entries {
                ui.print(entry_label(entry));
            }
            return Ok(CleanOutcome::Listed(entries));
        }

        let mut items = Vec::with_capacity(entries.len() + 1);
        items.push(
            style(format!("Select All ({} total)", format_size(total)))
                .bold()
                .to_string(),
        );
        items.extend(entries.iter().map(entry_label));

        let picked = prompter.select("Select directories to delete:", &items)?;
        let selected = resolve_selection(&entries, &picked);

        if selected.is_empty() {
            ui.notice("No directories selected. Exiting.");
            return Ok(CleanOutcome::NothingSelected);
        }

        let selected_size: u64 = selected.iter().map(|entry| entry.size).sum();
        let question = format!(
            "Are you sure you want to delete {} {} ({})?",
            selected.len(),
            directories(selected.len()),
            format_size(selected_size)
        );
        if !prompter.confirm(&question)? {
            ui.notice("Deletion cancelled.");
            return Ok(CleanOutcome::Cancelled);
        }

        let spinner = ui.spinner("Deleting directories...");
        let (summary, freed) = delete_selected(&selected, &spinner, &log);

        let line = summary_line(&summary, freed);
        if summary.failed == 0 {
            spinner.succeed(style(line).green());
        } else {
            spinner.warn(style(line).yellow());
            ui.failures(&summary.errors);
        }

        Ok(CleanOutcome::Deleted { summary, freed })
    }
}

/// Delete `selected` in order, updating `spinner` after each path.
///
/// Returns the summary and the bytes freed, counting only the entries that
/// were actually removed.
fn delete_selected(
    selected: &[&DirectoryEntry],
    spinner: &Spinner,
    log: &Logger,
) -> (DeletionSummary, u64) {
    let paths: Vec<&Path> = selected.iter().map(|entry| entry.path.as_path()).collect();
    let mut freed = 0;
    let summary = delete_all(&paths, |progress| {
        spinner.set_message(format!(
            "Deleting {}/{}: {}",
            progress.current,
            progress.total,
            project_name(progress.path)
        ));
        if progress.success {
            freed += selected[progress.current - 1].size;
        }
        spinner.suspend(|| {
            log.verbose(
                2,
                format!(
                    "{} {}",
                    if progress.success { "deleted" } else { "failed " },
                    progress.path.display()
                ),
            )
        });
    });

    (summary, freed)
}

/// The closing status line of a deletion run.
fn summary_line(summary: &DeletionSummary, freed: u64) -> String {
    if summary.failed == 0 {
        format!(
            "Deleted {} {}, freed {}",
            summary.deleted,
            directories(summary.deleted),
            format_size(freed)
        )
    } else {
        format!(
            "Deleted {} {}, {} failed",
            summary.deleted,
            directories(summary.deleted),
            summary.failed
        )
    }
}

/// Map prompt indices back to entries. Index 0 is "Select All"; entry `i`
/// is shown at index `i + 1`. Display order is kept.
pub(crate) fn resolve_selection<'e>(
    entries: &'e [DirectoryEntry],
    picked: &[usize],
) -> Vec<&'e DirectoryEntry> {
    if picked.contains(&0) {
        return entries.iter().collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(index, _)| picked.contains(&(index + 1)))
        .map(|(_, entry)| entry)
        .collect()
}

fn entry_label(entry: &DirectoryEntry) -> String {
    format!(
        "{} {}",
        entry.path.display(),
        style(format!("({})", format_size(entry.size))).dim()
    )
}

/// Name of the project owning a `node_modules` directory.
fn project_name(path: &Path) -> String {
    path.parent()
        .and_then(Path::file_name)
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn directories(count: usize) -> &'static str {
    if count == 1 { "directory" } else { "directories" }
}
