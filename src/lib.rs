//! # modsweep
//!
//! Find the `node_modules` directories below a folder, see how much space
//! each one takes, and delete the ones you pick.
//!
//! ## Overview
//!
//! JavaScript projects accumulate dependency caches that are cheap to
//! reinstall and expensive to keep. modsweep walks a directory tree in
//! parallel, reports every `node_modules` it finds (never the ones nested
//! inside another, never the ones under hidden directories such as `.git`),
//! sizes them in parallel, and lets you tick which to remove.
//!
//! ## Architecture
//!
//! - [`sweep`]: the core: directory finder, size accumulator and bulk
//!   remover, running on a bounded rayon pool
//! - [`commands`]: the interactive scan/select/confirm/delete flow
//! - [`cli`]: command-line interface definitions using clap
//! - [`ui`]: spinner, status lines and the prompt seam
//! - [`error`]: error types with thiserror + miette
//!
//! Internal modules (not part of the public API):
//! - `logging`: verbosity-gated stderr diagnostics
//!
//! ## Library Usage
//!
//! ```no_run
//! use modsweep::sweep::{Sweep, format_size};
//!
//! let sweep = Sweep::builder().build()?;
//! let found = sweep.find("/home/dev/code".as_ref())?;
//! for entry in sweep.measure(found) {
//!     println!("{:>10}  {}", format_size(entry.size), entry.path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Only a scan root that cannot be listed is an error. Unreadable
//! subdirectories count as empty, unreadable files as zero bytes, and failed
//! deletions are collected in a
//! [`DeletionSummary`](sweep::DeletionSummary).

pub mod cli;
pub mod commands;
pub mod error;
pub mod sweep;
pub mod ui;

mod logging;
