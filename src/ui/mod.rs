//! Terminal output for the interactive flow.
//!
//! [`Ui`] prints status lines and the failure list, [`Spinner`] wraps an
//! indicatif spinner with an explicit start and finish, and
//! [`Prompter`] is the seam between the flow and the user's answers.

mod prompt;

use std::borrow::Cow;
use std::fmt::Display;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

pub use prompt::{Prompter, TerminalPrompter};

use crate::sweep::DeletionFailure;

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✔"];
const SPINNER_TICK: Duration = Duration::from_millis(80);

/// Status output on stdout. Informational lines are dropped in quiet mode;
/// listings and failures are always shown.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ui {
    quiet: bool,
}

impl Ui {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn heading(&self, message: impl Display) {
        if !self.quiet {
            println!("\n{}\n", style(message).cyan());
        }
    }

    pub fn notice(&self, message: impl Display) {
        if !self.quiet {
            println!("\n{}\n", style(message).yellow());
        }
    }

    pub fn print(&self, message: impl Display) {
        println!("{message}");
    }

    pub fn failures(&self, errors: &[DeletionFailure]) {
        println!("\n{}", style("Failed to delete:").red());
        for failure in errors {
            println!(
                "{}",
                style(format!("  {}: {}", failure.path.display(), failure.error)).red()
            );
        }
        println!();
    }

    pub fn spinner(&self, message: impl Into<Cow<'static, str>>) -> Spinner {
        Spinner::start(message, self.quiet)
    }
}

/// A running spinner. Finish it with [`succeed`](Spinner::succeed),
/// [`fail`](Spinner::fail) or [`warn`](Spinner::warn); dropping it clears the
/// line.
pub struct Spinner {
    bar: ProgressBar,
    quiet: bool,
}

impl Spinner {
    fn start(message: impl Into<Cow<'static, str>>, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };

        let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);
        bar.set_style(spinner_style);
        bar.set_message(message);
        bar.enable_steady_tick(SPINNER_TICK);

        Self { bar, quiet }
    }

    pub fn set_message(&self, message: impl Into<Cow<'static, str>>) {
        self.bar.set_message(message);
    }

    /// Run `f` with the spinner line temporarily cleared, for log output.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    pub fn succeed(self, message: impl Display) {
        self.finish(style("✔").green(), message);
    }

    pub fn fail(self, message: impl Display) {
        self.finish(style("✖").red(), message);
    }

    pub fn warn(self, message: impl Display) {
        self.finish(style("⚠").yellow(), message);
    }

    fn finish(self, symbol: impl Display, message: impl Display) {
        self.bar.finish_and_clear();
        if !self.quiet {
            println!("{symbol} {message}");
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
