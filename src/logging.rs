use std::fmt::Display;

use console::style;

/// Diagnostic output on stderr, gated by `-v` and `-q`.
///
/// Prompts and the result summary go to the terminal through [`crate::ui`];
/// this is only for the scan/delete chatter a user asks for with `-v`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Logger {
    verbose: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        // -q wins over any -v count coming from the environment
        let verbose = if quiet { 0 } else { verbose };
        Self { verbose, quiet }
    }

    pub fn verbose(&self, level: u8, message: impl Display) {
        if self.verbose >= level {
            eprintln!("{} {message}", style("·").dim());
        }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
