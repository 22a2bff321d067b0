#![allow(dead_code)]

use std::collections::VecDeque;

use assert_fs::TempDir;
use assert_fs::prelude::*;
use modsweep::error::Result;
use modsweep::ui::Prompter;

/// Prompter that replays canned answers and remembers what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: VecDeque<Vec<usize>>,
    confirmations: VecDeque<bool>,
    pub items_seen: Vec<Vec<String>>,
    pub questions: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(selection: Vec<usize>, confirm: bool) -> Self {
        Self {
            selections: VecDeque::from([selection]),
            confirmations: VecDeque::from([confirm]),
            ..Self::default()
        }
    }

    /// A prompter that fails the test if asked anything.
    pub fn silent() -> Self {
        Self::default()
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, _prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        self.items_seen.push(items.to_vec());
        Ok(self.selections.pop_front().expect("unexpected select prompt"))
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        self.questions.push(prompt.to_string());
        Ok(self
            .confirmations
            .pop_front()
            .expect("unexpected confirm prompt"))
    }
}

/// Write `size` bytes to `relative` below `dir`, creating parents.
pub fn put(dir: &TempDir, relative: &str, size: usize) {
    dir.child(relative).write_binary(&vec![b'x'; size]).unwrap();
}

/// A small monorepo:
///
/// - `web/node_modules` 4096 bytes, with a nested `node_modules`
/// - `api/node_modules` 1000 bytes
/// - `tools/cli/node_modules` 24 bytes
/// - `.git/node_modules` and `api/.cache/node_modules`, hidden
pub fn monorepo() -> TempDir {
    let dir = TempDir::new().unwrap();
    put(&dir, "package.json", 40);
    put(&dir, "web/package.json", 30);
    put(&dir, "web/node_modules/react/index.js", 3000);
    put(&dir, "web/node_modules/react/node_modules/loose/index.js", 1000);
    put(&dir, "web/node_modules/.bin/react", 96);
    put(&dir, "api/node_modules/express/index.js", 1000);
    put(&dir, "api/.cache/node_modules/stale.js", 777);
    put(&dir, "tools/cli/node_modules/tiny/index.js", 24);
    put(&dir, ".git/node_modules/weird.js", 555);
    dir
}
