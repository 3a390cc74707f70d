//! Shell Environment
//!
//! Ties the command registry to a shared filesystem instance and runs
//! scripts line by line.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::commands::{create_registry, Command, CommandContext, CommandRegistry};
use crate::fs::InMemoryFs;

/// Options for creating a shell.
#[derive(Default)]
pub struct ShellOptions {
    /// Filesystem instance (defaults to a fresh empty one)
    pub fs: Option<Arc<RwLock<InMemoryFs>>>,
}

/// Aggregated result of running a script.
#[derive(Debug, Clone, Serialize)]
pub struct ExecResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

/// The shell environment: one filesystem, one registry.
pub struct Shell {
    fs: Arc<RwLock<InMemoryFs>>,
    registry: CommandRegistry,
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        let fs = options
            .fs
            .unwrap_or_else(|| Arc::new(RwLock::new(InMemoryFs::new())));
        Self {
            fs,
            registry: create_registry(),
        }
    }

    pub fn fs(&self) -> Arc<RwLock<InMemoryFs>> {
        self.fs.clone()
    }

    /// Run a script line by line. Blank lines and `#` comments are skipped.
    /// The exit code is that of the last command run.
    pub async fn exec(&self, script: &str) -> ExecResult {
        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;

        for line in script.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut words = split_line(line);
            if words.is_empty() {
                continue;
            }
            let name = words.remove(0);

            match self.registry.get(&name) {
                Some(cmd) => {
                    let result = cmd
                        .execute(CommandContext {
                            args: words,
                            fs: self.fs.clone(),
                        })
                        .await;
                    stdout.push_str(&result.stdout);
                    stderr.push_str(&result.stderr);
                    exit_code = result.exit_code;
                }
                None => {
                    stderr.push_str(&format!("memsh: {}: command not found\n", name));
                    exit_code = 127;
                }
            }
        }

        ExecResult {
            stdout,
            stderr,
            exit_code,
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

/// Split a command line into words.
///
/// Double and single quotes group words; a backslash outside quotes escapes
/// the next character. No expansion of any kind.
fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                in_word = true;
                let quote = c;
                for q in chars.by_ref() {
                    if q == quote {
                        break;
                    }
                    current.push(q);
                }
            }
            '\\' => {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

// ============================================================================
// Tests
// ============================================================================
