// src/commands/types.rs
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::fs::InMemoryFs;

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn error(stderr: String) -> Self {
        Self {
            stdout: String::new(),
            stderr,
            exit_code: 1,
        }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self {
            stdout,
            stderr,
            exit_code,
        }
    }
}

/// Execution context handed to every command.
///
/// The filesystem (including its cursor) sits behind one lock per instance;
/// commands take a read or write guard for the duration of their run.
pub struct CommandContext {
    pub args: Vec<String>,
    pub fs: Arc<RwLock<InMemoryFs>>,
}

/// Command trait
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: CommandContext) -> CommandResult;
}

/// Pull a `-p PASSWORD` flag out of the argument list, returning the
/// password (if any) and the remaining non-flag operands.
pub(crate) fn split_password_args(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut password = None;
    let mut operands = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-p" | "--password" => password = iter.next().cloned(),
            _ if !arg.starts_with('-') => operands.push(arg.clone()),
            _ => {}
        }
    }
    (password, operands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_password_args() {
        let args: Vec<String> = vec!["-p", "pw", "a.txt", "b.txt"]
            .into_iter()
            .map(String::from)
            .collect();
        let (password, operands) = split_password_args(&args);
        assert_eq!(password.as_deref(), Some("pw"));
        assert_eq!(operands, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_split_password_args_no_flag() {
        let args: Vec<String> = vec!["a.txt"].into_iter().map(String::from).collect();
        let (password, operands) = split_password_args(&args);
        assert_eq!(password, None);
        assert_eq!(operands, vec!["a.txt"]);
    }

    #[test]
    fn test_split_password_args_trailing_flag() {
        let args: Vec<String> = vec!["a.txt", "-p"].into_iter().map(String::from).collect();
        let (password, operands) = split_password_args(&args);
        assert_eq!(password, None);
        assert_eq!(operands, vec!["a.txt"]);
    }
}
