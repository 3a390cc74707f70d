// src/commands/mkdir/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct MkdirCommand;

#[async_trait]
impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: mkdir NAME...\n\n\
                 Create empty folder(s) in the current folder.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let names: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        if names.is_empty() {
            return CommandResult::error("mkdir: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut fs = ctx.fs.write().await;

        for name in names {
            if let Err(e) = fs.mkdir(name) {
                stderr.push_str(&format!("mkdir: cannot create folder '{}': {}\n", name, e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::InMemoryFs;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn make_ctx(args: Vec<&str>, fs: Arc<RwLock<InMemoryFs>>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs,
        }
    }

    #[tokio::test]
    async fn test_mkdir_simple() {
        let fs = Arc::new(RwLock::new(InMemoryFs::new()));
        let result = MkdirCommand.execute(make_ctx(vec!["docs"], fs.clone())).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.ls().unwrap(), vec!["docs"]);
    }

    #[tokio::test]
    async fn test_mkdir_multiple() {
        let fs = Arc::new(RwLock::new(InMemoryFs::new()));
        let result = MkdirCommand
            .execute(make_ctx(vec!["a", "b", "c"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.ls().unwrap(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_mkdir_duplicate() {
        let fs = Arc::new(RwLock::new(InMemoryFs::new()));
        MkdirCommand.execute(make_ctx(vec!["docs"], fs.clone())).await;
        let result = MkdirCommand.execute(make_ctx(vec!["docs"], fs.clone())).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("cannot create folder 'docs'"));
    }

    #[tokio::test]
    async fn test_mkdir_missing_operand() {
        let fs = Arc::new(RwLock::new(InMemoryFs::new()));
        let result = MkdirCommand.execute(make_ctx(vec![], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("missing operand"));
    }
}
