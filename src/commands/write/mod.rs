// src/commands/write/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct WriteCommand;

#[async_trait]
impl Command for WriteCommand {
    fn name(&self) -> &'static str {
        "write"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: write FILE [TEXT]...\n\n\
                 Replace FILE's content with TEXT (words joined by spaces).\n\
                 Writing is never password-gated; only reading is.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let mut operands = ctx.args.iter().filter(|a| !a.starts_with('-'));
        let path = match operands.next() {
            Some(path) => path,
            None => return CommandResult::error("write: missing operand\n".to_string()),
        };
        let content = operands.cloned().collect::<Vec<String>>().join(" ");

        let mut fs = ctx.fs.write().await;
        match fs.write_file(path, &content) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("write: {}\n", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{File, InMemoryFs};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn make_ctx(args: Vec<&str>, fs: Arc<RwLock<InMemoryFs>>) -> CommandContext {
        CommandContext {
            args: args.into_iter().map(String::from).collect(),
            fs,
        }
    }

    async fn sample_fs() -> Arc<RwLock<InMemoryFs>> {
        let mut fs = InMemoryFs::new();
        fs.create_file(File::with_content("a.txt", "old")).unwrap();
        fs.create_file(File::protected("s.txt", "old", "pw")).unwrap();
        fs.mkdir("docs").unwrap();
        Arc::new(RwLock::new(fs))
    }

    #[tokio::test]
    async fn test_write_replaces_content() {
        let fs = sample_fs().await;
        let result = WriteCommand
            .execute(make_ctx(vec!["a.txt", "hello", "world"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.cat("a.txt", None).unwrap(), "hello world");
    }

    #[tokio::test]
    async fn test_write_empty_content() {
        let fs = sample_fs().await;
        WriteCommand.execute(make_ctx(vec!["a.txt"], fs.clone())).await;
        assert_eq!(fs.read().await.cat("a.txt", None).unwrap(), "");
    }

    #[tokio::test]
    async fn test_write_protected_needs_no_password() {
        let fs = sample_fs().await;
        let result = WriteCommand
            .execute(make_ctx(vec!["s.txt", "new"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.cat("s.txt", Some("pw")).unwrap(), "new");
    }

    #[tokio::test]
    async fn test_write_folder_fails() {
        let fs = sample_fs().await;
        let result = WriteCommand.execute(make_ctx(vec!["docs", "x"], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("not a file"));
    }

    #[tokio::test]
    async fn test_write_missing_operand() {
        let fs = sample_fs().await;
        let result = WriteCommand.execute(make_ctx(vec![], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("missing operand"));
    }
}
