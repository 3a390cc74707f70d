// src/commands/cat/mod.rs
use async_trait::async_trait;

use crate::commands::types::split_password_args;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: cat [-p PASSWORD] FILE...\n\n\
                 Print the content of FILE(s).\n\n\
                 Options:\n\
                   -p PASSWORD  password for protected files\n\
                       --help   display this help and exit\n"
                    .to_string(),
            );
        }

        let (password, files) = split_password_args(&ctx.args);
        if files.is_empty() {
            return CommandResult::error("cat: missing operand\n".to_string());
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut exit_code = 0;
        let fs = ctx.fs.read().await;

        for file in &files {
            match fs.cat(file, password.as_deref()) {
                Ok(content) => {
                    stdout.push_str(&content);
                    if !content.is_empty() && !content.ends_with('\n') {
                        stdout.push('\n');
                    }
                }
                Err(e) => {
                    stderr.push_str(&format!("cat: {}\n", e));
                    exit_code = 1;
                }
            }
        }

        CommandResult::with_exit_code(stdout, stderr, exit_code)
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
        fs.mkdir("docs").unwrap();
        fs.cd("docs").unwrap();
        fs.create_file(File::with_content("file1.txt", "Hello, World!"))
            .unwrap();
        fs.create_file(File::protected("secret.txt", "classified", "hunter2"))
            .unwrap();
        fs.cd("..").unwrap();
        Arc::new(RwLock::new(fs))
    }

    #[tokio::test]
    async fn test_cat_file() {
        let fs = sample_fs().await;
        let result = CatCommand
            .execute(make_ctx(vec!["/docs/file1.txt"], fs))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "Hello, World!\n");
    }

    #[tokio::test]
    async fn test_cat_multiple_files() {
        let fs = sample_fs().await;
        fs.write().await.cd("docs").unwrap();
        let result = CatCommand
            .execute(make_ctx(vec!["-p", "hunter2", "file1.txt", "secret.txt"], fs))
            .await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "Hello, World!\nclassified\n");
    }

    #[tokio::test]
    async fn test_cat_protected_without_password() {
        let fs = sample_fs().await;
        let result = CatCommand
            .execute(make_ctx(vec!["/docs/secret.txt"], fs))
            .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_cat_protected_wrong_password() {
        let fs = sample_fs().await;
        let result = CatCommand
            .execute(make_ctx(vec!["-p", "nope", "/docs/secret.txt"], fs))
            .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("permission denied"));
    }

    #[tokio::test]
    async fn test_cat_folder_fails() {
        let fs = sample_fs().await;
        let result = CatCommand.execute(make_ctx(vec!["/docs"], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("not a file"));
    }

    #[tokio::test]
    async fn test_cat_missing_operand() {
        let fs = sample_fs().await;
        let result = CatCommand.execute(make_ctx(vec![], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("missing operand"));
    }
}
