// src/commands/cp/mod.rs
use async_trait::async_trait;

use crate::commands::types::split_password_args;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CpCommand;

#[async_trait]
impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: cp [-p PASSWORD] SOURCE DEST\n\n\
                 Copy the file SOURCE to DEST. The copy is independent of the\n\
                 source and keeps the source's password. Folders cannot be\n\
                 copied.\n\n\
                 Options:\n\
                   -p PASSWORD  password when SOURCE is a protected file\n\
                       --help   display this help and exit\n"
                    .to_string(),
            );
        }

        let (password, paths) = split_password_args(&ctx.args);
        if paths.len() != 2 {
            return CommandResult::error("cp: expected SOURCE and DEST operands\n".to_string());
        }

        let mut fs = ctx.fs.write().await;
        match fs.cp(&paths[0], &paths[1], password.as_deref()) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("cp: {}\n", e)),
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
        fs.mkdir("docs").unwrap();
        fs.create_file(File::with_content("a.txt", "hello")).unwrap();
        fs.create_file(File::protected("s.txt", "secret", "pw")).unwrap();
        Arc::new(RwLock::new(fs))
    }

    #[tokio::test]
    async fn test_cp_file() {
        let fs = sample_fs().await;
        let result = CpCommand
            .execute(make_ctx(vec!["a.txt", "docs/b.txt"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 0);
        let fs = fs.read().await;
        assert_eq!(fs.cat("a.txt", None).unwrap(), "hello");
        assert_eq!(fs.cat("/docs/b.txt", None).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_cp_copy_is_independent() {
        let fs = sample_fs().await;
        CpCommand
            .execute(make_ctx(vec!["a.txt", "b.txt"], fs.clone()))
            .await;
        fs.write().await.write_file("b.txt", "changed").unwrap();
        assert_eq!(fs.read().await.cat("a.txt", None).unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_cp_protected_requires_password() {
        let fs = sample_fs().await;
        let result = CpCommand
            .execute(make_ctx(vec!["s.txt", "docs/s.txt"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("permission denied"));

        let result = CpCommand
            .execute(make_ctx(vec!["-p", "pw", "s.txt", "docs/s.txt"], fs.clone()))
            .await;
        assert_eq!(result.exit_code, 0);
        // The copy keeps the password.
        assert!(fs.read().await.cat("/docs/s.txt", None).is_err());
    }

    #[tokio::test]
    async fn test_cp_folder_fails() {
        let fs = sample_fs().await;
        let result = CpCommand
            .execute(make_ctx(vec!["docs", "docs2"], fs))
            .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("source is not a file"));
    }

    #[tokio::test]
    async fn test_cp_wrong_arity() {
        let fs = sample_fs().await;
        let result = CpCommand.execute(make_ctx(vec!["a.txt"], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("expected SOURCE and DEST"));
    }
}
