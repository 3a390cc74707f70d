// src/commands/cd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: cd PATH\n\n\
                 Change the current folder. A leading `/` resolves from the\n\
                 root; `..` jumps back to the root.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let paths: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        let path = match paths.first() {
            Some(path) => path.as_str(),
            // Bare `cd` goes home, and home is the root here.
            None => "/",
        };

        let mut fs = ctx.fs.write().await;
        match fs.cd(path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("cd: {}\n", e)),
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
        fs.create_file(File::new("a.txt")).unwrap();
        Arc::new(RwLock::new(fs))
    }

    #[tokio::test]
    async fn test_cd_folder() {
        let fs = sample_fs().await;
        let result = CdCommand.execute(make_ctx(vec!["docs"], fs.clone())).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.pwd(), "/docs");
    }

    #[tokio::test]
    async fn test_cd_no_args_goes_to_root() {
        let fs = sample_fs().await;
        fs.write().await.cd("docs").unwrap();
        let result = CdCommand.execute(make_ctx(vec![], fs.clone())).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.pwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_dotdot_resets_to_root() {
        let fs = sample_fs().await;
        fs.write().await.cd("docs").unwrap();
        let result = CdCommand.execute(make_ctx(vec![".."], fs.clone())).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(fs.read().await.pwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_file_fails() {
        let fs = sample_fs().await;
        let result = CdCommand.execute(make_ctx(vec!["a.txt"], fs.clone())).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("not a folder"));
        assert_eq!(fs.read().await.pwd(), "/");
    }

    #[tokio::test]
    async fn test_cd_missing_fails() {
        let fs = sample_fs().await;
        let result = CdCommand.execute(make_ctx(vec!["nope"], fs)).await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("no such file or folder"));
    }
}
