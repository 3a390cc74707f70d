// src/commands/rm/mod.rs
use async_trait::async_trait;

use crate::commands::types::split_password_args;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: rm [-p PASSWORD] PATH...\n\n\
                 Remove file(s) or folder(s). Removing a folder detaches its\n\
                 whole subtree. If the current folder is removed the cursor\n\
                 resets to the root.\n\n\
                 Options:\n\
                   -p PASSWORD  password for protected files\n\
                       --help   display this help and exit\n"
                    .to_string(),
            );
        }

        let (password, paths) = split_password_args(&ctx.args);
        if paths.is_empty() {
            return CommandResult::error("rm: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut fs = ctx.fs.write().await;

        for path in &paths {
            if let Err(e) = fs.rm(path, password.as_deref()) {
                stderr.push_str(&format!("rm: {}\n", e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
