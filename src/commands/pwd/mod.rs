// src/commands/pwd/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct PwdCommand;

#[async_trait]
impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: pwd\n\n\
                 Print the current folder's absolute path.\n"
                    .to_string(),
            );
        }

        let fs = ctx.fs.read().await;
        CommandResult::success(format!("{}\n", fs.pwd()))
    }
}
