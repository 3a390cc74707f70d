// src/commands/mv/mod.rs
use async_trait::async_trait;

use crate::commands::types::split_password_args;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct MvCommand;

#[async_trait]
impl Command for MvCommand {
    fn name(&self) -> &'static str {
        "mv"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: mv [-p PASSWORD] SOURCE DEST\n\n\
                 Move or rename SOURCE to DEST. The last segment of DEST is\n\
                 the new name; the rest names the destination folder\n\
                 (the current folder when DEST has no `/`).\n\n\
                 Options:\n\
                   -p PASSWORD  password when SOURCE is a protected file\n\
                       --help   display this help and exit\n"
                    .to_string(),
            );
        }

        let (password, paths) = split_password_args(&ctx.args);
        if paths.len() != 2 {
            return CommandResult::error("mv: expected SOURCE and DEST operands\n".to_string());
        }

        let mut fs = ctx.fs.write().await;
        match fs.mv(&paths[0], &paths[1], password.as_deref()) {
            Ok(()) => CommandResult::success(String::new()),
            Err(e) => CommandResult::error(format!("mv: {}\n", e)),
        }
    }
}
