// src/commands/touch/mod.rs
use async_trait::async_trait;

use crate::commands::types::split_password_args;
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::File;

pub struct TouchCommand;

#[async_trait]
impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: touch [-p PASSWORD] NAME...\n\n\
                 Create empty file(s) in the current folder.\n\n\
                 Options:\n\
                   -p PASSWORD  protect the new file(s) with PASSWORD\n\
                       --help   display this help and exit\n"
                    .to_string(),
            );
        }

        let (password, names) = split_password_args(&ctx.args);
        if names.is_empty() {
            return CommandResult::error("touch: missing operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut fs = ctx.fs.write().await;

        for name in &names {
            let file = match &password {
                Some(pw) => File::protected(name.clone(), "", pw.clone()),
                None => File::new(name.clone()),
            };
            if let Err(e) = fs.create_file(file) {
                stderr.push_str(&format!("touch: cannot create file '{}': {}\n", name, e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
