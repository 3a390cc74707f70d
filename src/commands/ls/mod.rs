// src/commands/ls/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: ls [PATH]\n\n\
                 List folder contents in insertion order.\n\
                 Without PATH, lists the current folder.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let paths: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        let fs = ctx.fs.read().await;

        let items = match paths.first() {
            None => fs.ls(),
            Some(path) => fs.list_dir(path.as_str()),
        };

        match items {
            Ok(items) => {
                let mut stdout = items.join("\n");
                if !stdout.is_empty() {
                    stdout.push('\n');
                }
                CommandResult::success(stdout)
            }
            Err(e) => CommandResult::error(format!("ls: {}\n", e)),
        }
    }
}
