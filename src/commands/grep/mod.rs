// src/commands/grep/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct GrepCommand;

#[async_trait]
impl Command for GrepCommand {
    fn name(&self) -> &'static str {
        "grep"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: grep KEYWORD FILE...\n\n\
                 Exit with status 0 when any FILE contains KEYWORD as a\n\
                 case-sensitive substring, 1 otherwise. Prints nothing:\n\
                 content stays gated behind the file password.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let operands: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        let (keyword, files) = match operands.split_first() {
            Some((keyword, files)) if !files.is_empty() => (keyword.as_str(), files),
            _ => return CommandResult::error("grep: missing operand\n".to_string()),
        };

        let mut stderr = String::new();
        let mut found = false;
        let mut failed = false;
        let fs = ctx.fs.read().await;

        for file in files {
            match fs.search(file.as_str(), keyword) {
                Ok(true) => found = true,
                Ok(false) => {}
                Err(e) => {
                    stderr.push_str(&format!("grep: {}\n", e));
                    failed = true;
                }
            }
        }

        let exit_code = if failed {
            2
        } else if found {
            0
        } else {
            1
        };
        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
