// src/commands/sed/mod.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct SedCommand;

/// Parse the one supported script form, `Nd` with a one-based line number.
fn parse_delete_script(script: &str) -> Option<usize> {
    let number = script.strip_suffix('d')?;
    let line: usize = number.parse().ok()?;
    if line == 0 {
        return None;
    }
    Some(line - 1)
}

#[async_trait]
impl Command for SedCommand {
    fn name(&self) -> &'static str {
        "sed"
    }

    async fn execute(&self, ctx: CommandContext) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: sed Nd FILE...\n\n\
                 Delete line N (one-based) from FILE(s) in place. Addresses\n\
                 past the end of a file leave it unchanged. Only the `Nd`\n\
                 script form is supported.\n\n\
                 Options:\n\
                     --help       display this help and exit\n"
                    .to_string(),
            );
        }

        let operands: Vec<&String> = ctx.args.iter().filter(|a| !a.starts_with('-')).collect();
        let (script, files) = match operands.split_first() {
            Some((script, files)) if !files.is_empty() => (script.as_str(), files),
            _ => return CommandResult::error("sed: missing operand\n".to_string()),
        };

        let index = match parse_delete_script(script) {
            Some(index) => index,
            None => {
                return CommandResult::error(format!("sed: unsupported script '{}'\n", script))
            }
        };

        let mut stderr = String::new();
        let mut exit_code = 0;
        let mut fs = ctx.fs.write().await;

        for file in files {
            if let Err(e) = fs.delete_line(file.as_str(), index) {
                stderr.push_str(&format!("sed: {}\n", e));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
