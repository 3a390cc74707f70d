// src/commands/help_cmd.rs
use async_trait::async_trait;

use crate::commands::{Command, CommandContext, CommandResult};

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, _ctx: CommandContext) -> CommandResult {
        CommandResult::success(
            "memsh, an in-memory filesystem shell. Commands:\n\n\
             \x20 mkdir NAME...                create folder(s) here\n\
             \x20 touch [-p PASSWORD] NAME...  create (protected) file(s) here\n\
             \x20 ls [PATH]                    list folder contents\n\
             \x20 cd PATH                      change folder (`..` jumps to the root)\n\
             \x20 pwd                          print the current folder\n\
             \x20 cat [-p PASSWORD] FILE...    print file content\n\
             \x20 write FILE [TEXT]...         replace file content\n\
             \x20 grep KEYWORD FILE...         test files for a substring\n\
             \x20 sed Nd FILE...               delete line N from file(s)\n\
             \x20 mv [-p PASSWORD] SRC DEST    move or rename\n\
             \x20 cp [-p PASSWORD] SRC DEST    copy a file\n\
             \x20 rm [-p PASSWORD] PATH...     remove files or folders\n\n\
             Run any command with --help for details.\n"
                .to_string(),
        )
    }
}
