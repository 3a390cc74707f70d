// src/commands/mod.rs
pub mod cat;
pub mod cd;
pub mod cp;
pub mod grep;
pub mod help_cmd;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod pwd;
pub mod registry;
pub mod rm;
pub mod sed;
pub mod touch;
pub mod types;
pub mod write;

pub use registry::{create_registry, register_all, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
