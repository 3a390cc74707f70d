//! memsh - an in-memory filesystem shell
//!
//! This library provides a simulated hierarchical filesystem (folders and
//! text files with optional password protection) plus a small shell-style
//! command surface on top of it. Nothing touches the real disk.

pub mod commands;
pub mod fs;
pub mod shell;

pub use fs::{File, Folder, FsError, InMemoryFs, Node};
pub use shell::{ExecResult, Shell, ShellOptions};
