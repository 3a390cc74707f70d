//! File System Module
//!
//! An in-memory tree of folders and files with optional per-file password
//! protection and a navigation cursor. Nothing is persisted.

pub mod in_memory_fs;
pub mod types;

pub use in_memory_fs::InMemoryFs;
pub use types::{File, Folder, FsError, Node};
