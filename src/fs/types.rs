//! File System Types
//!
//! Core node types and errors for the virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or folder, {operation} '{path}'")]
    NotFound { path: String, operation: String },

    #[error("EEXIST: name already exists, {operation} '{path}'")]
    AlreadyExists { path: String, operation: String },

    #[error("ENOTDIR: not a folder, {operation} '{path}'")]
    NotAFolder { path: String, operation: String },

    #[error("EISDIR: not a file, {operation} '{path}'")]
    NotAFile { path: String, operation: String },

    #[error("EISDIR: source is not a file, {operation} '{path}'")]
    SourceNotAFile { path: String, operation: String },

    #[error("EACCES: permission denied, {operation} '{path}'")]
    PermissionDenied { path: String, operation: String },

    #[error("EINVAL: invalid argument, {operation} '{path}'")]
    InvalidArgument { path: String, operation: String },
}

impl FsError {
    pub fn not_found(path: &str, operation: &str) -> Self {
        FsError::NotFound {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn already_exists(path: &str, operation: &str) -> Self {
        FsError::AlreadyExists {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn not_a_folder(path: &str, operation: &str) -> Self {
        FsError::NotAFolder {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn not_a_file(path: &str, operation: &str) -> Self {
        FsError::NotAFile {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn source_not_a_file(path: &str, operation: &str) -> Self {
        FsError::SourceNotAFile {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn permission_denied(path: &str, operation: &str) -> Self {
        FsError::PermissionDenied {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }

    pub fn invalid_argument(path: &str, operation: &str) -> Self {
        FsError::InvalidArgument {
            path: path.to_string(),
            operation: operation.to_string(),
        }
    }
}

/// A text file with optional password protection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    content: String,
    password: Option<String>,
}

impl File {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            password: None,
        }
    }

    pub fn with_content(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            password: None,
        }
    }

    pub fn protected(
        name: impl Into<String>,
        content: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            password: Some(password.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    /// A file is protected when it carries a password, even an empty one.
    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Read the content. Protected files require an exact password match.
    pub fn read(&self, password: Option<&str>) -> Result<&str, FsError> {
        if let Some(expected) = &self.password {
            if password != Some(expected.as_str()) {
                return Err(FsError::permission_denied(&self.name, "read"));
            }
        }
        Ok(&self.content)
    }

    /// Replace the content. Deliberately not password-gated.
    pub fn write(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }

    /// Delete the zero-based `index`-th line and rejoin with `\n`.
    /// Out-of-range indices leave the content untouched.
    pub fn delete_line(&mut self, index: usize) {
        let mut lines: Vec<&str> = self.content.lines().collect();
        if index >= lines.len() {
            return;
        }
        lines.remove(index);
        self.content = lines.join("\n");
    }

    /// Case-sensitive substring test on the content. Not password-gated.
    pub fn search(&self, keyword: &str) -> bool {
        self.content.contains(keyword)
    }
}

/// A folder holding named files and subfolders.
///
/// Child names are unique; listing follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Folder {
    name: String,
    children: IndexMap<String, Node>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert a child under its own name.
    pub fn add(&mut self, node: Node) -> Result<(), FsError> {
        if self.children.contains_key(node.name()) {
            return Err(FsError::already_exists(node.name(), "add"));
        }
        self.children.insert(node.name().to_string(), node);
        Ok(())
    }

    /// Detach and return the named child.
    pub fn remove(&mut self, name: &str) -> Result<Node, FsError> {
        self.children
            .shift_remove(name)
            .ok_or_else(|| FsError::not_found(name, "remove"))
    }

    pub fn find(&self, name: &str) -> Result<&Node, FsError> {
        self.children
            .get(name)
            .ok_or_else(|| FsError::not_found(name, "find"))
    }

    /// Child names in insertion order.
    pub fn list_items(&self) -> Vec<String> {
        self.children.keys().cloned().collect()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }
}

/// A node in the tree: either a file or a folder.
#[derive(Debug, Clone)]
pub enum Node {
    File(File),
    Folder(Folder),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(file) => file.name(),
            Node::Folder(folder) => folder.name(),
        }
    }

    pub(crate) fn set_name(&mut self, name: String) {
        match self {
            Node::File(file) => file.set_name(name),
            Node::Folder(folder) => folder.set_name(name),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

// ============================================================================
// Tests
// ============================================================================
