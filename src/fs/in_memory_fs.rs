//! In-Memory File System Implementation
//!
//! A single-rooted tree of folders and files with a navigation cursor.
//! Paths use `/` as separator; a leading `/` resolves from the root,
//! anything else from the cursor. A `..` segment resets the in-progress
//! resolution to the root rather than stepping one level up.

use super::types::{File, Folder, FsError, Node};

/// In-memory virtual file system.
///
/// The cursor is a name-path from the root (empty for the root itself), so
/// deleting or moving a folder can never leave it dangling: `rm` of the
/// cursor's folder resets the cursor to the root, and `mv` makes it follow
/// the moved subtree.
pub struct InMemoryFs {
    root: Folder,
    cursor: Vec<String>,
}

impl InMemoryFs {
    /// Create a filesystem with an empty root, cursor at the root.
    pub fn new() -> Self {
        Self {
            root: Folder::new("root"),
            cursor: Vec::new(),
        }
    }

    /// Resolve a path to the canonical name-path of the node it denotes.
    ///
    /// Empty segments (leading, trailing, doubled slashes) are skipped.
    /// Descending through a file fails with `NotAFolder`.
    fn resolve(&self, path: &str, operation: &str) -> Result<Vec<String>, FsError> {
        let mut npath: Vec<String> = if path.starts_with('/') {
            Vec::new()
        } else {
            self.cursor.clone()
        };

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            if segment == ".." {
                // Literal reference behavior: jump to the root, not one level up.
                npath.clear();
                continue;
            }
            let folder = folder_at(&self.root, &npath, path, operation)?;
            if folder.get(segment).is_none() {
                return Err(FsError::not_found(path, operation));
            }
            npath.push(segment.to_string());
        }
        Ok(npath)
    }

    /// Create an empty folder under the cursor.
    pub fn mkdir(&mut self, name: &str) -> Result<(), FsError> {
        let folder = folder_at_mut(&mut self.root, &self.cursor, name, "mkdir")?;
        folder
            .add(Folder::new(name).into())
            .map_err(|_| FsError::already_exists(name, "mkdir"))
    }

    /// Add a file under the cursor.
    pub fn create_file(&mut self, file: File) -> Result<(), FsError> {
        let name = file.name().to_string();
        let folder = folder_at_mut(&mut self.root, &self.cursor, &name, "create")?;
        folder
            .add(file.into())
            .map_err(|_| FsError::already_exists(&name, "create"))
    }

    /// List the cursor folder's children in insertion order.
    pub fn ls(&self) -> Result<Vec<String>, FsError> {
        let folder = folder_at(&self.root, &self.cursor, ".", "ls")?;
        Ok(folder.list_items())
    }

    /// List the children of the folder at `path`.
    pub fn list_dir(&self, path: &str) -> Result<Vec<String>, FsError> {
        let npath = self.resolve(path, "ls")?;
        let folder = folder_at(&self.root, &npath, path, "ls")?;
        Ok(folder.list_items())
    }

    /// The cursor's absolute path, `/` for the root.
    pub fn pwd(&self) -> String {
        if self.cursor.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.cursor.join("/"))
        }
    }

    /// Move the cursor to the folder at `path`.
    pub fn cd(&mut self, path: &str) -> Result<(), FsError> {
        let npath = self.resolve(path, "cd")?;
        if !npath.is_empty() {
            let node = node_at(&self.root, &npath, path, "cd")?;
            if node.is_file() {
                return Err(FsError::not_a_folder(path, "cd"));
            }
        }
        self.cursor = npath;
        Ok(())
    }

    /// Read the content of the file at `path`.
    pub fn cat(&self, path: &str, password: Option<&str>) -> Result<String, FsError> {
        let npath = self.resolve(path, "cat")?;
        if npath.is_empty() {
            return Err(FsError::not_a_file(path, "cat"));
        }
        match node_at(&self.root, &npath, path, "cat")? {
            Node::File(file) => file
                .read(password)
                .map(str::to_string)
                .map_err(|_| FsError::permission_denied(path, "cat")),
            Node::Folder(_) => Err(FsError::not_a_file(path, "cat")),
        }
    }

    /// Replace the content of the file at `path`. Not password-gated.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let npath = self.resolve(path, "write")?;
        if npath.is_empty() {
            return Err(FsError::not_a_file(path, "write"));
        }
        match node_at_mut(&mut self.root, &npath, path, "write")? {
            Node::File(file) => {
                file.write(content);
                Ok(())
            }
            Node::Folder(_) => Err(FsError::not_a_file(path, "write")),
        }
    }

    /// Delete the zero-based `index`-th line of the file at `path`.
    /// Out-of-range indices are a no-op.
    pub fn delete_line(&mut self, path: &str, index: usize) -> Result<(), FsError> {
        let npath = self.resolve(path, "delete_line")?;
        if npath.is_empty() {
            return Err(FsError::not_a_file(path, "delete_line"));
        }
        match node_at_mut(&mut self.root, &npath, path, "delete_line")? {
            Node::File(file) => {
                file.delete_line(index);
                Ok(())
            }
            Node::Folder(_) => Err(FsError::not_a_file(path, "delete_line")),
        }
    }

    /// Whether the file at `path` contains `keyword` as a substring.
    pub fn search(&self, path: &str, keyword: &str) -> Result<bool, FsError> {
        let npath = self.resolve(path, "search")?;
        if npath.is_empty() {
            return Err(FsError::not_a_file(path, "search"));
        }
        match node_at(&self.root, &npath, path, "search")? {
            Node::File(file) => Ok(file.search(keyword)),
            Node::Folder(_) => Err(FsError::not_a_file(path, "search")),
        }
    }

    /// Move (or rename) the node at `src_path` to `dest_path`.
    ///
    /// The destination's last segment is the new name; the rest resolves to
    /// the destination folder (relative to the cursor when no `/` remains).
    /// Protected file sources require their password. The node is detached
    /// from its actual parent; nothing is mutated on any error path.
    pub fn mv(
        &mut self,
        src_path: &str,
        dest_path: &str,
        password: Option<&str>,
    ) -> Result<(), FsError> {
        let src_npath = self.resolve(src_path, "mv")?;
        let (parent_path, new_name) = split_dest(dest_path);
        if new_name.is_empty() || new_name == ".." {
            return Err(FsError::invalid_argument(dest_path, "mv"));
        }
        let dest_npath = self.resolve(parent_path, "mv")?;

        let (last, src_parent_npath) = match src_npath.split_last() {
            Some(split) => split,
            None => return Err(FsError::invalid_argument(src_path, "mv")),
        };

        let src_node = node_at(&self.root, &src_npath, src_path, "mv")?;
        check_password(src_node, password, src_path, "mv")?;
        if src_node.is_folder() && dest_npath.starts_with(&src_npath) {
            // A folder cannot move into its own subtree.
            return Err(FsError::invalid_argument(dest_path, "mv"));
        }

        let dest_folder = folder_at(&self.root, &dest_npath, dest_path, "mv")?;
        if dest_folder.get(new_name).is_some() {
            return Err(FsError::already_exists(dest_path, "mv"));
        }

        let src_parent = folder_at_mut(&mut self.root, src_parent_npath, src_path, "mv")?;
        let mut node = src_parent.remove(last)?;
        node.set_name(new_name.to_string());
        let dest_folder = folder_at_mut(&mut self.root, &dest_npath, dest_path, "mv")?;
        dest_folder.add(node)?;

        if self.cursor.starts_with(&src_npath) {
            let mut cursor = dest_npath;
            cursor.push(new_name.to_string());
            cursor.extend_from_slice(&self.cursor[src_npath.len()..]);
            self.cursor = cursor;
        }
        Ok(())
    }

    /// Copy the file at `src_path` to `dest_path`.
    ///
    /// The copy is independent of the source and keeps its password.
    pub fn cp(
        &mut self,
        src_path: &str,
        dest_path: &str,
        password: Option<&str>,
    ) -> Result<(), FsError> {
        let src_npath = self.resolve(src_path, "cp")?;
        if src_npath.is_empty() {
            return Err(FsError::source_not_a_file(src_path, "cp"));
        }
        let (parent_path, new_name) = split_dest(dest_path);
        if new_name.is_empty() || new_name == ".." {
            return Err(FsError::invalid_argument(dest_path, "cp"));
        }
        let dest_npath = self.resolve(parent_path, "cp")?;

        let src_file = match node_at(&self.root, &src_npath, src_path, "cp")? {
            Node::File(file) => file,
            Node::Folder(_) => return Err(FsError::source_not_a_file(src_path, "cp")),
        };
        if src_file.is_protected() && src_file.password() != password {
            return Err(FsError::permission_denied(src_path, "cp"));
        }
        let mut copy = src_file.clone();
        copy.set_name(new_name.to_string());

        let dest_folder = folder_at_mut(&mut self.root, &dest_npath, dest_path, "cp")?;
        if dest_folder.get(new_name).is_some() {
            return Err(FsError::already_exists(dest_path, "cp"));
        }
        dest_folder.add(copy.into())
    }

    /// Remove the node at `path` from its actual parent.
    ///
    /// Protected files require their password. If the cursor pointed at or
    /// under the removed node it resets to the root.
    pub fn rm(&mut self, path: &str, password: Option<&str>) -> Result<(), FsError> {
        let npath = self.resolve(path, "rm")?;
        let (last, parent_npath) = match npath.split_last() {
            Some(split) => split,
            None => return Err(FsError::invalid_argument(path, "rm")),
        };

        let node = node_at(&self.root, &npath, path, "rm")?;
        check_password(node, password, path, "rm")?;

        let parent = folder_at_mut(&mut self.root, parent_npath, path, "rm")?;
        parent.remove(last)?;

        if self.cursor.starts_with(&npath) {
            self.cursor.clear();
        }
        Ok(())
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tree lookup helpers (free functions walking from the root)
// ============================================================================

fn folder_at<'a>(
    root: &'a Folder,
    npath: &[String],
    path: &str,
    operation: &str,
) -> Result<&'a Folder, FsError> {
    let mut folder = root;
    for name in npath {
        match folder.get(name) {
            Some(Node::Folder(next)) => folder = next,
            Some(Node::File(_)) => return Err(FsError::not_a_folder(path, operation)),
            None => return Err(FsError::not_found(path, operation)),
        }
    }
    Ok(folder)
}

fn folder_at_mut<'a>(
    root: &'a mut Folder,
    npath: &[String],
    path: &str,
    operation: &str,
) -> Result<&'a mut Folder, FsError> {
    let mut folder = root;
    for name in npath {
        match folder.get_mut(name) {
            Some(Node::Folder(next)) => folder = next,
            Some(Node::File(_)) => return Err(FsError::not_a_folder(path, operation)),
            None => return Err(FsError::not_found(path, operation)),
        }
    }
    Ok(folder)
}

fn node_at<'a>(
    root: &'a Folder,
    npath: &[String],
    path: &str,
    operation: &str,
) -> Result<&'a Node, FsError> {
    let (last, parent) = match npath.split_last() {
        Some(split) => split,
        None => return Err(FsError::invalid_argument(path, operation)),
    };
    let folder = folder_at(root, parent, path, operation)?;
    folder
        .get(last)
        .ok_or_else(|| FsError::not_found(path, operation))
}

fn node_at_mut<'a>(
    root: &'a mut Folder,
    npath: &[String],
    path: &str,
    operation: &str,
) -> Result<&'a mut Node, FsError> {
    let (last, parent) = match npath.split_last() {
        Some(split) => split,
        None => return Err(FsError::invalid_argument(path, operation)),
    };
    let folder = folder_at_mut(root, parent, path, operation)?;
    folder
        .get_mut(last)
        .ok_or_else(|| FsError::not_found(path, operation))
}

/// Split a destination path into (parent path, new name) on the last `/`.
/// No `/` means the parent is the cursor folder.
fn split_dest(dest: &str) -> (&str, &str) {
    match dest.rsplit_once('/') {
        Some((parent, name)) => (parent, name),
        None => ("", dest),
    }
}

fn check_password(
    node: &Node,
    password: Option<&str>,
    path: &str,
    operation: &str,
) -> Result<(), FsError> {
    if let Node::File(file) = node {
        if file.is_protected() && file.password() != password {
            return Err(FsError::permission_denied(path, operation));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
