//! File system port used by parsing and generation.
//!
//! Generation writes through [`FileSystem`] so tests can run against
//! [`MemoryFileSystem`] and inspect every produced file without touching disk.

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

/// Contract describing the file operations the generator needs.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Creates `path` and every missing parent directory.
    ///
    /// Implementors must succeed when the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// Implementors should fail with [`io::ErrorKind::NotFound`] when the
    /// parent directory does not exist.
    async fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Reads the whole file at `path` as UTF-8.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Disk-backed implementation over `tokio::fs`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        tokio::fs::write(path, contents.as_bytes()).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    directories: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

/// In-memory implementation with the same directory rules as a real disk.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    state: Mutex<MemoryState>,
}

impl MemoryFileSystem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a file, creating its parent directories.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        {
            let path = path.into();
            let mut state = self.guard();
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut state.directories, parent);
            }
            state.files.insert(path, contents.into());
        }
        self
    }

    /// Contents of the file at `path`, if any.
    #[must_use]
    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.guard().files.get(path.as_ref()).cloned()
    }

    /// Every stored file path, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.guard().files.keys().cloned().collect()
    }

    /// Snapshot of every file keyed by path.
    #[must_use]
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.guard().files.clone()
    }

    fn guard(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().expect("in-memory file system poisoned")
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        directories.insert(ancestor.to_path_buf());
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        insert_ancestors(&mut self.guard().directories, path);
        Ok(())
    }

    async fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let mut state = self.guard();
        let parent_exists = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => state.directories.contains(parent),
            _ => true,
        };
        if !parent_exists {
            return Err(not_found(path));
        }
        state.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.guard()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }
}
