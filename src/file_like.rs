use crate::dir::Dir;
use crate::file::File;
use std::fmt;
use std::path::Path;
/// Anything identified by an expanded absolute path: a regular file or a directory.
///
/// Two file-likes are equal when their paths are equal.
pub trait FileLike {
    /// The expanded absolute path.
    fn path(&self) -> &Path;
    /// The final path component.
    fn name(&self) -> &str;
}
/// A file-like produced by a tree walk that yields both files and directories.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileLikeEntity {
    File(File),
    Dir(Dir),
}
impl FileLikeEntity {
    pub fn is_file(&self) -> bool {
        matches!(self, FileLikeEntity::File(_))
    }
    pub fn is_dir(&self) -> bool {
        matches!(self, FileLikeEntity::Dir(_))
    }
    pub fn as_file(&self) -> Option<&File> {
        match self {
            FileLikeEntity::File(file) => Some(file),
            FileLikeEntity::Dir(_) => None,
        }
    }
    pub fn as_dir(&self) -> Option<&Dir> {
        match self {
            FileLikeEntity::Dir(dir) => Some(dir),
            FileLikeEntity::File(_) => None,
        }
    }
    pub fn into_file(self) -> Option<File> {
        match self {
            FileLikeEntity::File(file) => Some(file),
            FileLikeEntity::Dir(_) => None,
        }
    }
    pub fn into_dir(self) -> Option<Dir> {
        match self {
            FileLikeEntity::Dir(dir) => Some(dir),
            FileLikeEntity::File(_) => None,
        }
    }
}
impl FileLike for FileLikeEntity {
    fn path(&self) -> &Path {
        match self {
            FileLikeEntity::File(file) => file.path(),
            FileLikeEntity::Dir(dir) => dir.path(),
        }
    }
    fn name(&self) -> &str {
        match self {
            FileLikeEntity::File(file) => file.name(),
            FileLikeEntity::Dir(dir) => dir.name(),
        }
    }
}
impl fmt::Display for FileLikeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileLikeEntity::File(file) => fmt::Display::fmt(file, f),
            FileLikeEntity::Dir(dir) => fmt::Display::fmt(dir, f),
        }
    }
}
