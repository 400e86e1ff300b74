use crate::error::{FileQueryError, Result};
use crate::file::File;
use crate::file_iterator::FileIterator;
use crate::file_like::{FileLike, FileLikeEntity};
use crate::functional::FunctionalIterator;
use crate::options::WalkOptions;
use crate::paths::{dir_exists, expand_path, file_like_exists, file_like_name};
use crate::walk::{FileTreeWalk, WalkKind};
use std::fmt;
use std::path::{Path, PathBuf};
/// A directory, and the entry point for lazy queries over its subtree.
///
/// Every view walks the tree in pre-order: a directory, then its files in
/// name order, then its subdirectories in name order. Each call starts a
/// fresh walk; the returned sequence can be consumed once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dir {
    path: PathBuf,
    name: String,
}
impl Dir {
    /// Fails unless a directory exists at the expanded `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_path(path)?;
        if !dir_exists(&path) {
            return Err(if file_like_exists(&path) {
                FileQueryError::NotADirectory(path)
            } else {
                FileQueryError::PathNotFound(path)
            });
        }
        let name = file_like_name(&path);
        Ok(Self { path, name })
    }
    /// The regular file called `file_name` inside this directory.
    pub fn file(&self, file_name: impl AsRef<Path>) -> Result<File> {
        File::new(self.path.join(file_name))
    }
    /// The subdirectory called `subdir_name`.
    pub fn dir(&self, subdir_name: impl AsRef<Path>) -> Result<Dir> {
        Dir::new(self.path.join(subdir_name))
    }
    /// Every directory and regular file in the subtree, this directory first.
    pub fn file_likes(&self) -> Result<FunctionalIterator<'static, FileLikeEntity>> {
        self.file_likes_with(&WalkOptions::default())
    }
    pub fn file_likes_with(
        &self,
        options: &WalkOptions,
    ) -> Result<FunctionalIterator<'static, FileLikeEntity>> {
        let walk = FileTreeWalk::new(&self.path, WalkKind::Both, options.clone())?;
        Ok(FunctionalIterator::from_results(walk))
    }
    /// Every regular file in the subtree.
    pub fn files(&self) -> Result<FileIterator<'static>> {
        self.files_with(&WalkOptions::default())
    }
    pub fn files_with(&self, options: &WalkOptions) -> Result<FileIterator<'static>> {
        let walk = FileTreeWalk::new(&self.path, WalkKind::FilesOnly, options.clone())?;
        Ok(FunctionalIterator::from_results(
            walk.filter_map(|item| item.map(FileLikeEntity::into_file).transpose()),
        ))
    }
    /// Every directory in the subtree, including this one and empty ones.
    pub fn dirs(&self) -> Result<FunctionalIterator<'static, Dir>> {
        self.dirs_with(&WalkOptions::default())
    }
    pub fn dirs_with(&self, options: &WalkOptions) -> Result<FunctionalIterator<'static, Dir>> {
        let walk = FileTreeWalk::new(&self.path, WalkKind::DirsOnly, options.clone())?;
        Ok(FunctionalIterator::from_results(
            walk.filter_map(|item| item.map(FileLikeEntity::into_dir).transpose()),
        ))
    }
}
impl FileLike for Dir {
    fn path(&self) -> &Path {
        &self.path
    }
    fn name(&self) -> &str {
        &self.name
    }
}
impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dir(\"{}\")", self.path.display())
    }
}
