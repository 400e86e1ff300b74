use crate::dir::Dir;
use crate::error::{FileQueryError, Result};
use crate::file::File;
use crate::file_like::FileLikeEntity;
use crate::options::WalkOptions;
use ignore::WalkBuilder;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
/// Which entities a [`FileTreeWalk`] yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkKind {
    Both,
    FilesOnly,
    DirsOnly,
}
impl WalkKind {
    fn yields_dirs(self) -> bool {
        matches!(self, WalkKind::Both | WalkKind::DirsOnly)
    }
    fn yields_files(self) -> bool {
        matches!(self, WalkKind::Both | WalkKind::FilesOnly)
    }
}
/// The direct children of one directory.
#[derive(Debug)]
pub(crate) struct DirListing {
    pub path: PathBuf,
    pub dirs: Vec<PathBuf>,
    pub files: Vec<OsString>,
}
/// Top-down recursive listing: yields one [`DirListing`] per directory,
/// parents before children, siblings in name order.
pub(crate) struct DirListings {
    stack: Vec<(PathBuf, usize)>,
    options: WalkOptions,
}
impl DirListings {
    pub(crate) fn new(root: impl Into<PathBuf>, options: WalkOptions) -> Self {
        Self {
            stack: vec![(root.into(), 0)],
            options,
        }
    }
    fn list(&self, dir: &Path) -> Result<DirListing> {
        let mut builder = WalkBuilder::new(dir);
        builder
            .standard_filters(false)
            .hidden(!self.options.include_hidden)
            .git_ignore(self.options.respect_gitignore)
            .git_exclude(self.options.respect_gitignore)
            .parents(self.options.respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .max_depth(Some(1))
            .sort_by_file_name(|a, b| a.cmp(b));
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for result in builder.build() {
            let entry = result.map_err(|e| FileQueryError::Walk(e.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_dir() {
                dirs.push(entry.into_path());
            } else if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                files.push(entry.file_name().to_os_string());
            }
        }
        Ok(DirListing {
            path: dir.to_path_buf(),
            dirs,
            files,
        })
    }
}
impl Iterator for DirListings {
    type Item = Result<DirListing>;
    fn next(&mut self) -> Option<Self::Item> {
        let (dir, depth) = self.stack.pop()?;
        let listing = match self.list(&dir) {
            Ok(listing) => listing,
            Err(e) => {
                self.stack.clear();
                return Some(Err(e));
            }
        };
        if self.options.max_depth.is_none_or(|max| depth < max) {
            for sub_dir in listing.dirs.iter().rev() {
                self.stack.push((sub_dir.clone(), depth + 1));
            }
        }
        Some(Ok(listing))
    }
}
/// Pre-order walk over a directory tree.
///
/// Each directory is yielded (if selected) right before its direct files in
/// name order; subdirectories follow, also in name order. Directories without
/// files, or with only subdirectories, are still visited.
pub(crate) struct FileTreeWalk {
    listings: DirListings,
    kind: WalkKind,
    current: PathBuf,
    pending: VecDeque<OsString>,
    dir_emitted: bool,
    exhausted: bool,
}
impl FileTreeWalk {
    pub(crate) fn new(root: &Path, kind: WalkKind, options: WalkOptions) -> Result<Self> {
        if !root.is_dir() {
            return Err(if root.exists() {
                FileQueryError::NotADirectory(root.to_path_buf())
            } else {
                FileQueryError::PathNotFound(root.to_path_buf())
            });
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Starting {:?} walk at {}", kind, root.display());
        let mut listings = DirListings::new(root, options);
        let first = listings
            .next()
            .ok_or_else(|| FileQueryError::NotADirectory(root.to_path_buf()))??;
        let mut walk = Self {
            listings,
            kind,
            current: PathBuf::new(),
            pending: VecDeque::new(),
            dir_emitted: false,
            exhausted: false,
        };
        walk.enter(first);
        Ok(walk)
    }
    fn enter(&mut self, listing: DirListing) {
        #[cfg(feature = "logging")]
        tracing::trace!("Entering {}", listing.path.display());
        let mut files = listing.files;
        files.sort();
        self.current = listing.path;
        self.pending = files.into();
        self.dir_emitted = false;
    }
    fn advance(&mut self) -> Option<Result<FileLikeEntity>> {
        loop {
            if !self.dir_emitted && self.kind.yields_dirs() {
                self.dir_emitted = true;
                return Some(Dir::new(&self.current).map(FileLikeEntity::Dir));
            }
            if self.kind.yields_files() {
                if let Some(name) = self.pending.pop_front() {
                    return Some(File::new(self.current.join(name)).map(FileLikeEntity::File));
                }
            }
            match self.listings.next()? {
                Ok(listing) => self.enter(listing),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
impl Iterator for FileTreeWalk {
    type Item = Result<FileLikeEntity>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.advance();
        match &item {
            None => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk finished");
                self.exhausted = true;
            }
            Some(Err(_e)) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Walk aborted: {}", _e);
                self.exhausted = true;
            }
            Some(Ok(_)) => {}
        }
        item
    }
}
