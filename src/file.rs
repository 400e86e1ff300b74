use crate::dir::Dir;
use crate::error::{FileQueryError, Result};
use crate::file_like::FileLike;
use crate::file_size::FileSize;
use crate::options::Encoding;
use crate::paths::{expand_path, file_exists, file_like_exists, file_like_name};
use crate::text_file::TextFile;
use chrono::{DateTime, Local};
use std::fmt;
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
/// Number of leading bytes inspected by [`File::is_binary`].
const SNIFF_LEN: u64 = 4096;
/// A regular file.
///
/// Only the path is stored. Size, timestamps and content are read from disk
/// on every call, so they always reflect the current state of the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
    name: String,
}
impl File {
    /// Fails unless a regular file exists at the expanded `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = expand_path(path)?;
        if !file_exists(&path) {
            return Err(if file_like_exists(&path) {
                FileQueryError::NotAFile(path)
            } else {
                FileQueryError::PathNotFound(path)
            });
        }
        let name = file_like_name(&path);
        Ok(Self { path, name })
    }
    /// The raw content of the file.
    pub fn bytes(&self) -> Result<Vec<u8>> {
        read_bytes(&self.path)
    }
    /// The directory containing this file.
    pub fn dir(&self) -> Result<Dir> {
        Dir::new(self.path.parent().unwrap_or(&self.path))
    }
    /// The extension without the leading dot, or an empty string if there is none.
    ///
    /// `archive.tar.gz` has the extension `gz`; `.bashrc` has none.
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
    pub fn size(&self) -> Result<FileSize> {
        Ok(FileSize::new(self.metadata()?.len()))
    }
    /// The last access time.
    pub fn access_time(&self) -> Result<DateTime<Local>> {
        let accessed = self
            .metadata()?
            .accessed()
            .map_err(|e| FileQueryError::io(&self.path, e))?;
        Ok(DateTime::from(accessed))
    }
    /// The last modification time.
    pub fn mod_time(&self) -> Result<DateTime<Local>> {
        let modified = self
            .metadata()?
            .modified()
            .map_err(|e| FileQueryError::io(&self.path, e))?;
        Ok(DateTime::from(modified))
    }
    /// Whether the first bytes of the file look like binary data.
    pub fn is_binary(&self) -> Result<bool> {
        let file = fs::File::open(&self.path).map_err(|e| FileQueryError::io(&self.path, e))?;
        let mut first_chunk = Vec::with_capacity(SNIFF_LEN as usize);
        BufReader::new(file)
            .take(SNIFF_LEN)
            .read_to_end(&mut first_chunk)
            .map_err(|e| FileQueryError::io(&self.path, e))?;
        Ok(content_inspector::inspect(&first_chunk).is_binary())
    }
    /// A UTF-8 text view of this file.
    ///
    /// The content is not checked here. A file that is not valid text fails
    /// when its content is first read.
    pub fn text_file(&self) -> TextFile {
        self.text_file_with(Encoding::default())
    }
    pub fn t(&self) -> TextFile {
        self.text_file()
    }
    pub fn text_file_with(&self, encoding: Encoding) -> TextFile {
        TextFile::from_file(self.clone(), encoding)
    }
    fn metadata(&self) -> Result<fs::Metadata> {
        fs::metadata(&self.path).map_err(|e| FileQueryError::io(&self.path, e))
    }
}
impl FileLike for File {
    fn path(&self) -> &Path {
        &self.path
    }
    fn name(&self) -> &str {
        &self.name
    }
}
impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File(\"{}\")", self.path.display())
    }
}
/// Read a whole file. The handle is closed before returning.
pub(crate) fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let file = fs::File::open(path).map_err(|e| FileQueryError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| FileQueryError::io(path, e))?;
    Ok(content)
}
