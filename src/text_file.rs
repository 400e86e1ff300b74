use crate::error::{FileQueryError, Result};
use crate::file::{File, read_bytes};
use crate::file_like::FileLike;
use crate::functional::FunctionalIterator;
use crate::options::Encoding;
use std::fmt;
use std::path::Path;
#[cfg(feature = "logging")]
use tracing;
/// A regular file read as text.
///
/// Nothing is cached: every accessor reads and decodes the file again, so
/// two calls can disagree if the file changes in between.
#[derive(Debug, Clone)]
pub struct TextFile {
    file: File,
    encoding: Encoding,
}
impl TextFile {
    /// A UTF-8 text file. Fails unless a regular file exists at `path`.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_encoding(path, Encoding::default())
    }
    pub fn with_encoding(path: impl AsRef<Path>, encoding: Encoding) -> Result<Self> {
        Ok(Self::from_file(File::new(path)?, encoding))
    }
    pub(crate) fn from_file(file: File, encoding: Encoding) -> Self {
        Self { file, encoding }
    }
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
    /// The underlying regular file, for size, timestamps and extension.
    pub fn as_file(&self) -> &File {
        &self.file
    }
    pub fn into_file(self) -> File {
        self.file
    }
    /// The decoded content, with `\r\n` and lone `\r` line endings turned into `\n`.
    pub fn content(&self) -> Result<String> {
        let bytes = read_bytes(self.file.path())?;
        let text = match self.encoding {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|source| {
                #[cfg(feature = "logging")]
                tracing::debug!("Not valid UTF-8: {}", self.file.path().display());
                FileQueryError::Decode {
                    path: self.file.path().to_path_buf(),
                    source,
                }
            }),
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }?;
        Ok(normalize_newlines(text))
    }
    /// The lines of the file, each keeping its trailing `\n` if it has one.
    pub fn lines(&self) -> Result<FunctionalIterator<'static, String>> {
        let lines: Vec<String> = self
            .content()?
            .split_inclusive('\n')
            .map(str::to_owned)
            .collect();
        Ok(FunctionalIterator::new(lines))
    }
    /// The whitespace-separated words of the file.
    pub fn words(&self) -> Result<FunctionalIterator<'static, String>> {
        let words: Vec<String> = self
            .content()?
            .split_whitespace()
            .map(str::to_owned)
            .collect();
        Ok(FunctionalIterator::new(words))
    }
    pub fn char_count(&self) -> Result<usize> {
        Ok(self.content()?.chars().count())
    }
    pub fn word_count(&self) -> Result<usize> {
        self.words()?.len()
    }
    pub fn line_count(&self) -> Result<usize> {
        self.lines()?.len()
    }
    /// Lines that are empty or contain only whitespace.
    pub fn blank_line_count(&self) -> Result<usize> {
        self.lines()?.filter(|line| line.trim().is_empty()).len()
    }
}
impl FileLike for TextFile {
    fn path(&self) -> &Path {
        self.file.path()
    }
    fn name(&self) -> &str {
        self.file.name()
    }
}
impl PartialEq for TextFile {
    fn eq(&self, other: &Self) -> bool {
        self.file == other.file
    }
}
impl Eq for TextFile {}
impl fmt::Display for TextFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TextFile(\"{}\")", self.file.path().display())
    }
}
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
/// A lazy sequence of text files.
pub type TextFileIterator<'a> = FunctionalIterator<'a, TextFile>;
impl<'a> FunctionalIterator<'a, TextFile> {
    /// Character count of every file. A file that cannot be decoded fails
    /// when its element is pulled.
    pub fn map_char_count(self) -> FunctionalIterator<'a, usize> {
        self.try_map(|file| file.char_count())
    }
    pub fn map_word_count(self) -> FunctionalIterator<'a, usize> {
        self.try_map(|file| file.word_count())
    }
    pub fn map_line_count(self) -> FunctionalIterator<'a, usize> {
        self.try_map(|file| file.line_count())
    }
    pub fn map_blank_line_count(self) -> FunctionalIterator<'a, usize> {
        self.try_map(|file| file.blank_line_count())
    }
}
