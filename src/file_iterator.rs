//! Path- and name-aware combinators for lazy sequences of [`File`]s.
//!
//! All of them are `filter`/`map` compositions. Patterns are compiled once,
//! when the combinator is added, so an invalid pattern fails immediately
//! rather than on the first pull.

use crate::error::Result;
use crate::file::File;
use crate::file_like::FileLike;
use crate::file_size::FileSize;
use crate::functional::FunctionalIterator;
use crate::options::Encoding;
use crate::paths::{GlobPatterns, RegexPatterns, expand_paths, is_within_any};
use crate::text_file::TextFileIterator;
use std::path::{Path, PathBuf};

/// A lazy sequence of regular files.
pub type FileIterator<'a> = FunctionalIterator<'a, File>;

impl<'a> FunctionalIterator<'a, File> {
    /// Keep files whose extension is exactly `extension` (given without the dot).
    pub fn filter_extension(self, extension: &str) -> Self {
        let extension = extension.to_owned();
        self.filter(move |file| file.extension() == extension)
    }

    /// Keep files whose whole path matches the regular expression.
    pub fn filter_path_regex(self, regex: &str) -> Result<Self> {
        let patterns = RegexPatterns::new([regex])?;
        Ok(self.filter(move |file| patterns.is_match(&file.path().to_string_lossy())))
    }

    /// Keep files whose whole path matches the glob pattern.
    pub fn filter_path_glob(self, glob: &str) -> Result<Self> {
        let patterns = GlobPatterns::new([glob])?;
        Ok(self.filter(move |file| patterns.is_match(file.path())))
    }

    /// Keep files whose whole name matches the regular expression.
    pub fn filter_name(self, regex: &str) -> Result<Self> {
        let patterns = RegexPatterns::new([regex])?;
        Ok(self.filter(move |file| patterns.is_match(file.name())))
    }

    /// Drop files whose leading bytes look binary.
    pub fn filter_text(self) -> Self {
        self.try_filter(|file| Ok(!file.is_binary()?))
    }

    pub fn map_path(self) -> FunctionalIterator<'a, PathBuf> {
        self.map(|file| file.path().to_path_buf())
    }

    pub fn map_name(self) -> FunctionalIterator<'a, String> {
        self.map(|file| file.name().to_owned())
    }

    pub fn map_size(self) -> FunctionalIterator<'a, FileSize> {
        self.try_map(|file| file.size())
    }

    /// Keep files inside (or equal to) any of `base_paths`.
    ///
    /// Base paths are expanded up front. Containment is per path segment, so
    /// `/a/bb/x` is not inside `/a/b`.
    pub fn include<I, P>(self, base_paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let base_paths = expand_paths(base_paths)?;
        Ok(self.filter(move |file| is_within_any(file.path(), &base_paths)))
    }

    /// Drop files inside (or equal to) any of `base_paths`.
    pub fn exclude<I, P>(self, base_paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let base_paths = expand_paths(base_paths)?;
        Ok(self.filter(move |file| !is_within_any(file.path(), &base_paths)))
    }

    /// [`include`](Self::include) when `include` is true, otherwise [`exclude`](Self::exclude).
    pub fn include_or_exclude<I, P>(self, base_paths: I, include: bool) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        if include {
            self.include(base_paths)
        } else {
            self.exclude(base_paths)
        }
    }

    /// Keep files whose path matches any of the glob patterns.
    pub fn include_glob<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = GlobPatterns::new(patterns)?;
        Ok(self.filter(move |file| patterns.is_match(file.path())))
    }

    pub fn exclude_glob<I, S>(self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = GlobPatterns::new(patterns)?;
        Ok(self.filter(move |file| !patterns.is_match(file.path())))
    }

    pub fn include_or_exclude_glob<I, S>(self, patterns: I, include: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if include {
            self.include_glob(patterns)
        } else {
            self.exclude_glob(patterns)
        }
    }

    /// Keep files whose whole path matches any of the regular expressions.
    pub fn include_regex<I, S>(self, regexes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = RegexPatterns::new(regexes)?;
        Ok(self.filter(move |file| patterns.is_match(&file.path().to_string_lossy())))
    }

    pub fn exclude_regex<I, S>(self, regexes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = RegexPatterns::new(regexes)?;
        Ok(self.filter(move |file| !patterns.is_match(&file.path().to_string_lossy())))
    }

    pub fn include_or_exclude_regex<I, S>(self, regexes: I, include: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if include {
            self.include_regex(regexes)
        } else {
            self.exclude_regex(regexes)
        }
    }

    /// View every file as UTF-8 text. Content is not checked until a text
    /// accessor runs on the element.
    pub fn text_file_iterator(self) -> TextFileIterator<'a> {
        self.text_file_iterator_with(Encoding::default())
    }

    pub fn t(self) -> TextFileIterator<'a> {
        self.text_file_iterator()
    }

    pub fn text_file_iterator_with(self, encoding: Encoding) -> TextFileIterator<'a> {
        self.map(move |file| file.text_file_with(encoding))
    }
}
