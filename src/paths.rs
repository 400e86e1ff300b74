//! Path helpers shared by the file-like entities and the file iterators.
//!
//! Everything here is stateless. Functions that expand paths return a
//! [`Result`] because relative inputs are resolved against the current
//! working directory, which can fail to be read.

use crate::error::{FileQueryError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::env;
use std::path::{Component, Path, PathBuf};

/// Returns `true` if a file or a directory exists at `path`.
pub fn file_like_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns `true` if a regular file exists at `path`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Returns `true` if a directory exists at `path`.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

pub fn path_is_absolute(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_absolute()
}

pub fn path_is_relative(path: impl AsRef<Path>) -> bool {
    !path_is_absolute(path)
}

/// The final component of `path`, or an empty string if there is none.
pub fn file_like_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Maximally expand a path.
///
/// A leading `~` is replaced by the home directory, `$VAR` and `${VAR}`
/// references are replaced by the value of the environment variable (unset
/// variables are left as they are), relative paths are made absolute against
/// the current directory and `.`/`..` segments are removed lexically.
///
/// The result does not depend on the path existing, and expanding an already
/// expanded path returns it unchanged. The exception is a variable whose value
/// itself contains a `$NAME` reference to a set variable: substitution is a
/// single pass, so a second expansion substitutes that inner reference too.
pub fn expand_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    let raw = path.as_ref().to_string_lossy();
    let expanded = PathBuf::from(expand_vars(&expand_home(&raw)));
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| FileQueryError::io(".", e))?;
        cwd.join(expanded)
    };
    Ok(normalize(&absolute))
}

pub fn expand_paths<I, P>(paths: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(expand_path).collect()
}

/// `path` relative to `base`, computed lexically after expanding both.
///
/// Walks up with `..` segments when `path` is not below `base`, and returns
/// `.` when both are the same.
pub fn relative_path(path: impl AsRef<Path>, base: impl AsRef<Path>) -> Result<PathBuf> {
    let path = expand_path(path)?;
    let base = expand_path(base)?;
    let common = path
        .components()
        .zip(base.components())
        .take_while(|(a, b)| a == b)
        .count();
    let mut relative = PathBuf::new();
    for _ in base.components().skip(common) {
        relative.push("..");
    }
    for component in path.components().skip(common) {
        relative.push(component.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        relative.push(".");
    }
    Ok(relative)
}

/// Check whether `path` lies inside (or is) one of `base_paths`.
///
/// Both sides are expanded first. Containment is decided segment by segment,
/// so `/a/bb` is not inside `/a/b`.
pub fn path_matches<I, P>(path: impl AsRef<Path>, base_paths: I) -> Result<bool>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let path = expand_path(path)?;
    let base_paths = expand_paths(base_paths)?;
    Ok(is_within_any(&path, &base_paths))
}

/// Glob match of the whole path against any of `patterns`.
///
/// `*` also matches `/`, so `*/a.txt` matches every `a.txt` in the tree.
pub fn path_matches_glob<I, S>(path: impl AsRef<Path>, patterns: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(GlobPatterns::new(patterns)?.is_match(path))
}

/// Regular-expression match of the whole path against any of `patterns`.
pub fn path_matches_regex<I, S>(path: impl AsRef<Path>, patterns: I) -> Result<bool>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(path_matches_compiled_regex(path, &RegexPatterns::new(patterns)?))
}

pub fn path_matches_compiled_regex(path: impl AsRef<Path>, regexes: &RegexPatterns) -> bool {
    regexes.is_match(&path.as_ref().to_string_lossy())
}

/// `base` is an ancestor of, or equal to, `path`. Both must already be expanded.
pub(crate) fn is_within(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

pub(crate) fn is_within_any(path: &Path, bases: &[PathBuf]) -> bool {
    bases.iter().any(|base| is_within(path, base))
}

/// A compiled set of shell-style glob patterns with any-match semantics.
#[derive(Debug, Clone)]
pub struct GlobPatterns {
    set: GlobSet,
}

impl GlobPatterns {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .literal_separator(false)
                .build()
                .map_err(|e| FileQueryError::pattern(pattern, e))?;
            builder.add(glob);
        }
        let set = builder
            .build()
            .map_err(|e| FileQueryError::pattern("<glob set>", e))?;
        Ok(Self { set })
    }

    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        self.set.is_match(path.as_ref())
    }
}

/// A compiled list of regular expressions, each of which must match the
/// entire input (not just a substring of it).
#[derive(Debug, Clone)]
pub struct RegexPatterns {
    regexes: Vec<Regex>,
}

impl RegexPatterns {
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{})$", pattern))
                    .map_err(|e| FileQueryError::pattern(pattern, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { regexes })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(text))
    }
}

fn expand_home(input: &str) -> String {
    if input == "~" || input.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return format!("{}{}", home.display(), &input[1..]);
        }
    }
    input.to_string()
}

fn expand_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(idx) = rest.find('$') {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];
        if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if end > 0 => {
                    let name = &braced[..end];
                    match env::var(name) {
                        Ok(value) => out.push_str(&value),
                        Err(_) => out.push_str(&rest[idx..idx + end + 3]),
                    }
                    rest = &braced[end + 1..];
                }
                _ => {
                    out.push('$');
                    rest = after;
                }
            }
            continue;
        }
        let len = after
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(after.len());
        if len == 0 {
            out.push('$');
            rest = after;
            continue;
        }
        let name = &after[..len];
        match env::var(name) {
            Ok(value) => out.push_str(&value),
            Err(_) => {
                out.push('$');
                out.push_str(name);
            }
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    out
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
