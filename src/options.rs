use serde::{Deserialize, Serialize};
/// Text encoding used when a [`TextFile`](crate::TextFile) reads its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    /// Strict UTF-8. Invalid byte sequences fail with a decode error.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}
/// Configuration for a directory-tree walk.
///
/// The defaults behave like a plain recursive directory listing: hidden
/// entries are included, ignore files are not consulted and depth is
/// unlimited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkOptions {
    pub include_hidden: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
}
impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            include_hidden: true,
            respect_gitignore: false,
            max_depth: None,
        }
    }
}
impl WalkOptions {
    pub fn builder() -> WalkOptionsBuilder {
        WalkOptionsBuilder::default()
    }
}
#[derive(Debug, Default)]
pub struct WalkOptionsBuilder {
    options: WalkOptions,
}
impl WalkOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn include_hidden(mut self, yes: bool) -> Self {
        self.options.include_hidden = yes;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    /// Limit how deep the walk descends. `0` visits the root directory only.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn build(self) -> WalkOptions {
        self.options
    }
}
