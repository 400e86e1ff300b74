#![allow(dead_code)]
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};
/// Build the standard fixture tree:
///
/// ```text
/// base/
///   a.txt        2 lines
///   b.txt        4 lines
///   c.txt2       1 line, 16 chars, 4 words
///   emptybin
///   rndbin1
///   sub_dir/
///     d.txt      6 lines
///     e.txt      8 lines, 2 of them blank
///     empty.txt
///     rndbin2
/// ```
pub fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::write(root.join("a.txt"), "one\ntwo\n").unwrap();
    fs::write(root.join("b.txt"), "1\n2\n3\n4\n").unwrap();
    fs::write(root.join("c.txt2"), "This is a test.\n").unwrap();
    fs::write(root.join("emptybin"), b"").unwrap();
    fs::write(root.join("rndbin1"), [0u8, 159, 146, 150, 255, 1, 2]).unwrap();
    let sub = root.join("sub_dir");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("d.txt"), "l1\nl2\nl3\nl4\nl5\nl6\n").unwrap();
    fs::write(sub.join("e.txt"), "a\n\nb\n  \nc\nd\ne\nf\n").unwrap();
    fs::write(sub.join("empty.txt"), "").unwrap();
    fs::write(sub.join("rndbin2"), [255u8, 0, 254, 0, 7]).unwrap();
    dir
}
pub fn path(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}
pub fn paths(root: &Path, relative: &[&str]) -> Vec<PathBuf> {
    relative.iter().map(|r| root.join(r)).collect()
}
pub const ALL_FILES: [&str; 9] = [
    "a.txt",
    "b.txt",
    "c.txt2",
    "emptybin",
    "rndbin1",
    "sub_dir/d.txt",
    "sub_dir/e.txt",
    "sub_dir/empty.txt",
    "sub_dir/rndbin2",
];
pub const TXT_FILES: [&str; 5] = [
    "a.txt",
    "b.txt",
    "sub_dir/d.txt",
    "sub_dir/e.txt",
    "sub_dir/empty.txt",
];
pub const NON_TXT_FILES: [&str; 4] = ["c.txt2", "emptybin", "rndbin1", "sub_dir/rndbin2"];
/// `path` relative to `root` as a `/`-separated string; the root itself is `""`.
pub fn rel(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap()
        .to_string_lossy()
        .replace('\\', "/")
}
