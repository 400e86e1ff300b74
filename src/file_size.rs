use crate::error::{FileQueryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
/// Unit used to render a [`FileSize`].
///
/// `Kb`..`Tb` are powers of 1000, `Kib`..`Tib` powers of 1024. `Auto` picks
/// the largest decimal unit that does not exceed the size, so the rendered
/// value is never below 1: 500 bytes is `500B`, not `0.5KB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSizeUnit {
    #[default]
    Auto,
    Byte,
    Kb,
    Mb,
    Gb,
    Tb,
    Kib,
    Mib,
    Gib,
    Tib,
}
impl FileSizeUnit {
    /// Bytes per unit. `None` for `Auto`.
    pub fn factor(self) -> Option<u64> {
        match self {
            FileSizeUnit::Auto => None,
            FileSizeUnit::Byte => Some(1),
            FileSizeUnit::Kb => Some(1_000),
            FileSizeUnit::Mb => Some(1_000_000),
            FileSizeUnit::Gb => Some(1_000_000_000),
            FileSizeUnit::Tb => Some(1_000_000_000_000),
            FileSizeUnit::Kib => Some(1 << 10),
            FileSizeUnit::Mib => Some(1 << 20),
            FileSizeUnit::Gib => Some(1 << 30),
            FileSizeUnit::Tib => Some(1 << 40),
        }
    }
    /// The unit symbol, e.g. `KiB`. `Auto` has none.
    pub fn symbol(self) -> Result<&'static str> {
        match self {
            FileSizeUnit::Auto => Err(FileQueryError::InvalidUnit(
                "Auto has no string representation".into(),
            )),
            FileSizeUnit::Byte => Ok("B"),
            FileSizeUnit::Kb => Ok("KB"),
            FileSizeUnit::Mb => Ok("MB"),
            FileSizeUnit::Gb => Ok("GB"),
            FileSizeUnit::Tb => Ok("TB"),
            FileSizeUnit::Kib => Ok("KiB"),
            FileSizeUnit::Mib => Ok("MiB"),
            FileSizeUnit::Gib => Ok("GiB"),
            FileSizeUnit::Tib => Ok("TiB"),
        }
    }
}
/// A size in bytes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FileSize(u64);
impl FileSize {
    pub fn new(bytes: u64) -> Self {
        Self(bytes)
    }
    pub fn bytes(self) -> u64 {
        self.0
    }
    fn resolve(self, unit: FileSizeUnit) -> FileSizeUnit {
        if unit != FileSizeUnit::Auto {
            return unit;
        }
        [
            FileSizeUnit::Tb,
            FileSizeUnit::Gb,
            FileSizeUnit::Mb,
            FileSizeUnit::Kb,
        ]
        .into_iter()
        .find(|u| u.factor().is_some_and(|factor| self.0 >= factor))
        .unwrap_or(FileSizeUnit::Byte)
    }
    /// The size expressed in `unit`.
    pub fn size_f(self, unit: FileSizeUnit) -> f64 {
        let factor = self.resolve(unit).factor().unwrap_or(1);
        self.0 as f64 / factor as f64
    }
    /// The size in `unit`, rounded to `rounding` decimal places, followed by
    /// the unit symbol: `1.5KB`, `512B`.
    pub fn size(self, unit: FileSizeUnit, rounding: u32) -> String {
        let unit = self.resolve(unit);
        let scale = 10f64.powi(rounding as i32);
        let value = (self.size_f(unit) * scale).round() / scale;
        format!("{}{}", value, unit.symbol().unwrap_or("B"))
    }
}
impl fmt::Display for FileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.size(FileSizeUnit::Auto, 3))
    }
}
impl From<u64> for FileSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}
impl From<FileSize> for u64 {
    fn from(size: FileSize) -> Self {
        size.0
    }
}
impl Add for FileSize {
    type Output = FileSize;
    fn add(self, other: FileSize) -> FileSize {
        FileSize(self.0 + other.0)
    }
}
impl Sum for FileSize {
    fn sum<I: Iterator<Item = FileSize>>(iter: I) -> Self {
        iter.fold(FileSize::default(), Add::add)
    }
}
