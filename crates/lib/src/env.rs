use core::ops::Range;
use std::fs::File;
use std::io::Read;

use anyhow::{anyhow, Context};

use crate::cli::LineCol;
use crate::input::{IStr, NL};

/// A byte index into the input being processed.
#[repr(transparent)]
#[derive(Debug, Clone, Copy)]
pub struct Size(usize);

impl Size {
    /// Default zero value.
    pub const ZERO: Self = Self(0);

    #[inline]
    pub(crate) fn usize_range(range: Range<Size>) -> Range<usize> {
        range.start.0..range.end.0
    }

    #[inline]
    pub(crate) fn new(n: usize) -> Self {
        Self(n)
    }

    #[inline]
    pub(crate) fn checked_add(self, b: Size) -> Option<Self> {
        Some(Self(self.0.checked_add(b.0)?))
    }

    #[inline]
    pub(crate) fn advance(&mut self, n: usize) {
        self.0 = self.0.saturating_add(n);
    }

    #[inline]
    pub(crate) fn saturating_add(self, n: Size) -> Self {
        Self(self.0.saturating_add(n.0))
    }
}

/// Get the line and column of the given span inside of the original input.
pub(crate) fn pos_from(data: &[u8], span: Range<Size>) -> LineCol {
    let span = Size::usize_range(span);

    let at = span.start.min(data.len());
    let head = data.get(..at).unwrap_or_default();

    let line = memchr::memchr_iter(NL, head).count();
    let start = at - memchr::memrchr(NL, head).map(|n| n + 1).unwrap_or_default();

    let end = match data.get(span) {
        Some(tail) => start.saturating_add(memchr::memchr(NL, tail).unwrap_or(tail.len())),
        None => start,
    };

    LineCol::new(line, start, end)
}

/// Input processing.
#[inline]
pub fn input(
    path: &'static str,
    read_path: &str,
    storage: &'static mut Vec<u8>,
) -> anyhow::Result<IStr> {
    return inner(read_path, storage).with_context(|| anyhow!(path));

    #[inline]
    fn inner(read_path: &str, storage: &'static mut Vec<u8>) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        *storage = buf;
        Ok(IStr::new(storage, Size::ZERO))
    }
}

/// Prepare an input processor.
///
/// This declares static storage for the processed input because it's much
/// easier to deal with than lifetimes and memory for it will be freed once the
/// process exits *anyway*.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        static mut STORAGE: Vec<u8> = Vec::new();
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);

        (
            $crate::env::input(path, read_path, unsafe { &mut STORAGE })?,
            path,
        )
    }};
}
