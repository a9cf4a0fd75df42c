use std::fmt;
use std::io;

use crate::error::{Result, ZStringError};
use crate::iter::Bytes;

/// A mutable window into a `ZString`'s storage.
///
/// The window borrows the owner exclusively for its lifetime, so the owner
/// cannot be reallocated, reassigned, or dropped while the window is alive.
/// Mutations through the window (`reverse`, `replace`, `get_mut`) land in
/// the owner's storage and are visible through the owner afterward.
///
/// The window covers content cells only; no terminator is visible through
/// it or written by it.
pub struct ZSlice<'a> {
    data: &'a mut [u8],
}

impl<'a> ZSlice<'a> {
    pub(crate) fn new(data: &'a mut [u8]) -> Self {
        Self { data }
    }

    /// Number of cells visible through the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The visible cells.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    /// Reverses the window's cells in place, mutating the owner's storage.
    pub fn reverse(&mut self) {
        self.data.reverse();
    }

    /// Overwrites the window with `src`.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::LengthMismatch` if `src` is not exactly the
    /// window's length. The window is untouched on error.
    pub fn replace(&mut self, src: &[u8]) -> Result<()> {
        if src.len() != self.data.len() {
            return Err(ZStringError::LengthMismatch {
                expected: self.data.len(),
                replacement: src.len(),
            });
        }
        self.data.copy_from_slice(src);
        Ok(())
    }

    /// Gets the cell at `index` within the window.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::IndexOutOfBounds` if `index` is at or beyond
    /// the window length.
    pub fn get(&self, index: usize) -> Result<&u8> {
        let length = self.data.len();
        self.data
            .get(index)
            .ok_or(ZStringError::IndexOutOfBounds { index, length })
    }

    /// Gets the cell at `index` within the window for writing.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::IndexOutOfBounds` if `index` is at or beyond
    /// the window length.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut u8> {
        let length = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(ZStringError::IndexOutOfBounds { index, length })
    }

    /// Returns a cursor over the window's cells.
    #[must_use]
    pub fn iter(&self) -> Bytes<'_> {
        self.into_iter()
    }

    /// Writes the window's cells to `out`, in order. No terminator and no
    /// newline are written.
    ///
    /// # Errors
    ///
    /// From the underlying writer.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.data)
    }
}

impl fmt::Display for ZSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.data), f)
    }
}

impl fmt::Debug for ZSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZSlice({:?})", String::from_utf8_lossy(self.data))
    }
}
