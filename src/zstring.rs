use std::fmt;
use std::io;

use crate::error::{Result, ZStringError};
use crate::iter::Bytes;
use crate::sentinel;
use crate::slice::ZSlice;

/// A growable byte string stored in a single exactly-sized allocation, with
/// a NUL terminator after the content.
///
/// Two invariants hold at all times: `capacity() >= len() + 1`, and the cell
/// at `len()` is the terminator. Growth is tight, not amortized: every
/// reallocation requests exactly the capacity it needs, so a loop of appends
/// pays a copy per growth event in exchange for a minimal footprint.
///
/// Cloning duplicates the allocation; two `ZString`s never share storage,
/// and each one releases exactly its own allocation on drop.
#[derive(Clone)]
pub struct ZString {
    buf: Box<[u8]>,
    len: usize,
}

impl ZString {
    /// Creates an empty buffer holding just the terminator (capacity 1).
    #[must_use]
    pub fn new() -> Self {
        ZString {
            buf: vec![sentinel::NUL; 1].into_boxed_slice(),
            len: 0,
        }
    }

    /// Creates a buffer from the content of `s`.
    ///
    /// Content runs to the first NUL in `s`, or all of `s` if it has none.
    /// The allocation is exactly the content length plus the terminator.
    #[must_use]
    pub fn from_slice(s: &[u8]) -> Self {
        let len = sentinel::strlen(s);
        let mut buf = vec![sentinel::NUL; len + 1].into_boxed_slice();
        sentinel::copy_bytes(&mut buf, s, len);
        ZString { buf, len }
    }

    /// Creates an empty buffer with storage for `capacity` cells, all
    /// zero-filled so the first cell is already the terminator.
    ///
    /// A request of 0 is raised to 1: every initialized buffer must be able
    /// to hold its terminator.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ZString {
            buf: vec![sentinel::NUL; capacity.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of content bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Total allocated cells, including the terminator cell.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The content bytes, excluding the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Mutable access to the content bytes. The terminator is not reachable
    /// through this slice, so it stays in place under any write.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    /// First content byte, or `None` if the buffer is empty.
    #[must_use]
    pub fn front(&self) -> Option<&u8> {
        self.as_bytes().first()
    }

    /// Last content byte, or `None` if the buffer is empty.
    #[must_use]
    pub fn back(&self) -> Option<&u8> {
        self.as_bytes().last()
    }

    pub fn front_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_bytes().first_mut()
    }

    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_mut_bytes().last_mut()
    }

    /// Grows the allocation to exactly `target` cells.
    ///
    /// A no-op when `target <= capacity()`; the buffer never shrinks.
    /// Content and terminator are carried over to the new allocation.
    pub fn reserve(&mut self, target: usize) {
        if target <= self.buf.len() {
            return;
        }
        let mut grown = vec![sentinel::NUL; target].into_boxed_slice();
        grown[..=self.len].copy_from_slice(&self.buf[..=self.len]);
        self.buf = grown;
    }

    /// Appends a single content byte, growing capacity by exactly one cell
    /// when full.
    pub fn push(&mut self, byte: u8) {
        let new_len = self.len + 1;
        if self.capacity() <= new_len {
            self.reserve(new_len + 1);
        }
        self.buf[new_len - 1] = byte;
        self.buf[new_len] = sentinel::NUL;
        self.len = new_len;
    }

    /// Appends the content of `s` (up to its first NUL), growing to exactly
    /// the new content length plus the terminator when needed.
    pub fn push_slice(&mut self, s: &[u8]) {
        let n = sentinel::strlen(s);
        let new_len = self.len + n;
        if self.capacity() <= new_len {
            self.reserve(new_len + 1);
        }
        self.buf[self.len..new_len].copy_from_slice(&s[..n]);
        self.buf[new_len] = sentinel::NUL;
        self.len = new_len;
    }

    /// Appends the decimal text of `value`. When the buffer must grow, the
    /// capacity increases by exactly the text length.
    pub fn push_int(&mut self, value: u32) {
        let mut digits = [sentinel::NUL; 11];
        let n = sentinel::int_to_decimal(value, &mut digits);
        let new_len = self.len + n;
        if self.capacity() <= new_len {
            self.reserve(self.capacity() + n);
        }
        self.buf[self.len..new_len].copy_from_slice(&digits[..n]);
        self.buf[new_len] = sentinel::NUL;
        self.len = new_len;
    }

    /// Replaces the content with that of `s` (up to its first NUL),
    /// reserving exactly the new content length plus the terminator when
    /// the current capacity is insufficient. Capacity is never reduced.
    pub fn assign(&mut self, s: &[u8]) {
        let new_len = sentinel::strlen(s);
        if self.capacity() <= new_len {
            self.reserve(new_len + 1);
        }
        sentinel::strcpy(&mut self.buf, &s[..new_len]);
        self.len = new_len;
    }

    /// Replaces the content with another buffer's content.
    pub fn assign_from(&mut self, other: &ZString) {
        self.assign(other.as_bytes());
    }

    /// Reverses the content bytes in place.
    pub fn reverse(&mut self) {
        self.as_mut_bytes().reverse();
    }

    /// Empties the buffer. The allocation is kept.
    pub fn clear(&mut self) {
        self.len = 0;
        self.buf[0] = sentinel::NUL;
    }

    /// Gets the content byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::IndexOutOfBounds` if `index` is at or beyond
    /// `len()`.
    pub fn get(&self, index: usize) -> Result<&u8> {
        if index >= self.len {
            return Err(ZStringError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(&self.buf[index])
    }

    /// Gets the content byte at `index` for writing.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::IndexOutOfBounds` if `index` is at or beyond
    /// `len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut u8> {
        if index >= self.len {
            return Err(ZStringError::IndexOutOfBounds {
                index,
                length: self.len,
            });
        }
        Ok(&mut self.buf[index])
    }

    fn check_range(&self, start: usize, len: usize) -> Result<()> {
        match start.checked_add(len) {
            Some(end) if end <= self.len => Ok(()),
            _ => Err(ZStringError::RangeOutOfBounds {
                start,
                len,
                length: self.len,
            }),
        }
    }

    /// Builds a new buffer from the cells `[start, start + len)`.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::RangeOutOfBounds` if the range exceeds the
    /// content length. The source buffer is untouched either way.
    pub fn substr(&self, start: usize, len: usize) -> Result<ZString> {
        self.check_range(start, len)?;
        let mut out = ZString::with_capacity(len + 1);
        for &b in &self.buf[start..start + len] {
            out.push(b);
        }
        Ok(out)
    }

    /// Returns a mutable window over the cells `[start, start + len)`.
    ///
    /// The window borrows this buffer exclusively, so the buffer cannot be
    /// grown, reassigned, or dropped until the window is released; a stale
    /// window is a compile error rather than a dangling read.
    ///
    /// # Errors
    ///
    /// Returns `ZStringError::RangeOutOfBounds` if the range exceeds the
    /// content length; the buffer is untouched.
    pub fn slice(&mut self, start: usize, len: usize) -> Result<ZSlice<'_>> {
        self.check_range(start, len)?;
        Ok(ZSlice::new(&mut self.buf[start..start + len]))
    }

    /// Returns a cursor over the content bytes.
    #[must_use]
    pub fn iter(&self) -> Bytes<'_> {
        self.into_iter()
    }

    /// Writes the content bytes to `out`. No terminator and no newline are
    /// written.
    ///
    /// # Errors
    ///
    /// From the underlying writer.
    pub fn write_to<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

impl Default for ZString {
    fn default() -> Self {
        ZString::new()
    }
}

impl From<&[u8]> for ZString {
    fn from(s: &[u8]) -> Self {
        ZString::from_slice(s)
    }
}

impl From<&str> for ZString {
    fn from(s: &str) -> Self {
        ZString::from_slice(s.as_bytes())
    }
}

impl PartialEq for ZString {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ZString {}

impl PartialEq<[u8]> for ZString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<&[u8]> for ZString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<str> for ZString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ZString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Display for ZString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl fmt::Debug for ZString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ZString {{ len: {}, capacity: {}, content: {:?} }}",
            self.len,
            self.buf.len(),
            String::from_utf8_lossy(self.as_bytes())
        )
    }
}
