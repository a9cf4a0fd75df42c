//! `zstring`: a growable, NUL-terminated byte string with mutable windows
//! and byte cursors.
//!
//! The crate provides one owned type and two borrowed ones. [`ZString`]
//! owns a single exactly-sized allocation holding its content plus a NUL
//! terminator, and manages length and capacity by hand. [`ZSlice`] is a
//! mutable window over a range of a live `ZString` — it owns nothing, and
//! the borrow checker guarantees it can never outlive or dangle into its
//! owner. [`Bytes`] is the forward cursor both of them hand out.
//!
//! Capacity growth is tight rather than amortized: every reallocation
//! requests exactly what it needs. That keeps the footprint minimal at the
//! cost of a copy per growth event, so pre-size with
//! [`ZString::with_capacity`] or [`ZString::reserve`] when appending in a
//! loop.
//!
//! # Building content
//!
//! ```
//! use zstring::ZString;
//!
//! let mut line = ZString::new();
//! line.push_slice(b"id: ");
//! line.push_int(205);
//! line.push(b'!');
//! assert_eq!(format!("{line}"), "id: 205!");
//! assert_eq!(line.capacity(), line.len() + 1);
//! ```
//!
//! # Windows mutate their owner
//!
//! A window borrows the owner's storage directly, so in-place edits through
//! it are visible through the owner once the window is released:
//!
//! ```
//! use zstring::ZString;
//!
//! let mut name = ZString::from("kai");
//! name.assign(b"Frederic Nietzsche");
//!
//! let mut window = name.slice(0, 5).unwrap();
//! window.reverse();
//! assert_eq!(format!("{name}"), "ederFric Nietzsche");
//! ```
//!
//! # Contract violations are errors, not corruption
//!
//! Range, index, and replacement-length violations are reported before any
//! mutation, so the buffer's invariants survive a failed call:
//!
//! ```
//! use zstring::{ZString, ZStringError};
//!
//! let mut s = ZString::from("abc");
//! let err = s.slice(2, 5).unwrap_err();
//! assert_eq!(
//!     err,
//!     ZStringError::RangeOutOfBounds { start: 2, len: 5, length: 3 }
//! );
//! assert_eq!(s.len(), 3);
//! ```
//!
//! The byte-level operations the buffer is built on (length scan, copy,
//! fill, terminated copy/append, prefix check, reversal, decimal
//! formatting) live in [`sentinel`] and follow the classic C string
//! contract over safe slices.
//!
//! Content is a sequence of single-byte cells; the crate is not
//! encoding-aware. The `Display` impls decode lossily for convenience only.

mod error;
mod iter;
pub mod sentinel;
mod slice;
mod zstring;

pub use error::{Result, ZStringError};
pub use iter::Bytes;
pub use slice::ZSlice;
pub use zstring::ZString;
