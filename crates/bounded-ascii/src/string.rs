//! The [`BoundedAsciiString`] type: construction, in-place mutation and
//! read-only queries.
//!
//! Layout is a boxed byte slice whose length *is* the capacity, plus the
//! count of meaningful leading bytes. Slots at or past `len` are always `0`.
use alloc::{boxed::Box, vec::Vec};

use bstr::ByteSlice;

use crate::{
    error::{Error, Result},
    validation::check_ascii,
};

/// Fill value of every slot past the current length.
pub(crate) const SENTINEL: u8 = 0;

/// A string of at most `capacity` ASCII characters, where the capacity is
/// chosen at construction and never changes.
///
/// Every mutator validates its whole input before touching the buffer, so a
/// failed call leaves the value exactly as it was.
///
/// # Examples
///
/// ```
/// use bounded_ascii::{BoundedAsciiString, ErrorKind};
///
/// let mut field = BoundedAsciiString::with_value(11, "hello")?;
/// field.append(" world")?;
/// assert_eq!(field, "hello world");
///
/// let err = field.append_char('!').unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::BufferOverflow);
/// assert_eq!(field.len(), 11);
/// # Ok::<(), bounded_ascii::Error>(())
/// ```
#[derive(Clone)]
pub struct BoundedAsciiString {
    pub(crate) buffer: Box<[u8]>,
    pub(crate) len: usize,
}

/// Length in characters; equal to the byte length for ASCII input.
fn char_len(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

pub(crate) fn rejected(op: &'static str, err: Error) -> Error {
    log::debug!("{op} rejected: {err}");
    err
}

impl BoundedAsciiString {
    /// Creates an empty string able to hold `capacity` characters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is zero or the buffer
    /// cannot be allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(rejected(
                "new",
                Error::InvalidArgument("capacity must be positive"),
            ));
        }
        // Allocation failure is an error, never an abort.
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|_| rejected("new", Error::InvalidArgument("capacity too large")))?;
        buffer.resize(capacity, SENTINEL);
        Ok(Self {
            buffer: buffer.into_boxed_slice(),
            len: 0,
        })
    }

    /// Creates a string of the given capacity holding `initial`.
    ///
    /// # Errors
    ///
    /// Everything [`new`](Self::new) and [`assign`](Self::assign) can
    /// return; no instance is produced on failure.
    pub fn with_value(capacity: usize, initial: &str) -> Result<Self> {
        let mut s = Self::new(capacity)?;
        if !initial.is_empty() {
            s.assign(initial)?;
        }
        Ok(s)
    }

    /// Fresh all-sentinel buffer for a capacity an existing instance already
    /// holds. Callers guarantee `capacity >= 1`.
    pub(crate) fn blank(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            buffer: alloc::vec![SENTINEL; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Number of characters currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no character is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of characters this instance can ever hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Whether no further character can be appended.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Characters that can still be appended.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len
    }

    /// The stored text, without sentinel padding.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// The stored text as a `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: only ASCII bytes are ever written below `len`, and ASCII
        // is valid UTF-8.
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Iterates over the stored characters.
    pub fn chars(&self) -> impl DoubleEndedIterator<Item = char> + ExactSizeIterator + '_ {
        self.as_bytes().iter().map(|&b| char::from(b))
    }

    /// Resets every slot to the sentinel.
    pub fn clear(&mut self) {
        self.buffer.fill(SENTINEL);
        self.len = 0;
        log::trace!("clear: capacity={}", self.capacity());
    }

    /// Replaces the whole content with `text`.
    ///
    /// # Errors
    ///
    /// [`Error::BufferOverflow`] if `text` is longer than the capacity, then
    /// [`Error::InvalidCharacter`] if it is not ASCII.
    pub fn assign(&mut self, text: &str) -> Result<()> {
        let required = char_len(text);
        if required > self.capacity() {
            return Err(rejected(
                "assign",
                Error::overflow(required, self.capacity()),
            ));
        }
        check_ascii(text).map_err(|e| rejected("assign", e))?;

        self.clear();
        self.buffer[..text.len()].copy_from_slice(text.as_bytes());
        self.len = text.len();
        log::trace!("assign: len={}", self.len);
        Ok(())
    }

    /// Appends `text` after the current content. Appending `""` is a no-op.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if `text` is not ASCII, then
    /// [`Error::BufferOverflow`] if the result would exceed the capacity.
    pub fn append(&mut self, text: &str) -> Result<()> {
        check_ascii(text).map_err(|e| rejected("append", e))?;
        let new_len = self.len + text.len();
        if new_len > self.capacity() {
            return Err(rejected(
                "append",
                Error::overflow(new_len, self.capacity()),
            ));
        }

        self.buffer[self.len..new_len].copy_from_slice(text.as_bytes());
        self.len = new_len;
        log::trace!("append: len={}", self.len);
        Ok(())
    }

    /// Appends a single character.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if `ch` is not ASCII, then
    /// [`Error::BufferOverflow`] if the string is already full.
    pub fn append_char(&mut self, ch: char) -> Result<()> {
        if !ch.is_ascii() {
            return Err(rejected(
                "append_char",
                Error::InvalidCharacter {
                    character: ch,
                    position: 0,
                },
            ));
        }
        if self.is_full() {
            return Err(rejected(
                "append_char",
                Error::overflow(self.len + 1, self.capacity()),
            ));
        }

        // `ch` is ASCII, so the cast is lossless.
        #[allow(clippy::cast_possible_truncation)]
        let byte = ch as u8;
        self.buffer[self.len] = byte;
        self.len += 1;
        log::trace!("append_char: len={}", self.len);
        Ok(())
    }

    /// Appends the single character held in `token`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] unless `token` is exactly one character,
    /// then as [`append_char`](Self::append_char).
    pub fn append_char_str(&mut self, token: &str) -> Result<()> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.append_char(ch),
            _ => Err(rejected(
                "append_char",
                Error::InvalidArgument("expected exactly one character"),
            )),
        }
    }

    /// The character at `index`. Negative indices are not wrapped.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `0 <= index < len`.
    pub fn at(&self, index: isize) -> Result<char> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.len)
            .map(|i| char::from(self.buffer[i]))
            .ok_or(Error::IndexOutOfBounds {
                index,
                length: self.len,
            })
    }

    /// Position of the first occurrence of `needle`, or `None` when absent.
    /// The empty needle matches at `0`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if `needle` is not ASCII.
    pub fn find(&self, needle: &str) -> Result<Option<usize>> {
        check_ascii(needle)?;
        Ok(self.as_bytes().find(needle.as_bytes()))
    }

    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if `prefix` is not ASCII.
    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        check_ascii(prefix)?;
        Ok(self.as_bytes().starts_with_str(prefix))
    }

    /// # Errors
    ///
    /// [`Error::InvalidCharacter`] if `suffix` is not ASCII.
    pub fn ends_with(&self, suffix: &str) -> Result<bool> {
        check_ascii(suffix)?;
        Ok(self.as_bytes().ends_with_str(suffix))
    }

    /// Panics if any structural invariant is broken.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        assert!(self.capacity() >= 1, "zero capacity");
        assert!(self.len <= self.capacity(), "length past capacity");
        assert!(self.as_bytes().is_ascii(), "non-ASCII content");
        assert!(
            self.buffer[self.len..].iter().all(|&b| b == SENTINEL),
            "non-sentinel padding"
        );
    }
}
