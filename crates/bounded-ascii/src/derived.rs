//! Operations that build a new [`BoundedAsciiString`] from existing ones.
//!
//! Each of them allocates exactly one fresh buffer and copies into it; the
//! operands are never modified and never share storage with the result.
use bstr::ByteSlice;

use crate::{
    BoundedAsciiString,
    error::{Error, Result},
    string::rejected,
    validation::check_ascii,
};

impl BoundedAsciiString {
    /// A copy of `[start, start + length)` with the same capacity as `self`.
    ///
    /// `length` is clamped to the characters available after `start`;
    /// `None` takes everything to the end.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] unless `0 <= start < len`.
    pub fn substring(&self, start: isize, length: Option<usize>) -> Result<Self> {
        let from = usize::try_from(start)
            .ok()
            .filter(|&i| i < self.len)
            .ok_or(Error::IndexOutOfBounds {
                index: start,
                length: self.len,
            })
            .map_err(|e| rejected("substring", e))?;

        let available = self.len - from;
        let take = length.map_or(available, |n| n.min(available));
        Ok(self.derive(self.capacity(), &[&self.buffer[from..from + take]]))
    }

    /// `self` followed by `other`, in a string whose capacity is the larger
    /// of the two operands' capacities.
    ///
    /// # Errors
    ///
    /// [`Error::BufferOverflow`] if the combined length exceeds that
    /// capacity.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        let capacity = self.capacity().max(other.capacity());
        let required = self.len + other.len;
        if required > capacity {
            return Err(rejected("concat", Error::overflow(required, capacity)));
        }
        Ok(self.derive(capacity, &[self.as_bytes(), other.as_bytes()]))
    }

    /// A copy of `self` with every non-overlapping occurrence of `old`,
    /// scanned left to right, replaced by `new`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCharacter`] if `old` or `new` is not ASCII.
    /// - [`Error::InvalidArgument`] if `old` is empty.
    /// - [`Error::BufferOverflow`] if the result exceeds `self`'s capacity.
    pub fn replace(&self, old: &str, new: &str) -> Result<Self> {
        check_ascii(old).map_err(|e| rejected("replace", e))?;
        check_ascii(new).map_err(|e| rejected("replace", e))?;
        if old.is_empty() {
            return Err(rejected(
                "replace",
                Error::InvalidArgument("pattern to replace must not be empty"),
            ));
        }

        let content = self.as_bytes();
        let hits = content.find_iter(old).count();
        let required = self.len - hits * old.len() + hits * new.len();
        if required > self.capacity() {
            return Err(rejected(
                "replace",
                Error::overflow(required, self.capacity()),
            ));
        }

        let mut out = Self::blank(self.capacity());
        let mut read = 0;
        for at in content.find_iter(old) {
            out.push_unchecked(&content[read..at]);
            out.push_unchecked(new.as_bytes());
            read = at + old.len();
        }
        out.push_unchecked(&content[read..]);
        debug_assert_eq!(out.len, required);
        Ok(out)
    }

    /// Fresh instance of `capacity` holding the concatenation of `parts`.
    /// Callers have already checked that the parts fit.
    fn derive(&self, capacity: usize, parts: &[&[u8]]) -> Self {
        let mut out = Self::blank(capacity);
        for part in parts {
            out.push_unchecked(part);
        }
        log::trace!(
            "derived len={} capacity={} from len={}",
            out.len,
            capacity,
            self.len
        );
        out
    }

    /// Appends bytes already known to be ASCII and to fit.
    fn push_unchecked(&mut self, bytes: &[u8]) {
        let end = self.len + bytes.len();
        self.buffer[self.len..end].copy_from_slice(bytes);
        self.len = end;
    }
}
