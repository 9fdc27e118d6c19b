use thiserror::Error;

/// Result alias used by every fallible operation on
/// [`BoundedAsciiString`](crate::BoundedAsciiString).
pub type Result<T> = core::result::Result<T, Error>;

/// The four ways an operation on a bounded string can be refused.
///
/// Every mutator validates its input completely before writing, so receiving
/// an `Error` guarantees the instance is byte-for-byte unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The call itself is malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// The input contains a character outside the ASCII range.
    #[error("invalid character {character:?} at position {position}: not ASCII")]
    InvalidCharacter {
        /// First offending character.
        character: char,
        /// Character offset of `character` within the rejected input.
        position: usize,
    },
    /// The result would not fit in the fixed buffer.
    #[error("buffer overflow: {required} characters required, capacity is {capacity}")]
    BufferOverflow {
        /// Length the operation would have produced.
        required: usize,
        /// Fixed capacity that was exceeded.
        capacity: usize,
    },
    /// A position outside `[0, length)` was requested.
    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfBounds {
        /// Requested position, as supplied by the caller.
        index: isize,
        /// Current length at the time of the call.
        length: usize,
    },
}

/// Discriminant of [`Error`], for callers that only branch on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidArgument`].
    InvalidArgument,
    /// See [`Error::InvalidCharacter`].
    InvalidCharacter,
    /// See [`Error::BufferOverflow`].
    BufferOverflow,
    /// See [`Error::IndexOutOfBounds`].
    IndexOutOfBounds,
}

impl Error {
    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Error::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Error::BufferOverflow { .. } => ErrorKind::BufferOverflow,
            Error::IndexOutOfBounds { .. } => ErrorKind::IndexOutOfBounds,
        }
    }

    pub(crate) fn overflow(required: usize, capacity: usize) -> Self {
        Error::BufferOverflow { required, capacity }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            Error::InvalidArgument("x").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(Error::overflow(3, 2).kind(), ErrorKind::BufferOverflow);
        assert_eq!(
            Error::IndexOutOfBounds {
                index: -1,
                length: 0
            }
            .kind(),
            ErrorKind::IndexOutOfBounds
        );
    }

    #[test]
    fn messages_carry_numbers() {
        assert_eq!(
            Error::overflow(11, 10).to_string(),
            "buffer overflow: 11 characters required, capacity is 10"
        );
        assert_eq!(
            Error::InvalidCharacter {
                character: 'é',
                position: 3
            }
            .to_string(),
            "invalid character 'é' at position 3: not ASCII"
        );
    }
}
