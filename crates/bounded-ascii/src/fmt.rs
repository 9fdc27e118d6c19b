//! Formatting, conversion and `fmt::Write` support.
use core::fmt;

use crate::{BoundedAsciiString, Error};

impl fmt::Display for BoundedAsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for BoundedAsciiString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedAsciiString")
            .field("capacity", &self.capacity())
            .field("value", &self.as_str())
            .finish()
    }
}

/// Each `write_str` call is all-or-nothing: a fragment that is not ASCII or
/// does not fit leaves the content untouched and fails the write.
impl fmt::Write for BoundedAsciiString {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map_err(|_| fmt::Error)
    }
}

impl AsRef<str> for BoundedAsciiString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<[u8]> for BoundedAsciiString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Builds a string whose capacity is exactly the length of `text`.
///
/// The empty string is rejected, since a capacity must be positive.
impl TryFrom<&str> for BoundedAsciiString {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        BoundedAsciiString::with_value(text.chars().count(), text)
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::ToString};
    use core::fmt::Write;

    use crate::{BoundedAsciiString, ErrorKind};

    #[test]
    fn display_hides_padding() {
        let s = BoundedAsciiString::with_value(10, "abc").unwrap();
        assert_eq!(s.to_string(), "abc");
        assert_eq!(format!("[{s:>5}]"), "[  abc]");
    }

    #[test]
    fn debug_shows_capacity() {
        let s = BoundedAsciiString::with_value(10, "abc").unwrap();
        assert_eq!(
            format!("{s:?}"),
            r#"BoundedAsciiString { capacity: 10, value: "abc" }"#
        );
    }

    #[test]
    fn write_macro_fills_field() {
        let mut s = BoundedAsciiString::new(8).unwrap();
        write!(s, "id={}", 42).unwrap();
        assert_eq!(s, "id=42");
        assert!(write!(s, "{}", 1234).is_err());
        assert_eq!(s, "id=42");
    }

    #[test]
    fn try_from_sizes_to_text() {
        let s = BoundedAsciiString::try_from("exact").unwrap();
        assert_eq!(s.capacity(), 5);
        assert!(s.is_full());

        let err = BoundedAsciiString::try_from("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = BoundedAsciiString::try_from("\u{e9}t\u{e9}").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCharacter);
    }
}
