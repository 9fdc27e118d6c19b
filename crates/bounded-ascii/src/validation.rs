//! The ASCII gate every input passes through before it may touch a buffer.
//!
//! [`is_ascii`] is the pure predicate; [`check_ascii`] is the same test
//! reporting the first offending character. [`text_view`] is the single
//! capability check used wherever a dynamically typed value has to be
//! interpreted as text.
use alloc::{borrow::Cow, boxed::Box, string::String};
use core::any::Any;

use crate::{
    BoundedAsciiString,
    error::{Error, Result},
};

/// Returns `true` iff every character of `text` is in `0..=127`.
///
/// The empty string is ASCII.
#[must_use]
pub fn is_ascii(text: &str) -> bool {
    text.is_ascii()
}

/// Like [`is_ascii`], for values whose type is only known at runtime.
///
/// Anything that is not text yields `false`; this never fails.
///
/// ```
/// use bounded_ascii::is_ascii_value;
///
/// assert!(is_ascii_value(&"plain"));
/// assert!(!is_ascii_value(&"caf\u{e9}"));
/// assert!(!is_ascii_value(&42_u32));
/// ```
#[must_use]
pub fn is_ascii_value(value: &dyn Any) -> bool {
    text_view(value).is_some_and(is_ascii)
}

/// Validates `text`, reporting the first non-ASCII character and its
/// character offset.
pub(crate) fn check_ascii(text: &str) -> Result<()> {
    if text.is_ascii() {
        return Ok(());
    }
    let (position, character) = text
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii())
        .unwrap_or((0, char::REPLACEMENT_CHARACTER));
    Err(Error::InvalidCharacter {
        character,
        position,
    })
}

/// Borrows `value` as text if its type is one of the text-like types this
/// crate understands.
pub(crate) fn text_view(value: &dyn Any) -> Option<&str> {
    if let Some(s) = value.downcast_ref::<&'static str>() {
        Some(*s)
    } else if let Some(s) = value.downcast_ref::<String>() {
        Some(s.as_str())
    } else if let Some(s) = value.downcast_ref::<Box<str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<Cow<'static, str>>() {
        Some(&**s)
    } else if let Some(s) = value.downcast_ref::<BoundedAsciiString>() {
        Some(s.as_str())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn ascii_boundaries() {
        assert!(is_ascii(""));
        assert!(is_ascii("\0"));
        assert!(is_ascii("\u{7f}"));
        assert!(!is_ascii("\u{80}"));
        assert!(!is_ascii("na\u{ef}ve"));
    }

    #[test]
    fn check_reports_first_offender() {
        assert_eq!(check_ascii("plain"), Ok(()));
        assert_eq!(
            check_ascii("caf\u{e9} cr\u{e8}me"),
            Err(Error::InvalidCharacter {
                character: '\u{e9}',
                position: 3,
            })
        );
    }

    #[test]
    fn non_text_values_are_not_ascii() {
        assert!(is_ascii_value(&"abc"));
        assert!(is_ascii_value(&"abc".to_string()));
        assert!(is_ascii_value(&Box::<str>::from("abc")));
        assert!(!is_ascii_value(&7_i32));
        assert!(!is_ascii_value(&'a'));
        assert!(!is_ascii_value(&()));
    }
}
