//! Content equality. Capacity never takes part in a comparison.
use alloc::string::String;
use core::{
    any::Any,
    hash::{Hash, Hasher},
};

use crate::{BoundedAsciiString, validation::text_view};

impl BoundedAsciiString {
    /// Compares against a value whose type is only known at runtime.
    ///
    /// Another `BoundedAsciiString` or any text type accepted by
    /// [`is_ascii_value`](crate::is_ascii_value) is compared by content;
    /// every other value is simply unequal.
    ///
    /// ```
    /// use bounded_ascii::BoundedAsciiString;
    ///
    /// let s = BoundedAsciiString::with_value(8, "42")?;
    /// assert!(s.equals(&"42"));
    /// assert!(s.equals(&BoundedAsciiString::with_value(2, "42")?));
    /// assert!(!s.equals(&42_u8));
    /// # Ok::<(), bounded_ascii::Error>(())
    /// ```
    #[must_use]
    pub fn equals(&self, other: &dyn Any) -> bool {
        text_view(other).is_some_and(|text| self.as_bytes() == text.as_bytes())
    }
}

impl PartialEq for BoundedAsciiString {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BoundedAsciiString {}

impl Hash for BoundedAsciiString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialEq<str> for BoundedAsciiString {
    fn eq(&self, other: &str) -> bool {
        self.len == other.len() && self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for BoundedAsciiString {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for BoundedAsciiString {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl PartialEq<BoundedAsciiString> for str {
    fn eq(&self, other: &BoundedAsciiString) -> bool {
        *other == *self
    }
}

impl PartialEq<BoundedAsciiString> for &str {
    fn eq(&self, other: &BoundedAsciiString) -> bool {
        *other == **self
    }
}

impl PartialEq<BoundedAsciiString> for String {
    fn eq(&self, other: &BoundedAsciiString) -> bool {
        *other == *self.as_str()
    }
}
