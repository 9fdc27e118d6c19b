//! A fixed-capacity, ASCII-only string for protocol fields.
//!
//! [`BoundedAsciiString`] owns a buffer whose size is chosen once, at
//! construction. Every operation that could grow the content or admit a
//! new character validates its input first, so size and character-set
//! constraints hold after every mutation and not only when a field is
//! parsed. Failures are reported as [`Error`] and never leave a value
//! half-written.
//!
//! ```rust
//! use bounded_ascii::{BoundedAsciiString, ErrorKind};
//!
//! let greeting = BoundedAsciiString::with_value(20, "hello world hello")?;
//! let short = greeting.replace("hello", "hi")?;
//! assert_eq!(short, "hi world hi");
//! assert_eq!(short.find("world")?, Some(3));
//!
//! let err = short.at(-1).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
//! # Ok::<(), bounded_ascii::Error>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod compare;
mod derived;
mod error;
mod fmt;
mod string;
mod validation;

#[cfg(any(test, feature = "serde"))]
mod serde_impl;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind, Result};
pub use string::BoundedAsciiString;
pub use validation::{is_ascii, is_ascii_value};
