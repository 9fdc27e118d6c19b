use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Text drawn from the full ASCII range, NUL and DEL included.
#[derive(Debug, Clone)]
pub(crate) struct AsciiText(pub String);

impl Arbitrary for AsciiText {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % (g.size() + 1);
        // Bias towards a small alphabet so searches actually hit.
        let narrow = bool::arbitrary(g);
        let text = (0..len)
            .map(|_| {
                if narrow {
                    char::from(b'a' + u8::arbitrary(g) % 3)
                } else {
                    char::from(u8::arbitrary(g) & 0x7f)
                }
            })
            .collect();
        Self(text)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        Box::new(
            (0..chars.len())
                .rev()
                .map(move |n| Self(chars[..n].iter().collect())),
        )
    }
}

/// Text containing at least one character outside ASCII.
#[derive(Debug, Clone)]
pub(crate) struct NonAsciiText(pub String);

impl Arbitrary for NonAsciiText {
    fn arbitrary(g: &mut Gen) -> Self {
        let AsciiText(mut text) = AsciiText::arbitrary(g);
        let mut bad = char::arbitrary(g);
        while bad.is_ascii() {
            bad = char::arbitrary(g);
        }
        let at = if text.is_empty() {
            0
        } else {
            usize::arbitrary(g) % (text.len() + 1)
        };
        text.insert(at, bad);
        Self(text)
    }
}

/// Capacity in `1..=40`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Capacity(pub usize);

impl Arbitrary for Capacity {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(1 + usize::arbitrary(g) % 40)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new((1..self.0).rev().map(Self))
    }
}
