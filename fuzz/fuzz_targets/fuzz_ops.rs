#![no_main]

use arbitrary::Arbitrary;
use bounded_ascii::{BoundedAsciiString, ErrorKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Assign(String),
    Append(String),
    AppendChar(char),
    AppendCharStr(String),
    Clear,
    At(isize),
    Find(String),
    StartsWith(String),
    EndsWith(String),
    Substring(isize, Option<usize>),
    Concat(u8, String),
    Replace(String, String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    initial: String,
    ops: Vec<Op>,
}

/// Runs one operation, returning a derived value if the operation builds
/// one. Mutators that fail must leave `s` untouched.
fn apply(s: &mut BoundedAsciiString, op: &Op) -> Option<BoundedAsciiString> {
    let before = s.clone();
    let mutated = match op {
        Op::Assign(t) => Some(s.assign(t)),
        Op::Append(t) => Some(s.append(t)),
        Op::AppendChar(c) => Some(s.append_char(*c)),
        Op::AppendCharStr(t) => Some(s.append_char_str(t)),
        Op::Clear => {
            s.clear();
            None
        }
        _ => None,
    };
    if let Some(Err(_)) = mutated {
        assert_eq!(*s, before);
        assert_eq!(s.capacity(), before.capacity());
    }

    match op {
        Op::At(i) => {
            let res = s.at(*i);
            assert_eq!(res.is_ok(), *i >= 0 && (*i as usize) < s.len());
            None
        }
        Op::Find(n) => {
            if let Ok(found) = s.find(n) {
                assert_eq!(found, s.as_str().find(n.as_str()));
            }
            None
        }
        Op::StartsWith(p) => {
            if let Ok(hit) = s.starts_with(p) {
                assert_eq!(hit, s.as_str().starts_with(p.as_str()));
            }
            None
        }
        Op::EndsWith(p) => {
            if let Ok(hit) = s.ends_with(p) {
                assert_eq!(hit, s.as_str().ends_with(p.as_str()));
            }
            None
        }
        Op::Substring(start, len) => s.substring(*start, *len).ok(),
        Op::Concat(cap, text) => {
            let other = BoundedAsciiString::with_value(usize::from(*cap), text).ok()?;
            match s.concat(&other) {
                Ok(joined) => {
                    assert_eq!(joined.len(), s.len() + other.len());
                    Some(joined)
                }
                Err(e) => {
                    assert_eq!(e.kind(), ErrorKind::BufferOverflow);
                    None
                }
            }
        }
        Op::Replace(old, new) => {
            let out = s.replace(old, new).ok()?;
            assert_eq!(out, s.as_str().replace(old.as_str(), new.as_str()));
            Some(out)
        }
        _ => None,
    }
}

fuzz_target!(|input: Input| {
    let Ok(mut s) = BoundedAsciiString::with_value(usize::from(input.capacity), &input.initial)
    else {
        return;
    };
    for op in &input.ops {
        if let Some(derived) = apply(&mut s, op) {
            derived.check_invariants();
        }
        s.check_invariants();
    }
});
