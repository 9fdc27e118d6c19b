//! `{ "capacity": N, "value": "..." }` representation.
//!
//! Deserialization goes through [`BoundedAsciiString::with_value`], so a
//! payload with a zero capacity, an oversized value or non-ASCII text is
//! refused instead of producing a broken instance.
use alloc::string::String;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::Error as _,
    ser::SerializeStruct,
};

use crate::BoundedAsciiString;

impl Serialize for BoundedAsciiString {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BoundedAsciiString", 2)?;
        state.serialize_field("capacity", &self.capacity())?;
        state.serialize_field("value", self.as_str())?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "BoundedAsciiString", deny_unknown_fields)]
struct Repr {
    capacity: usize,
    value: String,
}

impl<'de> Deserialize<'de> for BoundedAsciiString {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Repr { capacity, value } = Repr::deserialize(deserializer)?;
        BoundedAsciiString::with_value(capacity, &value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::BoundedAsciiString;

    #[test]
    fn json_shape() {
        let s = BoundedAsciiString::with_value(8, "GET").unwrap();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"capacity":8,"value":"GET"}"#);

        let back: BoundedAsciiString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
        assert_eq!(back.capacity(), 8);
    }

    #[test]
    fn invalid_payloads_are_refused() {
        let cases = [
            (r#"{"capacity":0,"value":""}"#, "invalid argument"),
            (
                r#"{"capacity":18446744073709551615,"value":""}"#,
                "capacity too large",
            ),
            (r#"{"capacity":2,"value":"abc"}"#, "buffer overflow"),
            (r#"{"capacity":8,"value":"café"}"#, "not ASCII"),
        ];
        for (json, needle) in cases {
            let err = serde_json::from_str::<BoundedAsciiString>(json)
                .unwrap_err()
                .to_string();
            assert!(err.contains(needle), "{json}: {err}");
        }
    }
}
