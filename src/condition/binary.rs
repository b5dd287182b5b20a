use crate::serutil::StringList;

/// Binary operation names.
pub(super) const BINARY_DISPLAY_NAMES: [&str; 2] = ["BinaryEquals", "BinaryEqualsIfExists"];

/// Encode raw bytes as the base64 string expected by `BinaryEquals`.
pub fn binary_value<B: AsRef<[u8]>>(value: B) -> StringList {
    StringList::Single(base64::encode(value))
}

impl From<&[u8]> for StringList {
    fn from(value: &[u8]) -> Self {
        binary_value(value)
    }
}
