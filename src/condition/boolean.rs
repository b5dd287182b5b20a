use crate::serutil::StringList;

/// Boolean operation names.
pub(super) const BOOL_DISPLAY_NAMES: [&str; 2] = ["Bool", "BoolIfExists"];

/// IAM accepts both JSON booleans and their string forms; values are written as strings, the way the IAM console
/// writes them.
impl From<bool> for StringList {
    fn from(value: bool) -> Self {
        Self::Single(value.to_string())
    }
}
