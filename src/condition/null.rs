/// Null operation name. The operand is `"true"` when the key must be absent and `"false"` when it must be present.
pub(super) const NULL_DISPLAY_NAME: &str = "Null";
