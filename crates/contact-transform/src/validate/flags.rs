//! Decoders for the tri-state visibility flags of the export.

/// `invisible` is set unless the cell is `"no"` or empty.
pub fn decode_invisible(value: &str) -> bool {
    !(value == "no" || value.is_empty())
}

/// `see_all` is set only when the cell is exactly `"yes"`.
pub fn decode_see_all(value: &str) -> bool {
    value == "yes"
}
