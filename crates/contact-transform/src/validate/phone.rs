//! Phone validation against a single region's numbering plan.

use phonenumber::{Mode, PhoneNumber, country};

/// Parses `value` under the region's country calling code and keeps it only
/// if it is a valid number assigned to that region.
fn parse_in_region(value: &str, region: country::Id) -> Option<PhoneNumber> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let number = phonenumber::parse(Some(region), trimmed).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    (number.country().id() == Some(region)).then_some(number)
}

/// Returns true if `value` is a valid, dialable number in `region`.
pub fn is_valid_phone(value: &str, region: country::Id) -> bool {
    parse_in_region(value, region).is_some()
}

/// Formats a valid number in the region's national format.
///
/// Returns `None` when the number does not validate.
pub fn format_phone_national(value: &str, region: country::Id) -> Option<String> {
    parse_in_region(value, region).map(|number| number.format().mode(Mode::National).to_string())
}
