//! Column names understood by the contact export.
//!
//! Address columns are not listed here: any column whose name contains
//! [`EMAIL_MARKER`] or [`PHONE_MARKER`] carries an address, with the address
//! type and its tags encoded in the column name (`"email Work Personal"`).

pub const FULL_NAME: &str = "fullname";
pub const EXTERNAL_ID: &str = "eid";
pub const INVISIBLE: &str = "invisible";
pub const SEE_ALL: &str = "see_all";
pub const GROUP: &str = "group";

pub const EMAIL_MARKER: &str = "email";
pub const PHONE_MARKER: &str = "phone";

/// Scalar fields that must appear at most once in the header.
pub const SCALAR_FIELDS: &[&str] = &[EXTERNAL_ID, FULL_NAME, INVISIBLE, SEE_ALL];

/// Returns true if the column carries an email or phone address.
pub fn is_address_column(name: &str) -> bool {
    name.contains(EMAIL_MARKER) || name.contains(PHONE_MARKER)
}

/// Returns true if the column carries an email address.
///
/// A column whose name mentions both markers is treated as email.
pub fn is_email_column(name: &str) -> bool {
    name.contains(EMAIL_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_columns_match_on_substring() {
        assert!(is_address_column("email"));
        assert!(is_address_column("phone Pedagogical"));
        assert!(is_address_column("email Responsible Parent"));
        assert!(!is_address_column("fullname"));
        assert!(!is_address_column("Email"));
    }
}
