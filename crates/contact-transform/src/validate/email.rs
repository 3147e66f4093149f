//! Email syntax validation.

use std::sync::LazyLock;

use regex::Regex;

/// Local part (dotted atoms or a quoted string) followed by a dotted domain
/// or a bracketed IPv4 literal.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-z0-9-]+\.)+[a-z]{2,}))$"#,
    )
    .expect("Invalid email regex")
});

/// Returns true if `value` looks like a deliverable email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("johndoe@example.com"));
        assert!(is_valid_email("John.Doe@Example.COM.br"));
        assert!(is_valid_email("\"john doe\"@example.com"));
        assert!(is_valid_email("john@[192.168.0.1]"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("john@example"));
        assert!(!is_valid_email("john..doe@example.com"));
        assert!(!is_valid_email("a@b.com/c@d.com"));
        assert!(!is_valid_email("john doe@example.com"));
    }
}
