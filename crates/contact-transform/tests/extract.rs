//! Tests for address extraction from tagged columns.

use contact_model::{Address, InputRow};
use contact_transform::{ExtractOptions, SlashSplitMode, extract_addresses};

fn email(tags: &[&str], address: &str) -> Address {
    Address {
        kind: "email".to_string(),
        tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        address: address.to_string(),
    }
}

#[test]
fn slash_separated_emails_become_separate_addresses() {
    let row = InputRow::new(2).with("email Work Personal", "a@b.com/c@d.com");
    let expected = vec![
        email(&["Work", "Personal"], "a@b.com"),
        email(&["Work", "Personal"], "c@d.com"),
    ];

    let split_only = extract_addresses(&row, &ExtractOptions::default());
    assert_eq!(split_only, expected);

    // The whole value never validates, so the legacy pass adds nothing here.
    let legacy = extract_addresses(
        &row,
        &ExtractOptions::new().with_slash_split(SlashSplitMode::Legacy),
    );
    assert_eq!(legacy, expected);
}

#[test]
fn phone_is_rendered_in_national_format() {
    let row = InputRow::new(2).with("phone Home", "11987654321");
    let addresses = extract_addresses(&row, &ExtractOptions::default());
    assert_eq!(addresses.len(), 1);
    let address = &addresses[0];
    assert_eq!(address.kind, "phone");
    assert_eq!(address.tags, vec!["Home"]);
    let digits: String = address.address.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(digits, "11987654321");
    assert_ne!(address.address, "11987654321");
}

#[test]
fn invalid_candidates_are_dropped() {
    let row = InputRow::new(2)
        .with("email Student", "not-an-email")
        .with("phone Student", "123")
        .with("email Parent", "")
        .with("phone Parent", "/");
    assert!(extract_addresses(&row, &ExtractOptions::default()).is_empty());
}

#[test]
fn email_noise_after_space_is_ignored() {
    let row = InputRow::new(2).with("email", "john@example.com (personal)");
    assert_eq!(
        extract_addresses(&row, &ExtractOptions::default()),
        vec![email(&[], "john@example.com")]
    );
}

#[test]
fn keeps_valid_parts_of_a_mixed_cell() {
    let row = InputRow::new(2).with("email Responsible", "broken@/mary@example.com");
    assert_eq!(
        extract_addresses(&row, &ExtractOptions::default()),
        vec![email(&["Responsible"], "mary@example.com")]
    );
}

#[test]
fn repeated_address_columns_are_processed_per_value() {
    let row = InputRow::new(2)
        .with("email Work", "john@example.com")
        .with("fullname", "John")
        .with("email Work", "john@work.example.com");
    assert_eq!(
        extract_addresses(&row, &ExtractOptions::default()),
        vec![
            email(&["Work"], "john@example.com"),
            email(&["Work"], "john@work.example.com"),
        ]
    );
}

#[test]
fn non_address_columns_are_ignored() {
    let row = InputRow::new(2)
        .with("fullname", "john@example.com")
        .with("group", "11987654321");
    assert!(extract_addresses(&row, &ExtractOptions::default()).is_empty());
}
