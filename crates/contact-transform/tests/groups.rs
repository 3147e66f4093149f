//! Property tests for group-tag normalization.

use contact_model::ContactRecord;
use contact_transform::{normalize_group_tags, normalize_groups};
use proptest::prelude::*;

fn raw_groups() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ a-cA-C/,]{0,12}", 0..8)
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in raw_groups()) {
        let once = normalize_group_tags(&raw);
        let twice = normalize_group_tags(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalized_groups_are_sorted_unique_and_non_empty(raw in raw_groups()) {
        let groups = normalize_group_tags(&raw);
        prop_assert!(groups.windows(2).all(|pair| pair[0] < pair[1]));
        for group in &groups {
            prop_assert!(!group.is_empty());
            prop_assert_eq!(group.trim(), group.as_str());
            prop_assert!(!group.contains('/') && !group.contains(','));
        }
    }
}

#[test]
fn normalizes_every_record() {
    let mut records = vec![ContactRecord::new("1", "A"), ContactRecord::new("2", "B")];
    records[0].groups = vec!["Sala 2".to_string(), "Sala 1/Sala 2".to_string()];
    records[1].groups = vec![String::new(), " , ".to_string()];

    normalize_groups(&mut records);

    assert_eq!(records[0].groups, vec!["Sala 1", "Sala 2"]);
    assert!(records[1].groups.is_empty());
}
