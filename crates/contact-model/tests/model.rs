//! Tests for contact-model types.

use contact_model::{Address, ContactRecord, MergeStats, RowError, RowOutcome};

#[test]
fn merge_stats_count_each_outcome() {
    let outcomes = vec![
        RowOutcome::Created {
            line: 2,
            eid: "1".to_string(),
            addresses: 2,
        },
        RowOutcome::Merged {
            line: 3,
            eid: "1".to_string(),
            addresses: 1,
        },
        RowOutcome::Skipped {
            line: 4,
            reason: RowError::MissingField("eid"),
        },
    ];
    let mut stats = MergeStats::default();
    for outcome in &outcomes {
        stats.record(outcome);
    }
    assert_eq!(
        stats,
        MergeStats {
            rows: 3,
            created: 1,
            merged: 1,
            skipped: 1,
            addresses: 3,
        }
    );
    assert_eq!(outcomes[1].line(), 3);
    assert_eq!(outcomes[1].eid(), Some("1"));
}

#[test]
fn record_round_trips_through_json() {
    let mut record = ContactRecord::new("1234", "John Doe");
    record.groups = vec!["Sala 1".to_string()];
    record.addresses.push(Address {
        kind: "phone".to_string(),
        tags: vec!["Pedagogical".to_string(), "Responsible".to_string()],
        address: "(11) 98765-4321".to_string(),
    });
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.contains("\"type\":\"phone\""));
    let round: ContactRecord = serde_json::from_str(&json).expect("deserialize record");
    assert_eq!(round, record);
}

#[test]
fn row_errors_describe_the_column() {
    assert_eq!(
        RowError::RepeatedField("fullname").to_string(),
        "column `fullname` appears more than once"
    );
    assert_eq!(
        RowError::MissingField("eid").to_string(),
        "missing required column `eid`"
    );
}
