//! Output records produced by the contact normalizer.

use serde::{Deserialize, Serialize};

/// One validated email or phone contact point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Address kind taken from the first token of the column name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Remaining column-name tokens, in header order.
    pub tags: Vec<String>,
    pub address: String,
}

/// Normalized entry for one person, keyed by external identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(rename = "fullname")]
    pub full_name: String,
    pub eid: String,
    pub invisible: bool,
    pub see_all: bool,
    /// Raw group tags while merging; sorted and unique once normalized.
    pub groups: Vec<String>,
    pub addresses: Vec<Address>,
}

impl ContactRecord {
    pub fn new(eid: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            eid: eid.into(),
            invisible: false,
            see_all: false,
            groups: Vec::new(),
            addresses: Vec::new(),
        }
    }
}
