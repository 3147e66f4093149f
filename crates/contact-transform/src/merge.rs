//! Record deduplication by external identifier.
//!
//! Rows are merged in source order. The first row for an `eid` creates the
//! record and fixes its name and flags; later rows only contribute groups and
//! addresses.

use std::collections::HashMap;

use tracing::{debug, warn};

use contact_model::columns::{EXTERNAL_ID, FULL_NAME, GROUP, INVISIBLE, SCALAR_FIELDS, SEE_ALL};
use contact_model::{ContactRecord, FieldValue, InputRow, Result, RowError, RowOutcome};

use crate::extract::extract_addresses;
use crate::groups::normalize_groups;
use crate::options::ExtractOptions;
use crate::validate::{decode_invisible, decode_see_all};

/// Insertion-ordered contact records with an `eid` lookup index.
#[derive(Debug, Default)]
pub struct ContactBook {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
    options: ExtractOptions,
}

impl ContactBook {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
            options,
        }
    }

    /// Merges one row. Rows that cannot be processed are logged and skipped.
    pub fn merge_row(&mut self, row: &InputRow) -> RowOutcome {
        match self.try_merge_row(row) {
            Ok(outcome) => outcome,
            Err(reason) => {
                warn!(line = row.line(), %reason, "skipping row");
                RowOutcome::Skipped {
                    line: row.line(),
                    reason,
                }
            }
        }
    }

    fn try_merge_row(&mut self, row: &InputRow) -> Result<RowOutcome> {
        for &name in SCALAR_FIELDS {
            scalar(row, name)?;
        }
        let eid = scalar(row, EXTERNAL_ID)?.ok_or(RowError::MissingField(EXTERNAL_ID))?;
        if eid.trim().is_empty() {
            return Err(RowError::EmptyIdentifier);
        }
        let groups = group_values(row);
        let addresses = extract_addresses(row, &self.options);
        let address_count = addresses.len();

        if let Some(&position) = self.index.get(eid) {
            let record = &mut self.records[position];
            record.groups.extend(groups);
            record.addresses.extend(addresses);
            debug!(line = row.line(), eid, addresses = address_count, "merged row");
            return Ok(RowOutcome::Merged {
                line: row.line(),
                eid: eid.to_string(),
                addresses: address_count,
            });
        }

        let record = ContactRecord {
            full_name: scalar(row, FULL_NAME)?.unwrap_or_default().to_string(),
            eid: eid.to_string(),
            invisible: decode_invisible(scalar(row, INVISIBLE)?.unwrap_or_default()),
            see_all: decode_see_all(scalar(row, SEE_ALL)?.unwrap_or_default()),
            groups,
            addresses,
        };
        self.index.insert(record.eid.clone(), self.records.len());
        self.records.push(record);
        debug!(line = row.line(), eid, addresses = address_count, "created record");
        Ok(RowOutcome::Created {
            line: row.line(),
            eid: eid.to_string(),
            addresses: address_count,
        })
    }

    pub fn get(&self, eid: &str) -> Option<&ContactRecord> {
        self.index.get(eid).map(|&position| &self.records[position])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalizes every record's groups and hands out the result set.
    pub fn finish(mut self) -> Vec<ContactRecord> {
        normalize_groups(&mut self.records);
        self.records
    }
}

/// Reads a column that must not repeat in the header.
fn scalar<'a>(row: &'a InputRow, name: &'static str) -> Result<Option<&'a str>> {
    match row.get(name) {
        None => Ok(None),
        Some(FieldValue::Single(value)) => Ok(Some(value.as_str())),
        Some(FieldValue::Repeated(_)) => Err(RowError::RepeatedField(name)),
    }
}

fn group_values(row: &InputRow) -> Vec<String> {
    row.get(GROUP)
        .map(|field| field.values().to_vec())
        .unwrap_or_default()
}
