use crate::error::RowError;

/// Result of merging one input row into the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// The row introduced a new external identifier.
    Created {
        line: u64,
        eid: String,
        addresses: usize,
    },
    /// The row was folded into an existing record.
    Merged {
        line: u64,
        eid: String,
        addresses: usize,
    },
    /// The row could not be processed and was left out.
    Skipped { line: u64, reason: RowError },
}

impl RowOutcome {
    pub fn line(&self) -> u64 {
        match self {
            Self::Created { line, .. } | Self::Merged { line, .. } | Self::Skipped { line, .. } => {
                *line
            }
        }
    }

    pub fn eid(&self) -> Option<&str> {
        match self {
            Self::Created { eid, .. } | Self::Merged { eid, .. } => Some(eid),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    pub fn skip_reason(&self) -> Option<&RowError> {
        match self {
            Self::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Running totals over a sequence of [`RowOutcome`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub rows: usize,
    pub created: usize,
    pub merged: usize,
    pub skipped: usize,
    pub addresses: usize,
}

impl MergeStats {
    pub fn record(&mut self, outcome: &RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Created { addresses, .. } => {
                self.created += 1;
                self.addresses += addresses;
            }
            RowOutcome::Merged { addresses, .. } => {
                self.merged += 1;
                self.addresses += addresses;
            }
            RowOutcome::Skipped { .. } => self.skipped += 1,
        }
    }
}
