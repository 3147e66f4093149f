//! Convert pipeline: ingest rows, merge them, normalize groups.
//!
//! Row-level problems are collected as skipped rows and never stop the run.
//! Ingest failures (unreadable file, malformed CSV) abort it.

use std::path::Path;

use tracing::{debug, info, info_span, trace};

use contact_ingest::{CsvRowSource, IngestError, IngestOptions};
use contact_model::{ContactRecord, InputRow, MergeStats, RowError, RowOutcome};
use contact_transform::{ContactBook, ExtractOptions};

use crate::logging::redact_value;

/// A row that was left out of the result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: RowError,
}

/// Normalized records plus what happened to every input row.
#[derive(Debug)]
pub struct ConvertReport {
    pub records: Vec<ContactRecord>,
    pub stats: MergeStats,
    pub skipped: Vec<SkippedRow>,
}

impl ConvertReport {
    pub fn address_count(&self) -> usize {
        self.records.iter().map(|record| record.addresses.len()).sum()
    }
}

/// Merges rows in order and normalizes the resulting records.
///
/// # Errors
///
/// Returns the first ingest error yielded by `rows`.
pub fn merge_rows<I>(rows: I, options: ExtractOptions) -> Result<ConvertReport, IngestError>
where
    I: IntoIterator<Item = Result<InputRow, IngestError>>,
{
    let mut book = ContactBook::new(options);
    let mut stats = MergeStats::default();
    let mut skipped = Vec::new();

    let merge_span = info_span!("merge");
    merge_span.in_scope(|| -> Result<(), IngestError> {
        for row in rows {
            let row = row?;
            let outcome = book.merge_row(&row);
            stats.record(&outcome);
            match outcome {
                RowOutcome::Created { line, eid, .. } => {
                    if let Some(record) = book.get(&eid) {
                        trace!(line, eid = %eid, name = redact_value(&record.full_name), "new contact");
                    }
                }
                RowOutcome::Merged { .. } => {}
                RowOutcome::Skipped { line, reason } => skipped.push(SkippedRow { line, reason }),
            }
        }
        Ok(())
    })?;
    info!(
        rows = stats.rows,
        records = book.len(),
        merged = stats.merged,
        skipped = stats.skipped,
        "merged rows"
    );

    let records = info_span!("normalize").in_scope(|| book.finish());
    debug!(records = records.len(), "normalized groups");
    Ok(ConvertReport {
        records,
        stats,
        skipped,
    })
}

/// Reads the export at `input` and runs it through [`merge_rows`].
pub fn convert_file(
    input: &Path,
    ingest: IngestOptions,
    extract: ExtractOptions,
) -> Result<ConvertReport, IngestError> {
    let source = info_span!("ingest", input = %input.display())
        .in_scope(|| CsvRowSource::open(input, ingest))?;
    debug!(columns = source.headers().len(), "opened contact export");
    merge_rows(source, extract)
}
