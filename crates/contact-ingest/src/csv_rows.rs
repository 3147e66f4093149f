use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use contact_model::InputRow;

use crate::error::{IngestError, Result};

/// Options controlling how the contact export is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Row source over a delimited contact export.
///
/// Yields one [`InputRow`] per data line. Header names repeated in the file
/// are grouped into a single column holding all of their values. Short
/// records are padded with empty values; a record with more fields than the
/// header ends the stream with [`IngestError::RecordLength`].
pub struct CsvRowSource<R> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    source_name: String,
    record: StringRecord,
    finished: bool,
}

impl CsvRowSource<File> {
    /// Opens the export at `path` and reads its header row.
    pub fn open(path: &Path, options: IngestOptions) -> Result<Self> {
        let reader = builder(options)
            .from_path(path)
            .map_err(|source| IngestError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_csv(reader, path.display().to_string())
    }
}

impl<R: Read> CsvRowSource<R> {
    /// Wraps any reader; `source_name` is only used in error messages.
    pub fn from_reader(reader: R, source_name: impl Into<String>, options: IngestOptions) -> Result<Self> {
        Self::from_csv(builder(options).from_reader(reader), source_name.into())
    }

    fn from_csv(mut reader: csv::Reader<R>, source_name: String) -> Result<Self> {
        let raw = reader
            .headers()
            .map_err(|source| IngestError::Header {
                source_name: source_name.clone(),
                source,
            })?
            .clone();
        let headers: Vec<String> = raw.iter().map(normalize_header).collect();
        if headers.iter().all(String::is_empty) {
            return Err(IngestError::MissingHeader(source_name));
        }
        debug!(source = %source_name, columns = headers.len(), "read csv header");
        Ok(Self {
            reader,
            headers,
            source_name,
            record: StringRecord::new(),
            finished: false,
        })
    }

    /// Normalized header names, duplicates included, in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    fn build_row(&self, line: u64) -> InputRow {
        let mut row = InputRow::new(line);
        for (idx, header) in self.headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = self.record.get(idx).unwrap_or("");
            row.push(header.clone(), normalize_cell(value));
        }
        row
    }
}

impl<R: Read> Iterator for CsvRowSource<R> {
    type Item = Result<InputRow>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.reader.read_record(&mut self.record) {
                Ok(true) => {
                    let line = self
                        .record
                        .position()
                        .map_or_else(|| self.reader.position().line(), csv::Position::line);
                    if self.record.len() > self.headers.len() {
                        self.finished = true;
                        return Some(Err(IngestError::RecordLength {
                            source_name: self.source_name.clone(),
                            line,
                            expected: self.headers.len(),
                            found: self.record.len(),
                        }));
                    }
                    if self.record.iter().all(|value| value.trim().is_empty()) {
                        trace!(line, "skipping blank record");
                        continue;
                    }
                    return Some(Ok(self.build_row(line)));
                }
                Ok(false) => self.finished = true,
                Err(source) => {
                    self.finished = true;
                    return Some(Err(IngestError::Record {
                        source_name: self.source_name.clone(),
                        line: self.reader.position().line(),
                        source,
                    }));
                }
            }
        }
        None
    }
}

/// Reads only the normalized header row of the export at `path`.
pub fn read_headers(path: &Path, options: IngestOptions) -> Result<Vec<String>> {
    Ok(CsvRowSource::open(path, options)?.headers)
}

fn builder(options: IngestOptions) -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .delimiter(options.delimiter);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_whitespace_is_collapsed() {
        assert_eq!(normalize_header("\u{feff} email  Work   Personal "), "email Work Personal");
        assert_eq!(normalize_header("   "), "");
    }
}
