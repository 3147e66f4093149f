//! Contact export ingestion.
//!
//! Reads a delimited file with a header row and yields one
//! [`contact_model::InputRow`] per data line, in file order.

pub mod csv_rows;
pub mod error;

pub use csv_rows::{CsvRowSource, IngestOptions, read_headers};
pub use error::{IngestError, Result};
