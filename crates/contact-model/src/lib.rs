pub mod columns;
pub mod error;
pub mod outcome;
pub mod record;
pub mod row;

pub use error::{Result, RowError};
pub use outcome::{MergeStats, RowOutcome};
pub use record::{Address, ContactRecord};
pub use row::{FieldValue, InputRow};
