//! Contact normalization.
//!
//! This crate turns flat contact rows into merged, normalized records:
//!
//! - **validate**: email syntax, phone numbering plan and tri-state flag decoding
//! - **extract**: email/phone addresses from tagged columns
//! - **merge**: record deduplication by external identifier
//! - **groups**: group-tag splitting, deduplication and sorting
//! - **options**: extraction behavior configuration

pub mod extract;
pub mod groups;
pub mod merge;
pub mod options;
pub mod validate;

pub use extract::{AddressChannel, ColumnRole, classify_column, extract_addresses};
pub use groups::{normalize_group_tags, normalize_groups};
pub use merge::ContactBook;
pub use options::{DEFAULT_PHONE_REGION, ExtractOptions, SlashSplitMode};
pub use validate::{
    decode_invisible, decode_see_all, format_phone_national, is_valid_email, is_valid_phone,
};
