//! Address extraction from tagged email/phone columns.
//!
//! An address column name is split on whitespace: the first token is the
//! address type and the rest are free-form tags, so `"email Work Personal"`
//! yields addresses of type `email` tagged `["Work", "Personal"]`.

use tracing::trace;

use contact_model::columns::{
    EXTERNAL_ID, FULL_NAME, GROUP, INVISIBLE, SEE_ALL, is_address_column, is_email_column,
};
use contact_model::{Address, InputRow};

use crate::options::{ExtractOptions, SlashSplitMode};
use crate::validate::{format_phone_national, is_valid_email};

/// Which validator an address column goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressChannel {
    Email,
    Phone,
}

/// How a header column is consumed by the merger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnRole {
    FullName,
    ExternalId,
    Invisible,
    SeeAll,
    Group,
    Address {
        channel: AddressChannel,
        kind: String,
        tags: Vec<String>,
    },
    Ignored,
}

/// Classifies a normalized header name.
pub fn classify_column(name: &str) -> ColumnRole {
    match name {
        FULL_NAME => ColumnRole::FullName,
        EXTERNAL_ID => ColumnRole::ExternalId,
        INVISIBLE => ColumnRole::Invisible,
        SEE_ALL => ColumnRole::SeeAll,
        GROUP => ColumnRole::Group,
        _ if is_address_column(name) => {
            let mut tokens = name.split_whitespace().map(str::to_string);
            let kind = tokens.next().unwrap_or_default();
            ColumnRole::Address {
                channel: if is_email_column(name) {
                    AddressChannel::Email
                } else {
                    AddressChannel::Phone
                },
                kind,
                tags: tokens.collect(),
            }
        }
        _ => ColumnRole::Ignored,
    }
}

/// Extracts every valid address carried by the row, in column order.
///
/// Invalid candidates are dropped without error.
pub fn extract_addresses(row: &InputRow, options: &ExtractOptions) -> Vec<Address> {
    let mut addresses = Vec::new();
    for (name, field) in row.columns() {
        let ColumnRole::Address {
            channel,
            kind,
            tags,
        } = classify_column(name)
        else {
            continue;
        };
        for value in field.values() {
            for candidate in candidates(value, channel, options.slash_split) {
                match normalize_candidate(candidate, channel, options) {
                    Some(address) => addresses.push(Address {
                        kind: kind.clone(),
                        tags: tags.clone(),
                        address,
                    }),
                    None => trace!(line = row.line(), column = name, "dropped invalid address"),
                }
            }
        }
    }
    addresses
}

/// Splits a raw cell into the candidate addresses it may hold.
fn candidates(value: &str, channel: AddressChannel, mode: SlashSplitMode) -> Vec<&str> {
    // Anything after the first space in an email cell is noise.
    let value = match channel {
        AddressChannel::Email => value.split(' ').next().unwrap_or_default(),
        AddressChannel::Phone => value,
    };
    if !value.contains('/') {
        return vec![value];
    }
    let mut parts: Vec<&str> = value.split('/').collect();
    if mode == SlashSplitMode::Legacy {
        parts.push(value);
    }
    parts
}

fn normalize_candidate(
    candidate: &str,
    channel: AddressChannel,
    options: &ExtractOptions,
) -> Option<String> {
    if candidate.is_empty() {
        return None;
    }
    match channel {
        AddressChannel::Email => is_valid_email(candidate).then(|| candidate.to_string()),
        AddressChannel::Phone => format_phone_national(candidate, options.phone_region),
    }
}
