use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Color, Table};
use tracing::{info, info_span};

use contact_cli::output::write_json;
use contact_cli::pipeline::convert_file;
use contact_ingest::{IngestOptions, read_headers};
use contact_model::columns::SCALAR_FIELDS;
use contact_transform::{AddressChannel, ColumnRole, ExtractOptions, SlashSplitMode, classify_column};

use crate::cli::{ColumnsArgs, ConvertArgs};
use crate::summary::{apply_table_style, header_cell};
use crate::types::ConvertResult;

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let convert_span = info_span!("convert", input = %args.input.display());
    let _convert_guard = convert_span.enter();
    let started = Instant::now();

    let ingest = IngestOptions::new().with_delimiter(delimiter_byte(args.delimiter)?);
    let slash_split = if args.legacy_slash_split {
        SlashSplitMode::Legacy
    } else {
        SlashSplitMode::SplitOnly
    };
    let extract = ExtractOptions::new().with_slash_split(slash_split);

    let report = convert_file(&args.input, ingest, extract)
        .with_context(|| format!("convert {}", args.input.display()))?;

    let output = if args.dry_run {
        info!("dry run, output not written");
        None
    } else {
        info_span!("output", path = %args.output.display())
            .in_scope(|| write_json(&args.output, &report.records))?;
        Some(args.output.clone())
    };
    info!(
        records = report.records.len(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "conversion finished"
    );
    Ok(ConvertResult {
        input: args.input.clone(),
        output,
        report,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let options = IngestOptions::new().with_delimiter(delimiter_byte(args.delimiter)?);
    let headers = read_headers(&args.input, options)
        .with_context(|| format!("read header: {}", args.input.display()))?;

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Role"),
        header_cell("Type"),
        header_cell("Tags"),
    ]);
    apply_table_style(&mut table);
    let mut seen: Vec<&str> = Vec::new();
    for header in &headers {
        if header.is_empty() || seen.contains(&header.as_str()) {
            continue;
        }
        seen.push(header);
        let occurrences = headers.iter().filter(|name| *name == header).count();
        let (role, kind, tags) = describe_role(&classify_column(header));
        let role_cell = if occurrences > 1 && SCALAR_FIELDS.contains(&header.as_str()) {
            Cell::new(format!("{role} (repeated, rows will be skipped)")).fg(Color::Red)
        } else if occurrences > 1 {
            Cell::new(format!("{role} (x{occurrences})"))
        } else if role == "ignored" {
            Cell::new(role).fg(Color::DarkGrey)
        } else {
            Cell::new(role)
        };
        table.add_row(vec![Cell::new(header), role_cell, Cell::new(kind), Cell::new(tags)]);
    }
    println!("{table}");
    Ok(())
}

fn describe_role(role: &ColumnRole) -> (&'static str, String, String) {
    let field = |name: &'static str| (name, "-".to_string(), "-".to_string());
    match role {
        ColumnRole::FullName => field("full name"),
        ColumnRole::ExternalId => field("external id"),
        ColumnRole::Invisible => field("invisible flag"),
        ColumnRole::SeeAll => field("see-all flag"),
        ColumnRole::Group => field("groups"),
        ColumnRole::Address {
            channel,
            kind,
            tags,
        } => {
            let label = match channel {
                AddressChannel::Email => "email address",
                AddressChannel::Phone => "phone address",
            };
            let tags = if tags.is_empty() {
                "-".to_string()
            } else {
                tags.join(", ")
            };
            (label, kind.clone(), tags)
        }
        ColumnRole::Ignored => field("ignored"),
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {delimiter:?}");
    }
    Ok(u8::try_from(delimiter)?)
}
