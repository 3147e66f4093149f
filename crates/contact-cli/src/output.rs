//! Tab-indented JSON rendering of the normalized result set.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use contact_model::ContactRecord;

/// Serializes the records as a JSON array indented with tabs.
pub fn render_json(records: &[ContactRecord]) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Writes the records to `path`, creating parent directories as needed.
pub fn write_json(path: &Path, records: &[ContactRecord]) -> Result<()> {
    let bytes = render_json(records).context("serialize contacts")?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory: {}", parent.display()))?;
    }
    fs::write(path, &bytes).with_context(|| format!("write output: {}", path.display()))?;
    info!(path = %path.display(), records = records.len(), bytes = bytes.len(), "wrote contacts");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_set_renders_as_empty_array() {
        let bytes = render_json(&[]).expect("render");
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn nested_values_are_tab_indented() {
        let record = ContactRecord::new("1", "John");
        let text = String::from_utf8(render_json(&[record]).expect("render")).expect("utf8");
        assert!(text.starts_with("[\n\t{\n\t\t\"fullname\": \"John\""));
        assert!(text.contains("\t\t\"groups\": [],"));
    }
}
