//! Group-tag cleanup run once over the merged records.

use std::collections::BTreeSet;

use contact_model::ContactRecord;

/// Separators used by compound group cells such as `"Sala 1 / Sala 2"`.
const GROUP_DELIMITERS: [char; 2] = ['/', ','];

/// Splits compound tags, trims and drops empty pieces, then dedupes and sorts.
pub fn normalize_group_tags(raw: &[String]) -> Vec<String> {
    let tags: BTreeSet<&str> = raw
        .iter()
        .flat_map(|entry| entry.split(GROUP_DELIMITERS))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();
    tags.into_iter().map(str::to_string).collect()
}

/// Replaces every record's raw groups with their normalized form.
pub fn normalize_groups(records: &mut [ContactRecord]) {
    for record in records {
        record.groups = normalize_group_tags(&record.groups);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    #[test]
    fn splits_compound_entries() {
        let raw = tags(&["Sala 1 / Sala 2", "", "Sala 3, Sala 1", "  Noturno "]);
        assert_eq!(
            normalize_group_tags(&raw),
            tags(&["Noturno", "Sala 1", "Sala 2", "Sala 3"])
        );
    }

    #[test]
    fn drops_empty_pieces_of_compound_entries() {
        let raw = tags(&["Sala 1,,", "/", " , "]);
        assert_eq!(normalize_group_tags(&raw), tags(&["Sala 1"]));
    }
}
