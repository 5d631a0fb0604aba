//! Tab-delimited listings returned by `find/` and `list/`.

use crate::types::{ListingRow, Organism};

/// Parse `id<TAB>label` rows, skipping lines with fewer than two columns.
pub fn parse_listing(text: &str) -> Vec<ListingRow> {
    text.lines()
        .filter_map(|line| {
            let mut parts = line.split('\t');
            let id = parts.next()?;
            let label = parts.next()?;
            Some(ListingRow {
                id: id.to_string(),
                label: label.to_string(),
            })
        })
        .collect()
}

/// Parse `list/organism` rows.
///
/// KEGG returns `T-number, code, name, lineage`; two-column rows are read as `code, name`.
pub fn parse_organisms(text: &str) -> Vec<Organism> {
    text.lines()
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            let (code, name) = match parts.as_slice() {
                [_, code, name, ..] => (*code, *name),
                [code, name] => (*code, *name),
                _ => return None,
            };
            Some(Organism {
                code: code.to_string(),
                name: name.to_string(),
            })
        })
        .collect()
}
