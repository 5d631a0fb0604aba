//! KEGG DBGET flat-file reader.
//!
//! A record is a sequence of fields. Each field starts with an upper-case tag in
//! the first 12 columns; indented lines continue the previous field. `///` ends
//! the record.

use crate::types::{KeggError, KeggResult, Link};

/// Width of the tag column.
const TAG_WIDTH: usize = 12;

/// Record terminator.
const TERMINATOR: &str = "///";

/// A parsed flat-file record: ordered `(tag, lines)` fields.
#[derive(Debug, Clone, Default)]
pub struct FlatRecord {
    fields: Vec<(String, Vec<String>)>,
}

impl FlatRecord {
    /// Parse one record. Fails if the text has no `ENTRY` field.
    pub fn parse(text: &str) -> KeggResult<Self> {
        let mut fields: Vec<(String, Vec<String>)> = Vec::new();

        for line in text.lines() {
            if line.starts_with(TERMINATOR) {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            let (tag, value) = split_tag(line);
            let value = value.trim();
            let starts_field = !line.starts_with(char::is_whitespace) && !tag.is_empty();

            if starts_field {
                let lines = if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.to_string()]
                };
                fields.push((tag.to_string(), lines));
            } else if let Some((_, lines)) = fields.last_mut() {
                if !value.is_empty() {
                    lines.push(value.to_string());
                }
            }
        }

        let record = Self { fields };
        if record.get("ENTRY").is_none() {
            return Err(KeggError::Parse("missing ENTRY field".to_string()));
        }
        Ok(record)
    }

    /// Lines of the first field with this tag.
    pub fn get(&self, tag: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, lines)| lines.as_slice())
    }

    /// Field lines joined with single spaces; empty when absent.
    pub fn text(&self, tag: &str) -> String {
        self.get(tag).map(|lines| lines.join(" ")).unwrap_or_default()
    }

    /// Entry identifier. Enzyme entries read `EC 1.1.1.1`, so the `EC` marker is skipped.
    pub fn entry_id(&self) -> String {
        let entry = self.text("ENTRY");
        let mut tokens = entry.split_whitespace();
        match tokens.next() {
            Some("EC") => tokens.next().unwrap_or("").to_string(),
            Some(first) => first.to_string(),
            None => String::new(),
        }
    }

    /// `id  name` rows, one per line.
    pub fn links(&self, tag: &str) -> Vec<Link> {
        self.get(tag)
            .unwrap_or_default()
            .iter()
            .filter_map(|line| {
                let line = line.trim();
                let (id, name) = match line.split_once(char::is_whitespace) {
                    Some((id, name)) => (id, name.trim()),
                    None => (line, ""),
                };
                (!id.is_empty()).then(|| Link {
                    id: id.to_string(),
                    name: name.to_string(),
                })
            })
            .collect()
    }

    /// Semicolon-separated list spread across lines (`NAME`, `SUBSTRATE`, ...).
    pub fn list(&self, tag: &str) -> Vec<String> {
        self.text(tag)
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whitespace-separated tokens across all lines (`ENZYME` in compound records).
    pub fn tokens(&self, tag: &str) -> Vec<String> {
        self.get(tag)
            .unwrap_or_default()
            .iter()
            .flat_map(|line| line.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    /// Field tags in record order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(tag, _)| tag.as_str())
    }
}

/// Split a line into its tag column and value, respecting char boundaries.
fn split_tag(line: &str) -> (&str, &str) {
    match line.char_indices().nth(TAG_WIDTH) {
        Some((idx, _)) => (line[..idx].trim(), &line[idx..]),
        None => (line.trim(), ""),
    }
}
