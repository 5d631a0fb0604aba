//! Core data types for KEGG entries and listings.

use serde::{Deserialize, Serialize};

/// A reference from one KEGG entry to another, e.g. a gene or pathway row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub name: String,
}

/// A KEGG pathway map (`map00010`, `hsa00010`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pathway {
    pub entry: String,
    pub name: String,
    pub description: String,
    pub class: String,
    pub genes: Vec<Link>,
    pub compounds: Vec<Link>,
}

/// A KEGG compound (`C00002`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Compound {
    pub entry: String,
    pub names: Vec<String>,
    pub formula: String,
    /// Exact mass when KEGG reports one, otherwise the molecular weight.
    pub mass: String,
    pub comment: String,
    pub pathways: Vec<Link>,
    /// EC numbers of enzymes acting on this compound.
    pub enzymes: Vec<String>,
}

impl Compound {
    /// Primary name, or an empty string for unnamed entries.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }
}

/// A KEGG enzyme (`ec:1.1.1.1`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Enzyme {
    pub entry: String,
    pub names: Vec<String>,
    pub class: Vec<String>,
    pub reaction: String,
    pub substrates: Vec<String>,
    pub products: Vec<String>,
    pub comment: String,
}

impl Enzyme {
    /// Primary name, or an empty string for unnamed entries.
    pub fn name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or("")
    }
}

/// One row of a `find` or `list` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRow {
    pub id: String,
    pub label: String,
}

/// One organism from `list/organism`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub code: String,
    pub name: String,
}

impl Organism {
    /// Case-insensitive substring match against the code or the name.
    pub fn matches(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.code.to_lowercase().contains(&needle)
    }
}

/// Errors that can occur while talking to KEGG or reading its records.
#[derive(thiserror::Error, Debug)]
pub enum KeggError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience result type.
pub type KeggResult<T> = Result<T, KeggError>;
