//! Typed views over flat-file records.

use crate::flatfile::FlatRecord;
use crate::types::{Compound, Enzyme, KeggResult, Pathway};

impl Pathway {
    /// Parse a pathway record (`get/<pathway id>`).
    pub fn parse(text: &str) -> KeggResult<Self> {
        let record = FlatRecord::parse(text)?;
        Ok(Self {
            entry: record.entry_id(),
            name: record.text("NAME"),
            description: record.text("DESCRIPTION"),
            class: record.text("CLASS"),
            genes: record.links("GENE"),
            compounds: record.links("COMPOUND"),
        })
    }
}

impl Compound {
    /// Parse a compound record (`get/<compound id>`).
    pub fn parse(text: &str) -> KeggResult<Self> {
        let record = FlatRecord::parse(text)?;
        let mass = match record.text("EXACT_MASS") {
            exact if exact.is_empty() => record.text("MOL_WEIGHT"),
            exact => exact,
        };
        Ok(Self {
            entry: record.entry_id(),
            names: record.list("NAME"),
            formula: record.text("FORMULA"),
            mass,
            comment: record.text("COMMENT"),
            pathways: record.links("PATHWAY"),
            enzymes: record.tokens("ENZYME"),
        })
    }
}

impl Enzyme {
    /// Parse an enzyme record (`get/ec:<number>`).
    pub fn parse(text: &str) -> KeggResult<Self> {
        let record = FlatRecord::parse(text)?;
        Ok(Self {
            entry: record.entry_id(),
            names: record.list("NAME"),
            class: record.list("CLASS"),
            reaction: record.text("REACTION"),
            substrates: record.list("SUBSTRATE"),
            products: record.list("PRODUCT"),
            comment: record.text("COMMENT"),
        })
    }
}
