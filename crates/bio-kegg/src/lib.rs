//! BioKegg: KEGG REST client and flat-file parsers for pathways, compounds, enzymes, and organisms.

pub mod client;
pub mod entries;
pub mod flatfile;
pub mod listing;
pub mod source;
pub mod types;

pub use client::{KeggClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use flatfile::FlatRecord;
pub use listing::{parse_listing, parse_organisms};
pub use source::KeggSource;
pub use types::*;
