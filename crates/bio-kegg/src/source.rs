//! The lookup seam consumed by tool handlers.

use async_trait::async_trait;

use crate::types::KeggResult;

/// A KEGG data source.
///
/// `Ok(None)` means the source answered but has nothing for the request.
/// `Err` means the lookup itself failed.
#[async_trait]
pub trait KeggSource: Send + Sync {
    /// Fetch one flat-file record (`get/<entry_id>`).
    async fn get_entry(&self, entry_id: &str) -> KeggResult<Option<String>>;

    /// Search a database (`find/<database>/<query>`).
    async fn find_entries(&self, database: &str, query: &str) -> KeggResult<Option<String>>;

    /// List a whole database (`list/<database>`).
    async fn list_entries(&self, database: &str) -> KeggResult<Option<String>>;
}
