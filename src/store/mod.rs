//! League data store.
//!
//! The federation's records live in a JSONL data directory, one file per
//! table. This layer is the query capability the standings core reads
//! through: typed loads plus filter-by-foreign-key lookups. The core never
//! writes; [`JsonlWriter`] exists for the `import` command and tests.

mod jsonl;
mod league;

pub use jsonl::{JsonlReader, JsonlWriter, Table};
pub use league::LeagueStore;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Location of the league data directory.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
}

impl StoreConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn table_path(&self, table: Table) -> PathBuf {
        self.data_dir.join(table.filename())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
