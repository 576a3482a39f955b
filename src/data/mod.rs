//! Dataset loading and in-memory storage

use std::path::Path;

use crate::config::Config;
use crate::error::Result;

pub mod loader;
pub mod model;

pub use loader::load_table;
pub use model::{CellValue, ShortlistEntry, TableView, WinnerRecord};

/// Both source tables, loaded once at startup and shared across handlers.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub winners: Vec<WinnerRecord>,
    pub shortlist: Vec<ShortlistEntry>,
}

impl Dataset {
    /// Load the winners and shortlist tables from the resolved data folder.
    pub fn load(config: &Config) -> Result<Self> {
        Self::load_from(&config.winners_path(), &config.shortlist_path())
    }

    /// Load the tables from explicit paths.
    pub fn load_from(winners_path: &Path, shortlist_path: &Path) -> Result<Self> {
        let winners = load_table(winners_path)?;
        let shortlist = load_table(shortlist_path)?;
        Ok(Dataset { winners, shortlist })
    }

    /// Project a named raw table for the browsing API.
    /// Returns `None` for unknown table names.
    pub fn table(&self, name: &str) -> Option<TableView> {
        match name {
            "winners" => Some(TableView {
                columns: WinnerRecord::table_columns(),
                rows: self.winners.iter().map(|r| r.table_row()).collect(),
            }),
            "shortlist" => Some(TableView {
                columns: ShortlistEntry::table_columns(),
                rows: self.shortlist.iter().map(|r| r.table_row()).collect(),
            }),
            _ => None,
        }
    }
}
