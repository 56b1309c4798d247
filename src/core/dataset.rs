use crate::core::filters::filter_rows;
use crate::core::index::CityTitleIndex;
use crate::core::loader::{DatasetError, Table};
use crate::models::Row;
use chrono::{DateTime, Utc};
use std::path::Path;

/// The loaded table together with everything derived from it at startup
///
/// Never mutated after construction; request handlers share it behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    index: CityTitleIndex,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    pub fn new(table: Table) -> Self {
        let index = CityTitleIndex::build(&table);
        Self {
            table,
            index,
            loaded_at: Utc::now(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        Table::from_path(path).map(Self::new)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn index(&self) -> &CityTitleIndex {
        &self.index
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn lookup(&self, city: Option<&str>) -> &[String] {
        self.index.lookup(city)
    }

    pub fn filter(&self, title: Option<&str>, max_distance_km: f64) -> Vec<&Row> {
        filter_rows(&self.table, title, max_distance_km)
    }
}
