//! Match dashboard - interactive filtering over applicant/job-opening matches
//!
//! The dataset is loaded once at startup into an immutable table. A city to
//! title index feeds the dependent dropdown, and every UI interaction is a
//! pure recomputation over that table.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{Dataset, DatasetError, Table, CityTitleIndex, filter_rows, SelectionEvent};
pub use crate::models::{Row, SelectionState, SelectionPhase, COLUMNS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let dataset = Dataset::new(Table::default());
        assert!(dataset.lookup(Some("Pune")).is_empty());
        assert_eq!(COLUMNS.len(), 13);
    }
}
