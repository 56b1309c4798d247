// Core exports
pub mod dataset;
pub mod filters;
pub mod index;
pub mod loader;
pub mod selection;

pub use dataset::Dataset;
pub use filters::{filter_rows, matches_title, within_distance};
pub use index::CityTitleIndex;
pub use loader::{DatasetError, Table};
pub use selection::{apply_event, phase, reduce, SelectionEvent, ViewUpdate};
