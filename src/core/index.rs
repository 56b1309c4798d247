use crate::core::loader::Table;
use std::collections::HashMap;

/// City -> job titles lookup backing the dependent title dropdown
///
/// Titles keep one entry per row, in row order, so a city with two
/// "Engineer" openings lists "Engineer" twice. Cities are kept in order of
/// first appearance.
#[derive(Debug, Clone, Default)]
pub struct CityTitleIndex {
    entries: Vec<(String, Vec<String>)>,
    positions: HashMap<String, usize>,
}

impl CityTitleIndex {
    /// Build the index with a single pass over the table
    pub fn build(table: &Table) -> Self {
        let mut entries: Vec<(String, Vec<String>)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for row in table {
            match positions.get(row.city()).copied() {
                Some(pos) => entries[pos].1.push(row.title().to_string()),
                None => {
                    positions.insert(row.city().to_string(), entries.len());
                    entries.push((row.city().to_string(), vec![row.title().to_string()]));
                }
            }
        }

        tracing::debug!("Built city index with {} cities", entries.len());

        Self { entries, positions }
    }

    /// Titles for a city, or an empty slice when the city is unknown or unset
    pub fn lookup(&self, city: Option<&str>) -> &[String] {
        city.and_then(|c| self.positions.get(c))
            .map(|&pos| self.entries[pos].1.as_slice())
            .unwrap_or(&[])
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(city, _)| city.as_str())
    }

    pub fn contains(&self, city: &str) -> bool {
        self.positions.contains_key(city)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
