use serde::{Deserialize, Serialize};
use crate::core::selection::ViewUpdate;
use crate::models::domain::{DropdownOption, Row, SelectionPhase, SelectionState, SliderMark};

/// Response for the city dropdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityOptionsResponse {
    pub options: Vec<DropdownOption>,
}

/// Response for the title dropdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleOptionsResponse {
    pub city: Option<String>,
    pub options: Vec<DropdownOption>,
}

/// Response for the filtered table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRowsResponse {
    pub rows: Vec<Row>,
    pub total_rows: usize,
}

/// Table header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsResponse {
    pub columns: Vec<String>,
}

/// Distance slider bounds and marks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderResponse {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    pub marks: Vec<SliderMark>,
}

/// Result of applying one UI event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResponse {
    pub state: SelectionState,
    pub phase: SelectionPhase,
    pub update: ViewUpdate,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub rows_loaded: usize,
    pub cities: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}
