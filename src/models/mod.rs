// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Row, COLUMNS, SelectionState, SelectionPhase, DropdownOption, SliderMark};
pub use requests::{TitleOptionsQuery, FilterRowsQuery, SelectionRequest, SelectionStateInput};
pub use responses::{
    CityOptionsResponse, TitleOptionsResponse, FilterRowsResponse, ColumnsResponse,
    SliderResponse, SelectionResponse, HealthResponse, ErrorResponse,
};
