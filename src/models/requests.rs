use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::core::selection::SelectionEvent;
use crate::models::domain::SelectionState;

/// Query for the dependent title dropdown
///
/// GET /api/v1/titles?city={city}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TitleOptionsQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub city: Option<String>,
}

/// Query for the filtered table
///
/// GET /api/v1/rows?title={title}&km={km}
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FilterRowsQuery {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "max_distance_km")]
    pub km: Option<f64>,
}

/// Selection as sent by the page; any part may be left out
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionStateInput {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "max_distance_km")]
    pub km: Option<f64>,
}

impl SelectionStateInput {
    /// Fill in a missing distance with the slider default
    pub fn into_state(self, default_distance_km: f64) -> SelectionState {
        SelectionState {
            city: self.city,
            title: self.title,
            max_distance_km: self.km.unwrap_or(default_distance_km),
        }
    }
}

/// A UI event together with the selection it applies to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub state: Option<SelectionStateInput>,
    pub event: SelectionEvent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_km_uses_slider_default() {
        let req: SelectionRequest = serde_json::from_str(
            r#"{"state": {"city": "Pune"}, "event": {"type": "title_changed", "title": "Engineer"}}"#,
        )
        .unwrap();

        let state = req.state.unwrap_or_default().into_state(2.5);
        assert_eq!(state.city.as_deref(), Some("Pune"));
        assert_eq!(state.max_distance_km, 2.5);
    }

    #[test]
    fn test_explicit_km_kept() {
        let input: SelectionStateInput = serde_json::from_str(r#"{"km": 7.0}"#).unwrap();
        assert_eq!(input.into_state(2.5).max_distance_km, 7.0);
    }
}
