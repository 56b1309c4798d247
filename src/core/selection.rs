//! Dashboard interaction state machine
//!
//! Each UI event is reduced into a new [`SelectionState`] and then the
//! outputs that depend on that event are recomputed. Which outputs depend on
//! which event is declared once in [`HANDLERS`]; every recomputation is a
//! pure function of the dataset and the new state.

use crate::core::dataset::Dataset;
use crate::models::{DropdownOption, Row, SelectionPhase, SelectionState};
use serde::{Deserialize, Serialize};

/// A single user interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionEvent {
    CityChanged {
        #[serde(default)]
        city: Option<String>,
    },
    TitleChanged {
        #[serde(default)]
        title: Option<String>,
    },
    DistanceChanged {
        km: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    City,
    Title,
    Distance,
}

/// A recomputable piece of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    TitleOptions,
    Rows,
    SliderLabel,
}

/// Event -> outputs to recompute
pub const HANDLERS: &[(EventKind, &[Output])] = &[
    (EventKind::City, &[Output::TitleOptions, Output::Rows]),
    (EventKind::Title, &[Output::Rows]),
    (EventKind::Distance, &[Output::Rows, Output::SliderLabel]),
];

/// Recomputed outputs; `None` means unchanged by the event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_options: Option<Vec<DropdownOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_label: Option<String>,
}

impl SelectionEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            SelectionEvent::CityChanged { .. } => EventKind::City,
            SelectionEvent::TitleChanged { .. } => EventKind::Title,
            SelectionEvent::DistanceChanged { .. } => EventKind::Distance,
        }
    }
}

/// Outputs that depend on an event kind
pub fn outputs_for(kind: EventKind) -> &'static [Output] {
    HANDLERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, outputs)| *outputs)
        .unwrap_or(&[])
}

/// Current position in the city -> title -> table flow
pub fn phase(state: &SelectionState) -> SelectionPhase {
    match (&state.city, &state.title) {
        (_, Some(_)) => SelectionPhase::TitleSelected,
        (Some(_), None) => SelectionPhase::CitySelected,
        (None, None) => SelectionPhase::NoCitySelected,
    }
}

/// Apply an event to the selection
///
/// Choosing a city clears the title, since the previous title may not be
/// offered for the new city. Empty strings count as "nothing selected".
pub fn reduce(state: &SelectionState, event: &SelectionEvent) -> SelectionState {
    let mut next = state.clone();
    match event {
        SelectionEvent::CityChanged { city } => {
            next.city = non_empty(city);
            next.title = None;
        }
        SelectionEvent::TitleChanged { title } => {
            next.title = non_empty(title);
        }
        SelectionEvent::DistanceChanged { km } => {
            next.max_distance_km = *km;
        }
    }
    next
}

/// Reduce the event and recompute every output that depends on it
///
/// A title the selected city does not offer (including any title while no
/// city is selected) is ignored: the state is left as it was and the table
/// is emptied.
pub fn apply_event(
    dataset: &Dataset,
    state: &SelectionState,
    event: &SelectionEvent,
) -> (SelectionState, ViewUpdate) {
    if let SelectionEvent::TitleChanged { title: Some(title) } = event {
        if !title.is_empty() && !is_offered(dataset, state.city.as_deref(), title) {
            tracing::debug!("Ignoring title {:?} not offered for city {:?}", title, state.city);
            let update = ViewUpdate {
                rows: Some(Vec::new()),
                ..ViewUpdate::default()
            };
            return (state.clone(), update);
        }
    }

    let next = reduce(state, event);
    let mut update = ViewUpdate::default();

    for output in outputs_for(event.kind()) {
        match output {
            Output::TitleOptions => update.title_options = Some(title_options(dataset, &next)),
            Output::Rows => update.rows = Some(table_rows(dataset, &next)),
            Output::SliderLabel => update.slider_label = Some(slider_label(&next)),
        }
    }

    tracing::debug!(
        "Applied {:?}: phase={:?}, outputs={:?}",
        event.kind(),
        phase(&next),
        outputs_for(event.kind())
    );

    (next, update)
}

/// Title dropdown entries for the selected city
pub fn title_options(dataset: &Dataset, state: &SelectionState) -> Vec<DropdownOption> {
    dataset
        .lookup(state.city.as_deref())
        .iter()
        .map(|title| DropdownOption::new(title))
        .collect()
}

/// Table contents for the selected title and distance
pub fn table_rows(dataset: &Dataset, state: &SelectionState) -> Vec<Row> {
    dataset
        .filter(state.title.as_deref(), state.max_distance_km)
        .into_iter()
        .cloned()
        .collect()
}

pub fn slider_label(state: &SelectionState) -> String {
    format!("You have selected {}", state.max_distance_km)
}

/// Whether `title` is one of the dropdown options for `city`
pub fn is_offered(dataset: &Dataset, city: Option<&str>, title: &str) -> bool {
    dataset.lookup(city).iter().any(|t| t == title)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
