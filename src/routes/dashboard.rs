use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::SliderSettings;
use crate::core::{selection, Dataset};
use crate::models::{
    CityOptionsResponse, ColumnsResponse, DropdownOption, ErrorResponse, FilterRowsQuery,
    FilterRowsResponse, HealthResponse, SelectionRequest, SelectionResponse,
    SliderMark, SliderResponse, TitleOptionsQuery, TitleOptionsResponse, COLUMNS,
};
use std::sync::Arc;

/// Application state shared across all handlers
///
/// Everything here is read-only; per-user selections travel with requests.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub slider: SliderSettings,
}

/// Configure all dashboard API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/columns", web::get().to(columns))
        .route("/cities", web::get().to(city_options))
        .route("/titles", web::get().to(title_options))
        .route("/rows", web::get().to(filter_rows))
        .route("/slider", web::get().to(slider))
        .route("/selection", web::post().to(apply_selection));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        rows_loaded: state.dataset.table().len(),
        cities: state.dataset.index().len(),
        loaded_at: state.dataset.loaded_at(),
        timestamp: chrono::Utc::now(),
    })
}

/// Table header, in row field order
async fn columns() -> impl Responder {
    HttpResponse::Ok().json(ColumnsResponse {
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
    })
}

/// City dropdown options
///
/// GET /api/v1/cities
async fn city_options(state: web::Data<AppState>) -> impl Responder {
    let options = state
        .dataset
        .index()
        .cities()
        .map(DropdownOption::new)
        .collect();

    HttpResponse::Ok().json(CityOptionsResponse { options })
}

/// Title dropdown options for a city
///
/// GET /api/v1/titles?city={city}
///
/// Unknown or missing cities yield an empty list.
async fn title_options(
    state: web::Data<AppState>,
    query: web::Query<TitleOptionsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let query = query.into_inner();
    let options = state
        .dataset
        .lookup(query.city.as_deref())
        .iter()
        .map(|title| DropdownOption::new(title))
        .collect();

    HttpResponse::Ok().json(TitleOptionsResponse {
        city: query.city,
        options,
    })
}

/// Filtered table
///
/// GET /api/v1/rows?title={title}&km={km}
///
/// A missing `km` uses the slider default; a missing title returns no rows.
async fn filter_rows(
    state: web::Data<AppState>,
    query: web::Query<FilterRowsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_error(errors);
    }

    let km = query.km.unwrap_or(state.slider.default);
    let rows: Vec<_> = state
        .dataset
        .filter(query.title.as_deref(), km)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!("Filter title={:?} km={} -> {} rows", query.title, km, rows.len());

    HttpResponse::Ok().json(FilterRowsResponse {
        total_rows: rows.len(),
        rows,
    })
}

/// Slider bounds and labelled marks
async fn slider(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(slider_response(&state.slider))
}

const MARK_INTERVAL_KM: f64 = 5.0;
const MAX_MARKS: usize = 40;

fn slider_mark(value: f64) -> SliderMark {
    SliderMark {
        value,
        label: format!("{} km", value),
        color: None,
    }
}

/// Marks every 5 km from `min`, plus one at `max`
///
/// Wide ranges space the marks out so there are never more than
/// `MAX_MARKS + 1` of them.
pub fn slider_response(settings: &SliderSettings) -> SliderResponse {
    let mut marks = Vec::new();
    let span = settings.max - settings.min;

    if span.is_finite() && span > 0.0 {
        let interval = MARK_INTERVAL_KM.max(span / MAX_MARKS as f64);
        for i in 0..MAX_MARKS {
            let value = settings.min + i as f64 * interval;
            if value >= settings.max {
                break;
            }
            marks.push(slider_mark(value));
        }
        marks.push(slider_mark(settings.max));
    } else {
        marks.push(slider_mark(settings.min));
    }

    if let Some(first) = marks.first_mut() {
        first.color = Some("#77b0b1".to_string());
    }
    if let Some(last) = marks.last_mut() {
        last.color = Some("#f50".to_string());
    }

    SliderResponse {
        min: settings.min,
        max: settings.max,
        step: settings.step,
        default: settings.default,
        marks,
    }
}

/// Apply one UI event
///
/// POST /api/v1/selection
///
/// Request body:
/// ```json
/// {
///   "state": { "city": "Pune", "title": null, "km": 0 },
///   "event": { "type": "title_changed", "title": "Engineer" }
/// }
/// ```
async fn apply_selection(
    state: web::Data<AppState>,
    req: web::Json<SelectionRequest>,
) -> impl Responder {
    let req = req.into_inner();
    let current = req
        .state
        .unwrap_or_default()
        .into_state(state.slider.default);

    let (next, update) = selection::apply_event(&state.dataset, &current, &req.event);

    HttpResponse::Ok().json(SelectionResponse {
        phase: selection::phase(&next),
        state: next,
        update,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slider_marks() {
        let response = slider_response(&SliderSettings::default());

        let values: Vec<f64> = response.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(response.marks[0].label, "0 km");
        assert_eq!(response.marks[0].color.as_deref(), Some("#77b0b1"));
        assert_eq!(response.marks[4].color.as_deref(), Some("#f50"));
        assert_eq!(response.marks[2].color, None);
        assert_eq!(response.step, 0.5);
    }

    #[test]
    fn test_uneven_max_gets_end_mark() {
        let settings = SliderSettings { max: 22.0, ..SliderSettings::default() };
        let response = slider_response(&settings);

        let values: Vec<f64> = response.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 5.0, 10.0, 15.0, 20.0, 22.0]);
        assert_eq!(response.marks[4].color, None);
        assert_eq!(response.marks[5].label, "22 km");
        assert_eq!(response.marks[5].color.as_deref(), Some("#f50"));
    }

    #[test]
    fn test_huge_range_is_bounded() {
        let settings = SliderSettings { max: 1e17, ..SliderSettings::default() };
        let response = slider_response(&settings);

        assert!(response.marks.len() <= MAX_MARKS + 1);
        assert_eq!(response.marks.last().map(|m| m.value), Some(1e17));
    }

    #[test]
    fn test_degenerate_range_has_single_mark() {
        let settings = SliderSettings { min: 5.0, max: 5.0, ..SliderSettings::default() };
        let response = slider_response(&settings);

        assert_eq!(response.marks.len(), 1);
        assert_eq!(response.marks[0].value, 5.0);
    }
}
