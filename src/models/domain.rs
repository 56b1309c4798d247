use serde::{Deserialize, Serialize};

/// Column names in output order. Every one of them must be present in the
/// dataset header.
pub const COLUMNS: [&str; 13] = [
    "applicant_id",
    "job_openings_id",
    "account_id",
    "funnel_id",
    "position_id",
    "derived_preferred_locations",
    "job_openings_city",
    "derived_applicant_profile_age",
    "derived_preferred_industries",
    "job_openings_industry",
    "job_openings_title",
    "derived_dist_btwn_candidate_and_job",
    "similarity_score_actual",
];

/// One applicant to job-opening match record
///
/// Field order matches [`COLUMNS`] and is preserved when serialized.
/// Identifier and derived text fields are kept exactly as they appear in
/// the source file; only distance and score are parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub applicant_id: String,
    pub job_openings_id: String,
    pub account_id: String,
    pub funnel_id: String,
    pub position_id: String,
    pub derived_preferred_locations: String,
    pub job_openings_city: String,
    pub derived_applicant_profile_age: String,
    pub derived_preferred_industries: String,
    pub job_openings_industry: String,
    pub job_openings_title: String,
    pub derived_dist_btwn_candidate_and_job: f64,
    pub similarity_score_actual: f64,
}

impl Row {
    pub fn city(&self) -> &str {
        &self.job_openings_city
    }

    pub fn title(&self) -> &str {
        &self.job_openings_title
    }

    /// Distance between candidate and job in kilometres
    pub fn distance_km(&self) -> f64 {
        self.derived_dist_btwn_candidate_and_job
    }
}

/// The user's current dropdown and slider choices
///
/// Held by the client and sent back with every event, so the server keeps
/// no per-user state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "km", alias = "max_distance_km")]
    pub max_distance_km: f64,
}

impl SelectionState {
    pub fn new(default_distance_km: f64) -> Self {
        Self {
            city: None,
            title: None,
            max_distance_km: default_distance_km,
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Where the dashboard is in its city -> title -> table flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    NoCitySelected,
    CitySelected,
    TitleSelected,
}

/// A dropdown entry as rendered by the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    pub fn new(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: value.to_string(),
        }
    }
}

/// Labelled tick on the distance slider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
