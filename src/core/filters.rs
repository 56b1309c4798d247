use crate::core::loader::Table;
use crate::models::Row;

/// Check if a row's job title is exactly the selected one
#[inline]
pub fn matches_title(row: &Row, title: &str) -> bool {
    row.title() == title
}

/// Check if a row lies within the selected circle
///
/// The threshold is not clamped to the slider range. A NaN threshold or
/// distance never matches.
#[inline]
pub fn within_distance(row: &Row, max_distance_km: f64) -> bool {
    row.distance_km() <= max_distance_km
}

/// Rows with the given title within `max_distance_km`, in table order
///
/// An unset title selects nothing.
pub fn filter_rows<'a>(
    table: &'a Table,
    title: Option<&str>,
    max_distance_km: f64,
) -> Vec<&'a Row> {
    let Some(title) = title else {
        return Vec::new();
    };

    table
        .iter()
        .filter(|row| matches_title(row, title))
        .filter(|row| within_distance(row, max_distance_km))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row(id: &str, title: &str, distance: f64) -> Row {
        Row {
            applicant_id: id.to_string(),
            job_openings_id: format!("job-{}", id),
            account_id: "acc".to_string(),
            funnel_id: "funnel".to_string(),
            position_id: "pos".to_string(),
            derived_preferred_locations: "Pune".to_string(),
            job_openings_city: "Pune".to_string(),
            derived_applicant_profile_age: "29".to_string(),
            derived_preferred_industries: "IT".to_string(),
            job_openings_industry: "IT".to_string(),
            job_openings_title: title.to_string(),
            derived_dist_btwn_candidate_and_job: distance,
            similarity_score_actual: 0.7,
        }
    }

    fn pune_table() -> Table {
        Table::from(vec![
            create_test_row("1", "Engineer", 3.0),
            create_test_row("2", "Engineer", 8.0),
            create_test_row("3", "Analyst", 2.0),
        ])
    }

    fn ids(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.applicant_id.clone()).collect()
    }

    #[test]
    fn test_title_and_distance_both_required() {
        let table = pune_table();

        assert_eq!(ids(&filter_rows(&table, Some("Engineer"), 5.0)), vec!["1"]);
        assert_eq!(ids(&filter_rows(&table, Some("Engineer"), 10.0)), vec!["1", "2"]);
        assert!(filter_rows(&table, Some("Analyst"), 1.0).is_empty());
    }

    #[test]
    fn test_distance_boundary_inclusive() {
        let table = pune_table();
        assert_eq!(ids(&filter_rows(&table, Some("Engineer"), 8.0)), vec!["1", "2"]);
    }

    #[test]
    fn test_unset_title_matches_nothing() {
        let table = pune_table();
        assert!(filter_rows(&table, None, 20.0).is_empty());
    }

    #[test]
    fn test_threshold_not_clamped() {
        let table = Table::from(vec![
            create_test_row("1", "Engineer", 45.0),
            create_test_row("2", "Engineer", -1.0),
        ]);

        assert_eq!(ids(&filter_rows(&table, Some("Engineer"), 50.0)), vec!["1", "2"]);
        assert_eq!(ids(&filter_rows(&table, Some("Engineer"), -0.5)), vec!["2"]);
        assert!(filter_rows(&table, Some("Engineer"), f64::NAN).is_empty());
    }

    #[test]
    fn test_title_match_is_exact() {
        let table = pune_table();
        assert!(filter_rows(&table, Some("engineer"), 20.0).is_empty());
        assert!(filter_rows(&table, Some("Engineer "), 20.0).is_empty());
    }
}
