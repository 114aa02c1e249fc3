//! Planner edits flow straight into the day-accounting engine.

use stay_days::{city_limits, schengen_days, WindowRule};
use stay_store::{NewStay, Planner, StayEdit};

#[test]
fn default_plan_stays_within_limits() {
    let planner = Planner::default();
    let rule = WindowRule::schengen();

    let report = schengen_days(planner.stays(), &rule);
    // Spain 53 + 11 + 11 + 80, cruise 7.
    assert_eq!(report.total_days, 162);
    assert!(!report.has_over_limit());

    let cities = city_limits(planner.stays(), &rule);
    assert_eq!(cities.len(), 2);
    assert_eq!(cities["Spain"].total_days, 155);
    assert_eq!(cities["Mediterranean Cruise"].total_days, 7);
}

#[test]
fn extending_a_stay_pushes_it_over() {
    let mut planner = Planner::default();
    // Spain 2026-07-02 .. 2026-10-04 is 95 days.
    planner
        .edit(11, StayEdit::EndDate("2026-10-04".to_string()))
        .unwrap();

    let report = schengen_days(planner.stays(), &WindowRule::schengen());
    assert!(report.has_over_limit());
    assert_eq!(report.samples.iter().filter(|s| s.is_over_limit).count(), 5);
}

#[test]
fn switching_location_moves_days_out_of_schengen() {
    let mut planner = Planner::default();
    planner
        .edit(11, StayEdit::Location("Dubai".to_string()))
        .unwrap();

    let cities = city_limits(planner.stays(), &WindowRule::schengen());
    assert_eq!(cities["Spain"].total_days, 75);
}

#[test]
fn custom_schengen_location_gets_its_own_entry() {
    let mut planner = Planner::default();
    planner.add(NewStay {
        location: "Portugal".to_string(),
        is_schengen: true,
        start_date: "2026-10-01".to_string(),
        end_date: "2026-10-05".to_string(),
        color: None,
    });

    let cities = city_limits(planner.stays(), &WindowRule::schengen());
    assert_eq!(cities["Portugal"].total_days, 5);
}
