//! Search over a small catalog decoded from the cache wire format.

use chrono::NaiveDate;
use serde_json::json;
use stay_cruise::*;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn catalog() -> Vec<Cruise> {
    let wire = json!([
        {
            "Unique Sailing ID": "GR0829",
            "Ship Name": "MSC Grandiosa",
            "Duration": "7 Nights",
            "Departure Port": "Barcelona, Spain",
            "Departure Date": "29 Aug '25 - 5 Sep '25",
            "Interior Price": "£749",
            "Ocean View Price": "£899",
            "Standard Balcony": "£1,099",
            "Complete Itinerary": [
                {"day": "1", "port": "Barcelona, Spain"},
                {"day": "2", "port": "Marseille, France"},
                {"day": "3", "port": "Genoa, Italy"}
            ]
        },
        {
            "Unique Sailing ID": "SV0912",
            "Ship Name": "MSC Seaview",
            "Duration": "10 Nights",
            "Departure Port": "Genoa, Italy",
            "Departure Date": "12 Sep '25 - 22 Sep '25",
            "Interior Price": "N/A",
            "Ocean View Price": "£1,249",
            "Standard Balcony": "£1,499",
            "Complete Itinerary": "[{\"port\": \"Naples, Italy\"}, {\"port\": \"Valletta, Malta\"}]"
        },
        {
            "Unique Sailing ID": "MU1003",
            "Ship Name": "MSC Musica",
            "Duration": "3 Nights",
            "Departure Port": "Venice, Italy",
            "Departure Date": "3 Oct '25 - 6 Oct '25",
            "Interior Price": "N/A",
            "Ocean View Price": "N/A",
            "Standard Balcony": "N/A",
            "Complete Itinerary": []
        }
    ]);
    process(records_from_json(wire).unwrap())
}

fn ids(cs: &[&Cruise]) -> Vec<String> {
    cs.iter().map(|c| c.sailing_id().to_string()).collect()
}

#[test]
fn processed_fields() {
    let cs = catalog();
    assert_eq!(cs[0].lowest_price, Some(749.0));
    assert_eq!(cs[1].lowest_price, Some(1249.0));
    assert_eq!(cs[2].lowest_price, None);
    assert_eq!(cs[1].departure, Some(d(2025, 9, 12)));
    assert_eq!(cs[1].arrival, Some(d(2025, 9, 22)));
    assert_eq!(cs[1].record.itinerary.len(), 2);
}

#[test]
fn ship_and_budget() {
    let cs = catalog();
    let f = CruiseFilter {
        ship: Some("MSC Seaview".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&cs, DEFAULT_MAX_BUDGET)), vec!["SV0912"]);

    let f = CruiseFilter {
        max_budget: Some(1000.0),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&cs, DEFAULT_MAX_BUDGET)), vec!["GR0829"]);
}

#[test]
fn date_window() {
    let cs = catalog();
    let f = CruiseFilter {
        departs_on_or_after: Some(d(2025, 9, 1)),
        arrives_on_or_before: Some(d(2025, 9, 30)),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&cs, DEFAULT_MAX_BUDGET)), vec!["SV0912"]);
}

#[test]
fn city_matches_departure_port_or_stops() {
    let cs = catalog();
    let f = CruiseFilter {
        city: Some("genoa".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&cs, DEFAULT_MAX_BUDGET)), vec!["GR0829", "SV0912"]);
}

#[test]
fn itinerary_query_ignores_departure_port() {
    let cs = catalog();
    let f = CruiseFilter {
        itinerary_query: Some("Venice".to_string()),
        ..Default::default()
    };
    assert!(f.apply(&cs, DEFAULT_MAX_BUDGET).is_empty());

    let f = CruiseFilter {
        itinerary_query: Some("malta".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&f.apply(&cs, DEFAULT_MAX_BUDGET)), vec!["SV0912"]);
}

#[test]
fn option_lists() {
    let cs = catalog();
    assert_eq!(
        ship_names(&cs),
        vec!["MSC Grandiosa", "MSC Musica", "MSC Seaview"]
    );
    assert_eq!(
        available_cities(&cs),
        vec!["Barcelona", "Genoa", "Marseille", "Naples", "Valletta", "Venice"]
    );
    // 8 + 11 + 4 days, no overlap.
    assert_eq!(available_dates(&cs).len(), 23);
}

#[test]
fn comparison_orders_selected_sailings() {
    let cs = catalog();
    let mut cmp = Comparison::default();
    for id in ["MU1003", "SV0912", "GR0829"] {
        assert_eq!(cmp.toggle(id), Toggle::Added);
    }
    assert_eq!(ids(&cmp.sorted(&cs)), vec!["GR0829", "SV0912", "MU1003"]);
    assert_eq!(display_name(&cs[0].record.ship_name), "MSC Grandiosa (6334 guests, 1087ft)");
}
