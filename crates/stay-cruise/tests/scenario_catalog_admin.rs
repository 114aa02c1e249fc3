//! Admin edits over a catalog that round-trips through JSON.

use serde_json::json;
use stay_cruise::{Catalog, CruiseError, CruiseRecord};

const NOW: i64 = 1_760_000_000_000;

#[test]
fn load_edit_save_cycle_preserves_unknown_fields() {
    let wire = json!([
        {"Unique Sailing ID": "A1", "Ship Name": "MSC Poesia", "Cabin Grade": "IR"},
        {"Unique Sailing ID": "B2", "Ship Name": "MSC Opera"}
    ]);
    let mut cat = Catalog::from_json(wire).unwrap();

    let mut a = cat.get("A1").unwrap().clone();
    a.special_offers = "Drinks package".to_string();
    cat.replace(a).unwrap();
    cat.remove("B2").unwrap();

    let out = cat.to_json().unwrap();
    assert_eq!(out.as_array().unwrap().len(), 1);
    assert_eq!(out[0]["Cabin Grade"], "IR");
    assert_eq!(out[0]["Special Offers"], "Drinks package");
}

#[test]
fn replace_unknown_id_is_not_found() {
    let mut cat = Catalog::default();
    let mut r = CruiseRecord::new("MSC Sinfonia");
    r.sailing_id = "missing".to_string();
    assert_eq!(
        cat.replace(r).unwrap_err(),
        CruiseError::NotFound("missing".to_string())
    );
}

#[test]
fn import_appends_after_existing() {
    let mut cat = Catalog::default();
    cat.add(CruiseRecord::new("MSC Fantasia"), NOW).unwrap();

    let batch: Vec<CruiseRecord> = serde_json::from_value(json!([
        {"Ship Name": "MSC Splendida", "Interior Price": 699},
        {"Ship Name": "MSC Preziosa", "Complete Itinerary": "[]"}
    ]))
    .unwrap();
    assert_eq!(cat.import(batch, NOW).unwrap(), 2);

    let names: Vec<_> = cat.records().iter().map(|r| r.ship_name.as_str()).collect();
    assert_eq!(names, vec!["MSC Fantasia", "MSC Splendida", "MSC Preziosa"]);
    assert_eq!(cat.records()[1].interior_price, "699");

    let mut ids: Vec<_> = cat.records().iter().map(|r| r.sailing_id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn non_array_payload_fails_to_decode() {
    let err = Catalog::from_json(json!({"Ship Name": "MSC Opera"})).unwrap_err();
    assert!(matches!(err, CruiseError::Decode(_)));
}
