use crate::normalize::{normalize, Normalized, NormalizedRecord};
use serde_json::{json, Map, Value};

fn doc(value: Value) -> Map<String, Value> {
    value.as_object().expect("test document is an object").clone()
}

fn record(classified: &Map<String, Value>) -> NormalizedRecord {
    match normalize(classified) {
        Normalized::Record(record) => record,
        Normalized::GroupListing => panic!("expected a record, got a group listing"),
    }
}

#[test]
fn house_group_is_excluded() {
    let classified = doc(json!({"type": "house group", "price": "350000"}));
    assert_eq!(normalize(&classified), Normalized::GroupListing);
}

#[test]
fn plain_house_passes_type_through() {
    let classified = doc(json!({
        "atticExists": "true",
        "bedroom": {"count": 3},
        "type": "house"
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("attic"), Some(&json!("Yes")));
    assert_eq!(rec.get("bedrooms"), Some(&json!(3)));
    assert_eq!(rec.get("type"), Some(&json!("house")));
    assert_eq!(rec.len(), 3);
}

#[test]
fn unknown_keys_pass_through_unchanged() {
    let classified = doc(json!({
        "price": 250000,
        "transactionType": "for sale",
        "zip": "1000"
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("price"), Some(&json!(250000)));
    assert_eq!(rec.get("transactionType"), Some(&json!("for sale")));
    assert_eq!(rec.get("zip"), Some(&json!("1000")));
}

#[test]
fn empty_string_coerces_to_null() {
    let classified = doc(json!({"price": ""}));
    let rec = record(&classified);

    assert_eq!(rec.get("price"), Some(&Value::Null));
}

#[test]
fn bookkeeping_keys_are_dropped() {
    let classified = doc(json!({
        "id": "12345",
        "visualisationOption": "premium",
        "specificities": "none",
        "certificates": "epc"
    }));
    let rec = record(&classified);

    assert!(rec.is_empty());
}

#[test]
fn attic_and_basement_are_yes_no() {
    let classified = doc(json!({"atticExists": "true", "basementExists": "false"}));
    let rec = record(&classified);

    assert_eq!(rec.get("attic"), Some(&json!("Yes")));
    assert_eq!(rec.get("basement"), Some(&json!("No")));
}

#[test]
fn building_splits_into_condition_and_year() {
    let classified = doc(json!({
        "building": {"condition": "good", "constructionYear": "1998"}
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("condition"), Some(&json!("good")));
    assert_eq!(rec.get("constructionYear"), Some(&json!("1998")));
    assert!(rec.get("building").is_none());
}

#[test]
fn kitchen_land_and_energy_rename_their_nested_fields() {
    let classified = doc(json!({
        "kitchen": {"type": "installed"},
        "land": {"surface": 420},
        "energy": {"heatingType": "gas"}
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("kitchen_type"), Some(&json!("installed")));
    assert_eq!(rec.get("land_surface"), Some(&json!(420)));
    assert_eq!(rec.get("heating_type"), Some(&json!("gas")));
}

#[test]
fn empty_parking_counts_default_to_zero() {
    let classified = doc(json!({
        "parking": {"parkingSpaceCount": {"indoor": "", "outdoor": 2}}
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("parking_indoor"), Some(&json!(0)));
    assert_eq!(rec.get("parking_outdoor"), Some(&json!(2)));
}

#[test]
fn missing_parking_counts_default_to_zero() {
    let classified = doc(json!({"parking": {}}));
    let rec = record(&classified);

    assert_eq!(rec.get("parking_indoor"), Some(&json!(0)));
    assert_eq!(rec.get("parking_outdoor"), Some(&json!(0)));
}

#[test]
fn empty_garden_surface_defaults_to_zero() {
    let classified = doc(json!({
        "outdoor": {"garden": {"surface": ""}, "terrace": {"exists": "true"}}
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("garden_surface"), Some(&json!(0)));
    assert_eq!(rec.get("terrace"), Some(&json!("Yes")));
}

#[test]
fn zero_garden_surface_stays_zero() {
    let classified = doc(json!({
        "outdoor": {"garden": {"surface": 0}, "terrace": {"exists": "false"}}
    }));
    let rec = record(&classified);

    assert_eq!(rec.get("garden_surface"), Some(&json!(0)));
    assert_eq!(rec.get("terrace"), Some(&json!("No")));
}

#[test]
fn missing_outdoor_details_fall_back() {
    let classified = doc(json!({"outdoor": {}}));
    let rec = record(&classified);

    assert_eq!(rec.get("garden_surface"), Some(&json!(0)));
    assert_eq!(rec.get("terrace"), Some(&json!("No")));
}

#[test]
fn swimming_pool_is_yes_no() {
    let with_pool = doc(json!({"wellnessEquipment": {"hasSwimmingPool": "true"}}));
    let without = doc(json!({"wellnessEquipment": {"hasSwimmingPool": "false"}}));

    assert_eq!(
        record(&with_pool).get("has_swimming_pool"),
        Some(&json!("Yes"))
    );
    assert_eq!(
        record(&without).get("has_swimming_pool"),
        Some(&json!("No"))
    );
}

#[test]
fn normalization_is_idempotent() {
    let classified = doc(json!({
        "atticExists": "true",
        "bedroom": {"count": 4},
        "parking": {"parkingSpaceCount": {"indoor": "", "outdoor": ""}},
        "price": "",
        "type": "house"
    }));

    assert_eq!(normalize(&classified), normalize(&classified));
}
