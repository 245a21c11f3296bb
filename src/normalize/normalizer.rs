// normalizer.rs
//
// Maps the portal's irregular per-listing `classified` document onto a flat
// attribute set. Listings come in many shapes (house vs. apartment, with or
// without garden, parking, pool), so the output schema varies per record and
// the dataset discovers the full column set at assembly time.
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// Flat attribute map for one listing.
pub type NormalizedRecord = BTreeMap<String, Value>;

/// Outcome of normalizing one raw `classified` document.
#[derive(Debug, PartialEq)]
pub enum Normalized {
    Record(NormalizedRecord),
    /// Multi-unit grouping, not a single sellable unit. Dropped from output.
    GroupListing,
}

/// Pure: same document in, same record out, no state carried between calls.
///
/// Empty strings are coerced to null before any other rule, at every level;
/// the count-like fields (`garden_surface`, `parking_*`) then default null
/// to 0. An absent nested path also yields null.
pub fn normalize(classified: &Map<String, Value>) -> Normalized {
    if classified.get("type").and_then(Value::as_str) == Some("house group") {
        return Normalized::GroupListing;
    }

    let mut record = NormalizedRecord::new();

    for (key, raw) in classified {
        let value = coerce_empty(raw);

        match key.as_str() {
            // Portal bookkeeping, not property attributes.
            "id" | "visualisationOption" | "specificities" | "certificates" => {}

            "atticExists" => {
                record.insert("attic".into(), yes_no(&value));
            }
            "basementExists" => {
                record.insert("basement".into(), yes_no(&value));
            }
            "bedroom" => {
                record.insert("bedrooms".into(), nested(&value, &["count"]));
            }
            "building" => {
                record.insert("condition".into(), nested(&value, &["condition"]));
                record.insert(
                    "constructionYear".into(),
                    nested(&value, &["constructionYear"]),
                );
            }
            "kitchen" => {
                record.insert("kitchen_type".into(), nested(&value, &["type"]));
            }
            "land" => {
                record.insert("land_surface".into(), nested(&value, &["surface"]));
            }
            "outdoor" => {
                record.insert(
                    "garden_surface".into(),
                    zero_when_null(nested(&value, &["garden", "surface"])),
                );
                record.insert(
                    "terrace".into(),
                    yes_no(&nested(&value, &["terrace", "exists"])),
                );
            }
            "energy" => {
                record.insert("heating_type".into(), nested(&value, &["heatingType"]));
            }
            "parking" => {
                record.insert(
                    "parking_indoor".into(),
                    zero_when_null(nested(&value, &["parkingSpaceCount", "indoor"])),
                );
                record.insert(
                    "parking_outdoor".into(),
                    zero_when_null(nested(&value, &["parkingSpaceCount", "outdoor"])),
                );
            }
            "wellnessEquipment" => {
                record.insert(
                    "has_swimming_pool".into(),
                    yes_no(&nested(&value, &["hasSwimmingPool"])),
                );
            }

            // Everything else carries over under its own name.
            _ => {
                record.insert(key.clone(), value);
            }
        }
    }

    Normalized::Record(record)
}

/// Empty string means "not filled in" on the portal.
fn coerce_empty(value: &Value) -> Value {
    if value.as_str() == Some("") {
        Value::Null
    } else {
        value.clone()
    }
}

/// The portal encodes booleans as the strings "true"/"false".
fn yes_no(value: &Value) -> Value {
    if value.as_str() == Some("true") {
        json!("Yes")
    } else {
        json!("No")
    }
}

/// Walks a nested path, coercing the leaf; an absent path yields null.
fn nested(value: &Value, path: &[&str]) -> Value {
    let mut cur = value;
    for segment in path {
        match cur.get(segment) {
            Some(next) => cur = next,
            None => return Value::Null,
        }
    }
    coerce_empty(cur)
}

fn zero_when_null(value: Value) -> Value {
    if value.is_null() {
        json!(0)
    } else {
        value
    }
}
