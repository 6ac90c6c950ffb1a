//! Randomized, schema-conformant payload generation
//!
//! Each call is independent: fragments come from fresh UUIDv4 material
//! (far more than 2^24 distinct values per fragment), so repeated calls do
//! not collide. Overrides replace generated fields verbatim - including
//! type-invalid values, which the negative tests rely on.

use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};
use uuid::Uuid;

/// Generate an author payload
///
/// `id` is used verbatim when supplied; otherwise a random positive
/// integer below 100 000 is chosen.
pub fn author_payload(id: Option<i64>, overrides: &[(&str, Value)]) -> Value {
    let mut payload = json!({
        "id": id.unwrap_or_else(random_id),
        "idBook": random_in_range(1, 1000),
        "firstName": format!("First{}", hex_fragment(6)),
        "lastName": format!("Last{}", hex_fragment(6)),
    });
    apply_overrides(&mut payload, overrides);
    payload
}

/// Generate a book payload
///
/// `publishDate` is the current UTC timestamp in RFC 3339; `pageCount`
/// lands in 50..=1000.
pub fn book_payload(id: Option<i64>, overrides: &[(&str, Value)]) -> Value {
    let mut payload = json!({
        "id": id.unwrap_or_else(random_id),
        "title": format!("Book Title {}", hex_fragment(6)),
        "description": format!("Description {}", hex_fragment(10)),
        "pageCount": random_in_range(50, 1000),
        "excerpt": format!("Excerpt text {}", hex_fragment(8)),
        "publishDate": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    });
    apply_overrides(&mut payload, overrides);
    payload
}

/// Remove a field from a generated payload, for missing-field tests
pub fn remove_field(payload: &mut Value, field: &str) {
    if let Some(map) = payload.as_object_mut() {
        map.remove(field);
    }
}

fn apply_overrides(payload: &mut Value, overrides: &[(&str, Value)]) {
    if let Some(map) = payload.as_object_mut() {
        for (field, value) in overrides {
            map.insert((*field).to_string(), value.clone());
        }
    }
}

fn hex_fragment(len: usize) -> String {
    Uuid::new_v4().simple().to_string().chars().take(len).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn random_id() -> i64 {
    ((Uuid::new_v4().as_u128() % 100_000) as i64).max(1)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn random_in_range(min: i64, max: i64) -> i64 {
    let span = (max - min + 1) as u128;
    min + (Uuid::new_v4().as_u128() % span) as i64
}
