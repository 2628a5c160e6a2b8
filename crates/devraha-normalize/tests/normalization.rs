use devraha_normalize::{
    normalize_cow, normalize_cow_with_report, normalize_gender, NormalizationStatus,
};
use devraha_types::{Cow, CowGender};
use serde_json::json;

fn legacy_cow() -> serde_json::Value {
    json!({
        "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "cowId": 1000017,
        "name": "Kamdhenu",
        "photos": ["https://cdn.example.org/cows/1.jpg"],
        "description": "Rescued in 2021",
        "calf": false,
        "gender": "Cow",
        "adoptionStatus": true,
        "sponsorName": "Meera",
        "sponsorId": "u-981",
        "totalDonated": "2500",
        "donators": [{"name": "Meera", "amount": 2500}],
        "eartag": "DV-0017",
        "specialCare": 1,
        "testimonials": "yes",
        "youtubeUrl": "https://youtu.be/abc",
        "createdAt": "2024-06-01T08:00:00.000Z",
        "updatedAt": "2025-01-15T12:30:00.000Z",
        "__v": 3
    })
}

#[test]
fn gender_synonyms() {
    assert_eq!(normalize_gender(&json!("BULL")), CowGender::Male);
    assert_eq!(normalize_gender(&json!("cow")), CowGender::Female);
    assert_eq!(normalize_gender(&json!("Female")), CowGender::Female);
    assert_eq!(normalize_gender(&json!("unknown-legacy-value")), CowGender::Male);
}

#[test]
fn empty_record_defaults_serialize_without_optional_keys() {
    let cow = normalize_cow(&json!({}));
    assert_eq!(
        serde_json::to_value(&cow).unwrap(),
        json!({
            "_id": "",
            "name": "",
            "photos": [],
            "description": "",
            "calf": false,
            "gender": "Male",
            "adoptionStatus": false,
            "sponsorName": null,
            "sponsorId": null,
            "totalDonated": 0.0,
            "donators": [],
            "eartag": null,
            "specialCare": false,
            "testimonials": false,
            "youtubeUrl": null
        })
    );
}

#[test]
fn legacy_record_is_reconciled() {
    let cow = normalize_cow(&legacy_cow());
    assert_eq!(cow.id, "65a1f0c2e4b0a1b2c3d4e5f6");
    assert_eq!(cow.cow_id, Some(1000017));
    assert_eq!(cow.gender, CowGender::Female);
    assert_eq!(cow.total_donated, 2500.0);
    assert!(cow.adoption_status);
    assert!(cow.special_care);
    assert!(cow.testimonials);
    assert_eq!(cow.eartag.as_deref(), Some("DV-0017"));
    assert_eq!(cow.donators.len(), 1);
}

#[test]
fn normalizing_canonical_output_is_identity() {
    let first = normalize_cow(&legacy_cow());
    let again = normalize_cow_with_report(&serde_json::to_value(&first).unwrap());
    assert_eq!(again.value, first);
    assert_eq!(again.report.status, NormalizationStatus::Clean);
}

#[test]
fn photos_string_is_not_a_sequence() {
    assert!(normalize_cow(&json!({"photos": "not-an-array"})).photos.is_empty());
}

#[test]
fn calf_truthiness_boundary() {
    assert!(!normalize_cow(&json!({"calf": 0})).calf);
    assert!(normalize_cow(&json!({"calf": "no"})).calf);
}

#[test]
fn total_donated_defaults_while_cow_id_stays_absent() {
    assert_eq!(normalize_cow(&json!({"totalDonated": "abc"})).total_donated, 0.0);
    assert_eq!(normalize_cow(&json!({"cowId": "abc"})).cow_id, None);
}

#[test]
fn input_is_not_mutated() {
    let raw = legacy_cow();
    let before = raw.clone();
    let _ = normalize_cow(&raw);
    assert_eq!(raw, before);
}

#[test]
fn canonical_struct_deserializes_from_normalized_json() {
    let cow = normalize_cow(&legacy_cow());
    let parsed: Cow = serde_json::from_value(serde_json::to_value(&cow).unwrap()).unwrap();
    assert_eq!(parsed, cow);
}
