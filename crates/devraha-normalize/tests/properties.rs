use devraha_normalize::{normalize_cow, normalize_cow_with_report, normalize_gender};
use devraha_types::CowGender;
use proptest::prelude::*;
use serde_json::{Map, Value};

const COW_KEYS: &[&str] = &[
    "_id",
    "cowId",
    "name",
    "photos",
    "description",
    "calf",
    "gender",
    "adoptionStatus",
    "sponsorName",
    "sponsorId",
    "totalDonated",
    "donators",
    "eartag",
    "specialCare",
    "testimonials",
    "youtubeUrl",
    "createdAt",
    "updatedAt",
];

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1e12f64..1e12f64).prop_map(Value::from),
        ".{0,12}".prop_map(Value::String),
        prop::sample::select(vec!["Male", "female", "BULL", "cow", "0", "false", " 12 "])
            .prop_map(|text| Value::String(text.to_string())),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-zA-Z_]{1,10}", inner, 0..6)
                .prop_map(|map| Value::Object(map.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_cow_record() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(prop::sample::select(COW_KEYS.to_vec()), arb_json(), 0..18).prop_map(
        |fields| {
            Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key.to_string(), value))
                    .collect(),
            )
        },
    )
}

proptest! {
    #[test]
    fn prop_normalize_cow_is_total(raw in arb_json()) {
        let cow = normalize_cow(&raw);
        prop_assert!(cow.total_donated.is_finite());
    }

    #[test]
    fn prop_non_strings_normalize_to_male(raw in arb_json()) {
        prop_assume!(!raw.is_string());
        prop_assert_eq!(normalize_gender(&raw), CowGender::Male);
    }

    #[test]
    fn prop_normalization_is_deterministic(raw in arb_cow_record()) {
        prop_assert_eq!(normalize_cow_with_report(&raw), normalize_cow_with_report(&raw));
    }

    #[test]
    fn prop_canonical_output_is_a_fixed_point(raw in arb_cow_record()) {
        let cow = normalize_cow(&raw);
        let serialized = serde_json::to_value(&cow).unwrap();
        let again = normalize_cow_with_report(&serialized);
        prop_assert_eq!(&again.value, &cow);
        prop_assert!(again.report.is_clean(), "{:?}", again.report.warnings);
    }
}
