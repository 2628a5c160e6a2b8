//! Gender reconciliation for legacy cow records.
//!
//! Every cow must carry a gender. Older records use `"Bull"` / `"Cow"` or
//! omit the field, so anything unrecognised resolves to [`CowGender::Male`].

use devraha_types::CowGender;
use serde_json::Value;

/// Outcome of matching a raw gender value, before the fallback is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenderMatch {
    /// One of the accepted spellings.
    Recognized(CowGender),
    /// A value was present but is not an accepted spelling or not a string.
    Unrecognized,
    /// No value (missing key or `null`).
    Missing,
}

impl GenderMatch {
    pub(crate) fn resolve(self) -> CowGender {
        match self {
            GenderMatch::Recognized(gender) => gender,
            GenderMatch::Unrecognized | GenderMatch::Missing => CowGender::Male,
        }
    }
}

/// Maps any value to a canonical gender. Total; non-strings yield `Male`.
pub fn normalize_gender(value: &Value) -> CowGender {
    match_gender(Some(value)).resolve()
}

/// Maps text to a canonical gender, case-insensitively.
///
/// `male`/`bull` give `Male`, `female`/`cow` give `Female`, anything else `Male`.
pub fn normalize_gender_str(raw: &str) -> CowGender {
    match_text(raw).resolve()
}

pub(crate) fn match_gender(value: Option<&Value>) -> GenderMatch {
    match value {
        None | Some(Value::Null) => GenderMatch::Missing,
        Some(Value::String(text)) => match_text(text),
        Some(_) => GenderMatch::Unrecognized,
    }
}

fn match_text(raw: &str) -> GenderMatch {
    match raw.to_lowercase().as_str() {
        "male" | "bull" => GenderMatch::Recognized(CowGender::Male),
        "female" | "cow" => GenderMatch::Recognized(CowGender::Female),
        _ => GenderMatch::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_spellings_map_case_insensitively() {
        assert_eq!(normalize_gender(&json!("BULL")), CowGender::Male);
        assert_eq!(normalize_gender(&json!("cow")), CowGender::Female);
        assert_eq!(normalize_gender(&json!("Female")), CowGender::Female);
        assert_eq!(normalize_gender(&json!("MALE")), CowGender::Male);
        assert_eq!(normalize_gender_str("Cow"), CowGender::Female);
    }

    #[test]
    fn unknown_values_fall_back_to_male() {
        assert_eq!(normalize_gender(&json!("unknown-legacy-value")), CowGender::Male);
        assert_eq!(normalize_gender(&json!(" female")), CowGender::Male);
        assert_eq!(normalize_gender(&json!("")), CowGender::Male);
    }

    #[test]
    fn non_strings_fall_back_to_male() {
        for value in [json!(null), json!(1), json!(true), json!(["female"]), json!({"gender": "cow"})] {
            assert_eq!(normalize_gender(&value), CowGender::Male, "{value}");
        }
    }

    #[test]
    fn missing_is_distinguished_from_unrecognized() {
        assert_eq!(match_gender(None), GenderMatch::Missing);
        assert_eq!(match_gender(Some(&json!(null))), GenderMatch::Missing);
        assert_eq!(match_gender(Some(&json!(7))), GenderMatch::Unrecognized);
        assert_eq!(
            match_gender(Some(&json!("Bull"))),
            GenderMatch::Recognized(CowGender::Male)
        );
    }
}
