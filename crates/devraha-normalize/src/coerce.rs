//! Loose value conversions matching the frontends' implicit conversion rules.
//!
//! Backend payloads were historically consumed by code relying on implicit
//! string, number, and boolean conversion. These functions reproduce those
//! rules on `serde_json::Value` so the canonical records agree with what the
//! existing clients compute. `None` stands for a missing key.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("invalid regex")
});

/// Truthiness of a value.
///
/// Missing, `null`, `false`, `0`, and `""` are falsy; everything else,
/// including `"false"`, `"0"`, empty arrays, and empty objects, is truthy.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// String conversion with `""` for missing and `null`.
pub fn to_loose_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => match (number.as_i64(), number.as_u64()) {
            (Some(n), _) => n.to_string(),
            (None, Some(n)) => n.to_string(),
            _ => number_to_string(number.as_f64().unwrap_or(f64::NAN)),
        },
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| to_loose_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Numeric conversion with `0` for missing and `null`. May return NaN or infinities.
pub fn to_loose_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => parse_numeric(text),
        Some(Value::Array(items)) => match items.as_slice() {
            [] => 0.0,
            [single] => parse_numeric(&to_loose_string(Some(single))),
            _ => f64::NAN,
        },
        Some(Value::Object(_)) => f64::NAN,
    }
}

/// Numeric conversion where NaN and infinities collapse to `0`.
pub fn to_number_or_zero(value: Option<&Value>) -> f64 {
    let number = to_loose_number(value);
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

/// The value itself if it is a string, otherwise `None`.
pub fn string_only(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

/// The value as `i64` if it is a JSON number with an integral value in range.
pub fn integral_number(value: Option<&Value>) -> Option<i64> {
    let Some(Value::Number(number)) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|n| n.fract() == 0.0 && *n >= i64::MIN as f64 && *n < i64::MAX as f64)
            .map(|n| n as i64)
    })
}

fn parse_numeric(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefixes, radix) in [(["0x", "0X"], 16), (["0o", "0O"], 8), (["0b", "0B"], 2)] {
        if let Some(digits) = prefixes.iter().find_map(|p| trimmed.strip_prefix(*p)) {
            return parse_radix_digits(digits, radix);
        }
    }
    if !DECIMAL_LITERAL.is_match(trimmed) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits after a `0x`/`0o`/`0b` prefix. No sign, no empty run, no length cap.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Shortest round-trip decimal form of a number, as the frontends print it.
///
/// Exponent notation below `1e-6` and from `1e21` up (`1e+21`, `1.5e-7`),
/// plain digits otherwise. `-0` prints as `0`.
pub fn number_to_string(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if number == 0.0 {
        return "0".to_string();
    }
    let magnitude = number.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{number:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        };
    }
    number.to_string()
}
