//! Gender command implementation.

use devraha_normalize::{normalize_gender, normalize_gender_str};
use serde_json::Value;

pub fn run(value: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let gender = if json {
        let raw: Value =
            serde_json::from_str(&value).map_err(|e| format!("Invalid JSON: {}", e))?;
        normalize_gender(&raw)
    } else {
        normalize_gender_str(&value)
    };
    println!("{}", gender);
    Ok(())
}
