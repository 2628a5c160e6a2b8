//! Cow command implementation.

use devraha_normalize::normalize_cow_with_report;
use serde_json::json;

use crate::input;
use crate::output::{self, OutputFormat};

pub fn run(
    input: Option<String>,
    report: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = input::read_json(input.as_deref())?;
    let normalized = normalize_cow_with_report(&raw);

    if !normalized.report.is_clean() {
        tracing::info!(
            warnings = normalized.report.warnings.len(),
            "cow input needed normalization"
        );
    }

    let rendered = if report {
        output::render(
            &json!({ "cow": normalized.value, "report": normalized.report }),
            format,
        )?
    } else {
        output::render(&normalized.value, format)?
    };
    println!("{}", rendered);
    Ok(())
}
