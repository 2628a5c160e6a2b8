//! Output formatting utilities.

use devraha_normalize::coerce::number_to_string;
use serde::Serialize;
use serde_json::Value;

/// How JSON results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single line, field order as declared.
    Compact,
    /// Indented, field order as declared.
    Pretty,
    /// RFC 8785 canonical JSON: keys sorted by UTF-16 code units, no
    /// whitespace, numbers in shortest round-trip form (`2500`, `12.5`).
    Canonical,
}

/// Serializes `value` in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let text = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Canonical => {
            let value: Value = serde_json::to_value(value)?;
            let mut out = String::new();
            write_canonical(&value, &mut out)?;
            out
        }
    };
    Ok(text)
}

fn write_canonical(value: &Value, out: &mut String) -> Result<(), serde_json::Error> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.encode_utf16().cmp(b.encode_utf16()));
            out.push('{');
            for (index, (key, item)) in entries.into_iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_canonical(item, out)?;
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        }
        // JSON numbers are always finite, so this never yields NaN or Infinity.
        Value::Number(number) => {
            out.push_str(&number_to_string(number.as_f64().unwrap_or_default()));
        }
        other => out.push_str(&serde_json::to_string(other)?),
    }
    Ok(())
}
