//! Cows command implementation.

use devraha_normalize::{normalize_cow_list, normalize_cows};

use crate::input;
use crate::output::{self, OutputFormat};

pub fn run(
    input: Option<String>,
    meta: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = input::read_json(input.as_deref())?;

    let rendered = if meta {
        output::render(&normalize_cow_list(&raw), format)?
    } else {
        output::render(&normalize_cows(&raw), format)?
    };
    println!("{}", rendered);
    Ok(())
}
