//! Error-message command implementation.

use devraha_types::{
    axios_error_message, error_message, DEFAULT_AXIOS_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE,
};

use crate::input;

pub fn run(
    input: Option<String>,
    axios: bool,
    fallback: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = input::read_json(input.as_deref())?;

    let message = if axios {
        axios_error_message(&raw, fallback.as_deref().unwrap_or(DEFAULT_AXIOS_ERROR_MESSAGE))
    } else {
        error_message(&raw, fallback.as_deref().unwrap_or(DEFAULT_ERROR_MESSAGE))
    };
    println!("{}", message);
    Ok(())
}
