//! User command implementation.

use devraha_normalize::{classify_login, normalize_user};

use crate::input;
use crate::output::{self, OutputFormat};

pub fn run(
    input: Option<String>,
    login: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = input::read_json(input.as_deref())?;

    let rendered = if login {
        output::render(&classify_login(&raw), format)?
    } else {
        output::render(&normalize_user(&raw), format)?
    };
    println!("{}", rendered);
    Ok(())
}
