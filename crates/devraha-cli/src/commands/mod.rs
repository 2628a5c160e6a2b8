//! Subcommand implementations.

pub mod cow;
pub mod cows;
pub mod error_message;
pub mod gender;
pub mod user;
