//! Normalizers that reconcile loosely-typed Devraha backend payloads with the
//! canonical models in `devraha-types`.
//!
//! Every normalizer is a pure, total function over `serde_json::Value`:
//! malformed input degrades to defaults instead of failing, so downstream code
//! never has to null-check canonical records. The `*_with_report` variants
//! additionally describe which fields needed fixing.
//!
#![deny(missing_docs)]

/// Implicit-conversion rules for strings, numbers, and booleans.
pub mod coerce;
/// Cow record and cow list normalization.
pub mod cow;
/// Error type for text entry points.
pub mod error;
mod fields;
/// Legacy gender reconciliation.
pub mod gender;
/// Normalization reports.
pub mod report;
/// User and login payload normalization.
pub mod user;

pub use cow::{
    normalize_cow, normalize_cow_json, normalize_cow_list, normalize_cow_with_report,
    normalize_cows,
};
pub use error::NormalizeError;
pub use gender::{normalize_gender, normalize_gender_str};
pub use report::{
    DegradationKind, NormalizationReport, NormalizationStatus, NormalizationWarning, Normalized,
};
pub use user::{classify_login, normalize_user, normalize_user_with_report, LoginOutcome};
