use thiserror::Error;

/// Validation errors for strictly parsed contract values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a string does not name any variant of a closed enum.
    #[error("{field} ('{value}') is not a known variant")]
    UnknownVariant {
        /// Enum that rejected the value.
        field: &'static str,
        /// Offending value.
        value: String,
    },
}
