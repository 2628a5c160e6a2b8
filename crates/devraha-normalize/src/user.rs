//! User and login payload normalization.

use devraha_types::User;
use serde::Serialize;
use serde_json::Value;

use crate::coerce::{integral_number, is_truthy};
use crate::fields::Fields;
use crate::report::{DegradationKind, NormalizationReport, Normalized};

/// What a login response asks the client to do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum LoginOutcome {
    /// A 2FA code must be submitted.
    #[serde(rename_all = "camelCase")]
    TwoFactorRequired {
        /// Seconds until a new code may be requested.
        seconds_left: Option<i64>,
    },
    /// The email address must be verified first.
    #[serde(rename_all = "camelCase")]
    VerificationRequired {
        /// Seconds until a new code may be requested.
        seconds_left: Option<i64>,
    },
    /// Fully authenticated.
    Authenticated(User),
}

/// Normalizes a raw user payload into a [`User`]. Total.
pub fn normalize_user(raw: &Value) -> User {
    normalize_user_with_report(raw).value
}

/// Normalizes a raw user payload and reports fields that needed fixing.
///
/// The identifier comes from `_id`, or from `id` when the endpoint already
/// mapped it.
pub fn normalize_user_with_report(raw: &Value) -> Normalized<User> {
    let mut report = NormalizationReport::default();
    let value = {
        let mut fields = Fields::new(raw, &mut report);
        let id = fields.text("_id").or_else(|| fields.text("id"));
        User {
            id: id.unwrap_or_default(),
            user_id: fields.integer("userId"),
            email: fields.string("email"),
            name: fields.text("name"),
            two_factor_enabled: fields.flag("twoFactorEnabled"),
            is_verified: fields.flag("isVerified"),
            date_of_birth: fields.text("dateOfBirth"),
            emergency_recovery_contact: fields.text("emergencyRecoveryContact"),
        }
    };
    if value.id.is_empty() {
        report.record("id", DegradationKind::Missing);
    }
    tracing::trace!(id = %value.id, status = ?report.status, "normalized user");
    Normalized { value, report }
}

/// Classifies a login response.
///
/// A pending 2FA step wins over a pending verification step; otherwise the
/// payload is treated as the authenticated user.
pub fn classify_login(raw: &Value) -> LoginOutcome {
    let seconds_left = integral_number(raw.get("secondsLeft"));
    if is_truthy(raw.get("twoFactorRequired")) {
        LoginOutcome::TwoFactorRequired { seconds_left }
    } else if is_truthy(raw.get("verificationRequired")) {
        LoginOutcome::VerificationRequired { seconds_left }
    } else {
        LoginOutcome::Authenticated(normalize_user(raw))
    }
}
