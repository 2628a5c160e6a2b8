use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response wrapper returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload; `null` on failure.
    pub data: Option<T>,
    /// Human-readable status message.
    pub message: String,
}

/// Pagination metadata returned with list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// 1-based page number.
    pub page: u64,
    /// Page size.
    pub limit: u64,
    /// Number of matching records.
    pub total: u64,
    /// Number of pages at this page size.
    pub total_pages: u64,
}

/// Pagination metadata with the unfiltered record count (cow endpoints).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedPaginationMeta {
    /// Base pagination fields.
    #[serde(flatten)]
    pub pagination: PaginationMeta,
    /// Total count before filters were applied.
    pub grand_total: u64,
}

/// Paginated response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Page of records; `null` on failure.
    pub data: Option<Vec<T>>,
    /// Human-readable status message.
    pub message: String,
    /// Pagination metadata.
    pub pagination: PaginationMeta,
}

/// Loose envelope used internally where any part may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Status or error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Success flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Validation errors in whatever shape the backend produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl<T> Default for ApiEnvelope<T> {
    fn default() -> Self {
        Self {
            data: None,
            message: None,
            success: None,
            errors: None,
        }
    }
}

/// Payload of rate-limited responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondsLeftPayload {
    /// Seconds until the caller may retry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_left: Option<i64>,
}

/// User payload as returned by the auth endpoints; fields vary by endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUserPayload {
    /// Mongo document identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    /// Identifier when already mapped by the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 7-digit human-facing ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Login email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether 2FA is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_enabled: Option<bool>,
    /// Whether the email is verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// ISO date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Recovery contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_recovery_contact: Option<String>,
    /// Login still needs a 2FA code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_required: Option<bool>,
    /// Login still needs email verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_required: Option<bool>,
    /// Seconds until a new code may be requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_left: Option<i64>,
}

/// Login response when a second step is still required.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPendingResponse {
    /// Login still needs a 2FA code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_factor_required: Option<bool>,
    /// Login still needs email verification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_required: Option<bool>,
    /// Seconds until a new code may be requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds_left: Option<i64>,
}

/// Login response once the user is fully authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSuccessResponse {
    /// The authenticated user's payload.
    #[serde(flatten)]
    pub user: RawUserPayload,
}

/// Cow list response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CowListResponse<T> {
    /// Page of cows.
    pub data: Vec<T>,
    /// Pagination metadata including the unfiltered total.
    pub meta: ExtendedPaginationMeta,
}
