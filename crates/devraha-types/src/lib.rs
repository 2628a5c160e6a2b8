//! Shared contracts for the Devraha frontends.
//!
//! Every client application that talks to the Devraha backend consumes these
//! declarations so that field names, optionality, and value domains agree
//! across codebases. Wire names follow the backend (camelCase, Mongo `_id`).
//!
//! Lenient conversion from loosely-typed payloads lives in `devraha-normalize`;
//! this crate only declares shapes and the error-message helpers.
//!
#![deny(missing_docs)]

/// API envelopes, pagination metadata, and login payload shapes.
pub mod api;
/// API error shape and message extraction helpers.
pub mod errors;
/// Domain models (users, cows, donations, puja orders).
pub mod models;
/// Validation errors raised by strict parsing.
pub mod validation;

pub use api::{
    ApiEnvelope, ApiResponse, CowListResponse, ExtendedPaginationMeta, LoginPendingResponse,
    LoginSuccessResponse, PaginatedResponse, PaginationMeta, RawUserPayload, SecondsLeftPayload,
};
pub use errors::{
    axios_error_message, axios_error_message_of, error_message, error_message_of, is_api_error,
    ApiError, AxiosErrorShape, AxiosResponse, DEFAULT_AXIOS_ERROR_MESSAGE, DEFAULT_ERROR_MESSAGE,
};
pub use models::{
    Admin, Cow, CowBackend, CowGender, Currency, Donation, DonationStatus, DonationTier,
    DonationType, LegacyDonation, LegacyDonationType, PujaCustomer, PujaDetails, PujaOrder,
    PujaOrderStatus, RecurringFrequency, User,
};
pub use validation::ValidationError;
